use utoipa::{OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub code: u16, pub error: String, pub message: String }

#[derive(ToSchema)]
pub struct SellerDoc {
    pub id: i32,
    pub cid: i32,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub localities_id: i32,
}

#[derive(ToSchema)]
pub struct NewSellerDoc {
    pub cid: i32,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub localities_id: i32,
}

/// Absent, empty or zero fields keep the stored value.
#[derive(ToSchema)]
pub struct SellerPatchDoc {
    pub cid: Option<i32>,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
}

#[derive(ToSchema)]
pub struct SellerDataDoc { pub data: SellerDoc }

#[derive(ToSchema)]
pub struct SellerListDoc { pub data: Vec<SellerDoc> }

#[derive(ToSchema)]
pub struct LocalityDoc {
    pub id: i32,
    pub zip_code: String,
    pub locality_name: String,
    pub province_name: String,
    pub country_name: String,
}

#[derive(ToSchema)]
pub struct NewLocalityDoc {
    pub zip_code: String,
    pub locality_name: String,
    pub province_name: String,
    pub country_name: String,
}

#[derive(ToSchema)]
pub struct LocalityDataDoc { pub data: LocalityDoc }

#[derive(ToSchema)]
pub struct LocalityListDoc { pub data: Vec<LocalityDoc> }

#[derive(ToSchema)]
pub struct ReportDoc { pub zip_code: String, pub locality_name: String, pub sellers_count: usize }

#[derive(ToSchema)]
pub struct ReportDataDoc { pub data: ReportDoc }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::sellers::list,
        crate::routes::sellers::get,
        crate::routes::sellers::create,
        crate::routes::sellers::update,
        crate::routes::sellers::delete,
        crate::routes::localities::create,
        crate::routes::localities::list,
        crate::routes::localities::report_sellers,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            SellerDoc,
            NewSellerDoc,
            SellerPatchDoc,
            SellerDataDoc,
            SellerListDoc,
            LocalityDoc,
            NewLocalityDoc,
            LocalityDataDoc,
            LocalityListDoc,
            ReportDoc,
            ReportDataDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "sellers"),
        (name = "localities")
    )
)]
pub struct ApiDoc;
