use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use common::types::DataResponse;
use serde::Deserialize;
use service::locality::{Locality, LocalitySellersReport, NewLocality};
use tracing::info;

use crate::{errors::JsonApiError, metrics, state::AppState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportQuery {
    /// Postal code of the locality to report on
    pub zip_code: Option<String>,
}

#[utoipa::path(
    post, path = "/api/v1/localities", tag = "localities",
    params(("token" = String, Header, description = "API token")),
    request_body = crate::openapi::NewLocalityDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::LocalityDataDoc),
        (status = 400, description = "Malformed JSON", body = crate::openapi::ErrorDoc),
        (status = 409, description = "zip_code already registered", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Missing field", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewLocality>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<Locality>>), JsonApiError> {
    let Json(candidate) = payload?;
    candidate.validate()?;
    let locality = state.localities.save(candidate).await?;
    metrics::LOCALITIES_CREATED_TOTAL.inc();
    info!(id = locality.id, zip_code = %locality.zip_code, "locality_create_ok");
    Ok((StatusCode::CREATED, Json(DataResponse::new(locality))))
}

#[utoipa::path(
    get, path = "/api/v1/localities", tag = "localities",
    params(("token" = String, Header, description = "API token")),
    responses(
        (status = 200, description = "All localities", body = crate::openapi::LocalityListDoc),
        (status = 404, description = "No localities registered", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<DataResponse<Vec<Locality>>>, JsonApiError> {
    let localities = state.localities.get_all().await?;
    if localities.is_empty() {
        return Err(JsonApiError::not_found("there are no localities"));
    }
    Ok(Json(DataResponse::new(localities)))
}

#[utoipa::path(
    get, path = "/api/v1/localities/reportSellers", tag = "localities",
    params(ReportQuery, ("token" = String, Header, description = "API token")),
    responses(
        (status = 200, description = "Seller count for the locality", body = crate::openapi::ReportDataDoc),
        (status = 400, description = "zip_code missing", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Unknown zip_code", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn report_sellers(
    State(state): State<AppState>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Result<Json<DataResponse<LocalitySellersReport>>, JsonApiError> {
    let Query(q) = query?;
    let zip_code = q
        .zip_code
        .filter(|z| !z.trim().is_empty())
        .ok_or_else(|| JsonApiError::bad_request("zip_code is required"))?;
    let report = state.localities.report_sellers(&zip_code).await?;
    Ok(Json(DataResponse::new(report)))
}
