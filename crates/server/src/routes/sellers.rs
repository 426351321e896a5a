use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use common::types::DataResponse;
use service::seller::{NewSeller, Seller, SellerPatch};
use tracing::info;

use crate::{errors::JsonApiError, metrics, state::AppState};

#[utoipa::path(
    get, path = "/api/v1/sellers", tag = "sellers",
    params(("token" = String, Header, description = "API token")),
    responses(
        (status = 200, description = "All sellers", body = crate::openapi::SellerListDoc),
        (status = 401, description = "Missing or invalid token", body = crate::openapi::ErrorDoc),
        (status = 404, description = "No sellers registered", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<DataResponse<Vec<Seller>>>, JsonApiError> {
    let sellers = state.sellers.get_all().await?;
    if sellers.is_empty() {
        return Err(JsonApiError::not_found("there are no sellers"));
    }
    Ok(Json(DataResponse::new(sellers)))
}

#[utoipa::path(
    get, path = "/api/v1/sellers/{id}", tag = "sellers",
    params(
        ("id" = i32, Path, description = "Seller ID"),
        ("token" = String, Header, description = "API token")
    ),
    responses(
        (status = 200, description = "OK", body = crate::openapi::SellerDataDoc),
        (status = 400, description = "Malformed id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<DataResponse<Seller>>, JsonApiError> {
    let Path(id) = id?;
    let seller = state.sellers.get(id).await?;
    Ok(Json(DataResponse::new(seller)))
}

#[utoipa::path(
    post, path = "/api/v1/sellers", tag = "sellers",
    params(("token" = String, Header, description = "API token")),
    request_body = crate::openapi::NewSellerDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::SellerDataDoc),
        (status = 400, description = "Malformed JSON", body = crate::openapi::ErrorDoc),
        (status = 409, description = "cid already registered", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Missing field or unknown locality", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewSeller>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<Seller>>), JsonApiError> {
    let Json(candidate) = payload?;
    candidate.validate()?;
    let seller = state.sellers.save(candidate).await?;
    metrics::SELLERS_CREATED_TOTAL.inc();
    info!(id = seller.id, cid = seller.cid, "seller_create_ok");
    Ok((StatusCode::CREATED, Json(DataResponse::new(seller))))
}

#[utoipa::path(
    patch, path = "/api/v1/sellers/{id}", tag = "sellers",
    params(
        ("id" = i32, Path, description = "Seller ID"),
        ("token" = String, Header, description = "API token")
    ),
    request_body = crate::openapi::SellerPatchDoc,
    responses(
        (status = 200, description = "Merged record", body = crate::openapi::SellerDataDoc),
        (status = 400, description = "Malformed id or JSON", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "cid already registered", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<SellerPatch>, JsonRejection>,
) -> Result<Json<DataResponse<Seller>>, JsonApiError> {
    let Path(id) = id?;
    let Json(patch) = payload?;
    let seller = state.sellers.update(id, patch).await?;
    Ok(Json(DataResponse::new(seller)))
}

#[utoipa::path(
    delete, path = "/api/v1/sellers/{id}", tag = "sellers",
    params(
        ("id" = i32, Path, description = "Seller ID"),
        ("token" = String, Header, description = "API token")
    ),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Malformed id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<DataResponse<String>>, JsonApiError> {
    let Path(id) = id?;
    state.sellers.delete(id).await?;
    Ok(Json(DataResponse::new(format!("seller {id} deleted"))))
}
