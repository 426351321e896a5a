use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::ModelError;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

use crate::metrics;

/// Error envelope: `{"code": <status>, "error": <reason>, "message": <detail>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(message.into()))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", Some(message.into()))
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized", Some("invalid or missing token".into()))
    }

    pub fn request_timeout() -> Self {
        Self::new(StatusCode::REQUEST_TIMEOUT, "Request Timeout", Some("request took too long".into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status == StatusCode::CONFLICT {
            metrics::CONFLICTS_TOTAL.inc();
        }
        let body = serde_json::json!({
            "code": self.status.as_u16(),
            "error": self.error,
            "message": self.message.unwrap_or_default(),
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(_) | ServiceError::Model(_) => {
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", Some(e.to_string()))
            }
            ServiceError::NotFound(_) => Self::not_found(e.to_string()),
            ServiceError::Conflict(_) => Self::new(StatusCode::CONFLICT, "Conflict", Some(e.to_string())),
            ServiceError::Db(_) => {
                error!(err = %e, "storage fault");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(e.to_string()))
            }
        }
    }
}

impl From<ModelError> for JsonApiError {
    fn from(e: ModelError) -> Self { ServiceError::from(e).into() }
}

impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self { Self::bad_request(r.body_text()) }
}

impl From<PathRejection> for JsonApiError {
    fn from(r: PathRejection) -> Self { Self::bad_request(r.body_text()) }
}

impl From<QueryRejection> for JsonApiError {
    fn from(r: QueryRejection) -> Self { Self::bad_request(r.body_text()) }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database migration failed: {0}")]
    Migration(#[from] sea_orm::DbErr),
    #[error("server i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("database connection failed: {0}")]
    Connect(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status_codes() {
        let cases = [
            (ServiceError::Validation("x".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (ServiceError::Model(ModelError::Validation("cid is required".into())), StatusCode::UNPROCESSABLE_ENTITY),
            (ServiceError::not_found("seller 1"), StatusCode::NOT_FOUND),
            (ServiceError::Conflict("dup".into()), StatusCode::CONFLICT),
            (ServiceError::Db("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn conflicts_are_counted_once_per_response() {
        let before = metrics::CONFLICTS_TOTAL.get();
        let err = JsonApiError::from(ServiceError::Conflict("seller with cid 1 already exists".into()));
        assert_eq!(metrics::CONFLICTS_TOTAL.get(), before);

        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        assert_eq!(metrics::CONFLICTS_TOTAL.get(), before + 1);
    }

    #[test]
    fn envelope_carries_code() {
        let resp = JsonApiError::not_found("seller 3 not found").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
