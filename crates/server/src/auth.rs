use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use crate::errors::JsonApiError;
use crate::state::AppState;

pub const TOKEN_HEADER: &str = "token";

/// Middleware: every `/api/v1` request must carry the configured `token` header.
pub async fn require_token(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let authorized = req
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|t| t == &*state.token);
    if !authorized {
        warn!(method = %req.method(), path = %req.uri().path(), "rejected request without valid token");
        return Err(JsonApiError::unauthorized());
    }
    Ok(next.run(req).await)
}
