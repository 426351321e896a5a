use std::time::Duration;

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::{auth, errors::JsonApiError, metrics, openapi::ApiDoc, state::AppState};

pub mod localities;
pub mod sellers;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn prometheus_metrics() -> (StatusCode, String) {
    metrics::encode_metrics()
}

/// Rewrite the bare 408 produced by `TimeoutLayer` into the JSON error envelope.
async fn envelope_timeouts(resp: Response) -> Response {
    if resp.status() == StatusCode::REQUEST_TIMEOUT {
        return JsonApiError::request_timeout().into_response();
    }
    resp
}

/// Bound every request by `request_timeout`; expiry answers 408 in the error envelope.
pub fn with_request_timeout(router: Router, request_timeout: Duration) -> Router {
    router
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::map_response(envelope_timeouts))
}

/// Build the application router: public probes, token-protected `/api/v1`, and API docs.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    let api = Router::new()
        .route("/sellers", get(sellers::list).post(sellers::create))
        .route(
            "/sellers/:id",
            get(sellers::get).patch(sellers::update).delete(sellers::delete),
        )
        .route("/localities", get(localities::list).post(localities::create))
        .route("/localities/reportSellers", get(localities::report_sellers))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_token));

    let app = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
        .nest("/api/v1", api)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    with_request_timeout(app, request_timeout)
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
