#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use service::memory::InMemoryStore;
use tower::ServiceExt;

use server::routes;
use server::state::AppState;

pub const TOKEN: &str = "1234";

pub fn build_app() -> (Arc<InMemoryStore>, Router) {
    let store = Arc::new(InMemoryStore::default());
    let state = AppState::in_memory(store.clone(), TOKEN);
    (store, routes::build_router(state, Duration::from_secs(5)))
}

pub fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri).header("token", TOKEN);
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send one request and decode the JSON body (`Value::Null` for empty bodies).
pub async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, body))
}

pub fn lujan() -> Value {
    serde_json::json!({
        "zip_code": "6700",
        "locality_name": "Lujan",
        "province_name": "Buenos Aires",
        "country_name": "Argentina"
    })
}

pub fn meli() -> Value {
    serde_json::json!({
        "cid": 1,
        "company_name": "Meli",
        "address": "Bulnes 10",
        "telephone": "123456",
        "localities_id": 1
    })
}
