use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

pub static SELLERS_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("sellers_api_sellers_created_total", "Sellers created")
        .expect("register sellers_created_total")
});

pub static LOCALITIES_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("sellers_api_localities_created_total", "Localities created")
        .expect("register localities_created_total")
});

pub static CONFLICTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "sellers_api_conflicts_total",
        "Writes rejected because a business key was already taken"
    )
    .expect("register conflicts_total")
});

/// Render the default registry in the Prometheus text format.
pub fn encode_metrics() -> (StatusCode, String) {
    // touch the counters so they are listed before the first write
    Lazy::force(&SELLERS_CREATED_TOTAL);
    Lazy::force(&LOCALITIES_CREATED_TOTAL);
    Lazy::force(&CONFLICTS_TOTAL);

    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&prometheus::gather(), &mut buffer) {
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("metrics encode error: {e}"));
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}
