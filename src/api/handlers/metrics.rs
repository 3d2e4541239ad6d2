//! Prometheus scrape endpoint

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::metrics::PROMETHEUS_CONTENT_TYPE;
use crate::AppState;

/// Render every recorded metric in the Prometheus text format.
///
/// Scraping is read-only: counters and histograms keep accumulating.
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Monitoring",
    responses(
        (status = 200, description = "Prometheus text exposition", body = String,
         content_type = "text/plain; version=0.0.4; charset=utf-8")
    )
)]
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
        state.metrics.render(),
    )
}
