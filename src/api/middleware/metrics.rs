//! HTTP Metrics Middleware
//!
//! Records Prometheus metrics for every HTTP request:
//! - Request count by method, endpoint, and status
//! - Request duration histogram by method and endpoint

use axum::{
    body::Body,
    extract::{MatchedPath, State},
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::metrics::{MetricsRegistry, Timer};

/// Middleware to record HTTP metrics for each request.
///
/// Must sit outside the panic-catching layer so that a failed handler is
/// still recorded, with the 500 it was turned into.
pub async fn metrics_middleware(
    State(metrics): State<MetricsRegistry>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let timer = Timer::new();

    // Extract method and path before consuming the request
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let response = next.run(request).await;

    let duration = timer.elapsed();
    let status = response.status().as_u16();

    metrics.record_http_request(&method, &path, status, duration);
    tracing::debug!(
        "{} {} -> {} in {:.3}ms",
        method,
        path,
        status,
        duration.as_secs_f64() * 1000.0
    );

    response
}
