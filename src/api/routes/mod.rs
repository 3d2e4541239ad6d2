use axum::{
    http::{HeaderValue, StatusCode},
    middleware as axum_middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers;
use crate::api::middleware::metrics_middleware;
use crate::config::AppConfig;
use crate::docs;
use crate::AppState;

pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::status::root))
        .route("/health", get(handlers::status::health_check))
        .route("/metrics", get(handlers::metrics::metrics_handler))
        .route("/api/status", get(handlers::status::api_status))
        .route("/api/info", get(handlers::status::info))
        .route("/api/vault/status", get(handlers::status::vault_status))
}

/// Full application: routes, fallback, and the middleware stack.
///
/// Layer order from the outside in: trace, metrics, CORS, panic catching.
/// Metrics wraps CORS so that preflights answered by the CORS layer are
/// counted like any other request.
pub fn build_app(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config);

    create_router()
        .merge(docs::create_docs_routes())
        .fallback(not_found)
        .layer(CatchPanicLayer::new())
        .layer(cors)
        .layer(axum_middleware::from_fn_with_state(
            state.metrics.clone(),
            metrics_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy.
///
/// Without an allow-list every origin, method and header is accepted and
/// credentials are allowed. The request values are mirrored back because
/// a literal `*` cannot be combined with credentials. Narrow this with
/// `CORS_ALLOWED_ORIGINS` outside development.
pub fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins()
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}
