//! OpenAPI document and the documentation pages served from it
//!
//! - `/openapi.json`: the generated document
//! - `/docs`: interactive RapiDoc explorer
//! - `/redoc`: ReDoc reference page

use axum::{routing::get, Json, Router};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};

use crate::api::handlers::{metrics, status};
use crate::models;
use crate::AppState;

pub const OPENAPI_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ft_transcendence API Gateway",
        description = "API Gateway for ft_transcendence DevOps Infrastructure"
    ),
    paths(
        status::root,
        status::health_check,
        metrics::metrics_handler,
        status::api_status,
        status::info,
        status::vault_status,
    ),
    components(
        schemas(
            models::RootResponse,
            models::HealthResponse,
            models::ApiStatusResponse,
            models::ServicesStatus,
            models::VaultSummary,
            models::PrometheusSummary,
            models::InfoResponse,
            models::VaultStatusResponse,
        )
    ),
    tags(
        (name = "Gateway", description = "Service metadata and health"),
        (name = "Monitoring", description = "Prometheus scrape endpoint"),
        (name = "Secrets", description = "Secret store configuration (never contacted)"),
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn create_docs_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(OPENAPI_PATH, get(openapi_json))
        .merge(RapiDoc::new(OPENAPI_PATH).path("/docs"))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
}
