//! Status and info handlers
//!
//! Every handler here is a pure read of the process clock and the startup
//! configuration.

use axum::{extract::State, Json};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::models::{
    ApiStatusResponse, HealthResponse, InfoResponse, PrometheusSummary, RootResponse,
    ServicesStatus, VaultStatusResponse, VaultSummary,
};
use crate::utils::{format_uptime, timestamp_now};
use crate::AppState;

pub const SERVICE_NAME: &str = "ft_transcendence API Gateway";
pub const SERVICE_ID: &str = "api-gateway";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service metadata and uptime
#[utoipa::path(
    get,
    path = "/",
    tag = "Gateway",
    responses((status = 200, description = "Service is running", body = RootResponse))
)]
pub async fn root(State(state): State<Arc<AppState>>) -> Json<RootResponse> {
    Json(RootResponse {
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        status: "running",
        uptime: format_uptime(state.clock.uptime()),
    })
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = "Gateway",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: timestamp_now(),
        service: SERVICE_ID,
        environment: state.config.environment.clone(),
        vault_configured: state.config.vault_configured(),
    })
}

/// Gateway status with a summary of the services it knows about
#[utoipa::path(
    get,
    path = "/api/status",
    tag = "Gateway",
    responses((status = 200, description = "Gateway and service summary", body = ApiStatusResponse))
)]
pub async fn api_status(State(state): State<Arc<AppState>>) -> Json<ApiStatusResponse> {
    Json(ApiStatusResponse {
        api_gateway: "operational",
        uptime: format_uptime(state.clock.uptime()),
        timestamp: timestamp_now(),
        services: ServicesStatus {
            vault: VaultSummary {
                configured: state.config.vault_configured(),
                address: state
                    .config
                    .vault_addr
                    .clone()
                    .unwrap_or_else(|| "not configured".to_string()),
            },
            prometheus: PrometheusSummary {
                enabled: true,
                endpoint: "/metrics",
            },
        },
    })
}

/// Static description of the deployment. Nothing is probed.
#[utoipa::path(
    get,
    path = "/api/info",
    tag = "Gateway",
    responses((status = 200, description = "System information", body = InfoResponse))
)]
pub async fn info() -> Json<InfoResponse> {
    let endpoints = BTreeMap::from([
        ("health", "/health"),
        ("metrics", "/metrics"),
        ("status", "/api/status"),
        ("docs", "/docs"),
        ("redoc", "/redoc"),
    ]);

    Json(InfoResponse {
        name: "ft_transcendence",
        description: "DevOps Infrastructure - API Gateway",
        architecture: "microservices",
        services: vec![
            "frontend (React)",
            "api-gateway (axum)",
            "monitoring (Prometheus + Grafana)",
            "secrets (HashiCorp Vault)",
        ],
        endpoints,
    })
}

/// Report whether a secret store is configured.
///
/// This only echoes `VAULT_ADDR` and whether `VAULT_TOKEN` is set; it does
/// not check that the store is reachable.
#[utoipa::path(
    get,
    path = "/api/vault/status",
    tag = "Secrets",
    responses((status = 200, description = "Secret store configuration", body = VaultStatusResponse))
)]
pub async fn vault_status(State(state): State<Arc<AppState>>) -> Json<VaultStatusResponse> {
    let response = match &state.config.vault_addr {
        None => VaultStatusResponse::not_configured(),
        Some(address) => {
            VaultStatusResponse::configured(address.clone(), state.config.vault_token_present())
        }
    };

    Json(response)
}
