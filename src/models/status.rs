use serde::Serialize;
use utoipa::ToSchema;
use std::collections::BTreeMap;

#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub uptime: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub service: &'static str,
    pub environment: String,
    pub vault_configured: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiStatusResponse {
    pub api_gateway: &'static str,
    pub uptime: String,
    pub timestamp: String,
    pub services: ServicesStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServicesStatus {
    pub vault: VaultSummary,
    pub prometheus: PrometheusSummary,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VaultSummary {
    pub configured: bool,
    /// The configured address, or `"not configured"`
    pub address: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PrometheusSummary {
    pub enabled: bool,
    pub endpoint: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InfoResponse {
    pub name: &'static str,
    pub description: &'static str,
    pub architecture: &'static str,
    pub services: Vec<&'static str>,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

/// Secret store configuration as reported by `/api/vault/status`.
///
/// Reflects configuration only; the store itself is never contacted.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum VaultStatusResponse {
    NotConfigured {
        status: &'static str,
        message: &'static str,
    },
    Configured {
        status: &'static str,
        address: String,
        token_present: bool,
    },
}

impl VaultStatusResponse {
    pub fn not_configured() -> Self {
        Self::NotConfigured {
            status: "not configured",
            message: "VAULT_ADDR not set",
        }
    }

    pub fn configured(address: String, token_present: bool) -> Self {
        Self::Configured {
            status: "configured",
            address,
            token_present,
        }
    }
}
