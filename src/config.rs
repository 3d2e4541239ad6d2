//! Gateway configuration
//!
//! Everything the handlers used to look up from the process environment is
//! read once here at startup and handed to them through `AppState`.

use config::{Config, Environment};
use serde::Deserialize;

use crate::error::{GatewayError, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ENVIRONMENT: &str = "development";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Deployment name echoed by `/health` (`ENVIRONMENT`)
    pub environment: String,
    /// Secret store address (`VAULT_ADDR`). Only its presence is reported.
    #[serde(default)]
    pub vault_addr: Option<String>,
    /// Secret store token (`VAULT_TOKEN`). Never dereferenced.
    #[serde(default)]
    pub vault_token: Option<String>,
    /// Comma separated CORS allow-list. Unset means any origin.
    #[serde(default)]
    pub cors_allowed_origins: Option<String>,
    /// `json` switches the log output to JSON lines
    #[serde(default)]
    pub log_format: Option<String>,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self> {
        Self::from_env_source(Environment::default())
    }

    /// Build configuration from an explicit set of variables instead of the
    /// process environment
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut source = config::Map::new();
        for (key, value) in vars {
            source.insert(key.into(), value.into());
        }
        Self::from_env_source(Environment::default().source(Some(source)))
    }

    fn from_env_source(env: Environment) -> Result<Self> {
        let mut config: AppConfig = Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("environment", DEFAULT_ENVIRONMENT)?
            .add_source(env)
            .build()?
            .try_deserialize()?;

        // An empty variable counts as unset
        config.vault_addr = config.vault_addr.filter(|v| !v.is_empty());
        config.vault_token = config.vault_token.filter(|v| !v.is_empty());
        config.cors_allowed_origins = config.cors_allowed_origins.filter(|v| !v.trim().is_empty());

        if config.host.trim().is_empty() {
            return Err(GatewayError::InvalidConfig("HOST must not be empty".to_string()));
        }

        Ok(config)
    }

    pub fn vault_configured(&self) -> bool {
        self.vault_addr.is_some()
    }

    pub fn vault_token_present(&self) -> bool {
        self.vault_token.is_some()
    }

    /// Explicit CORS origins, empty when every origin is allowed
    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .as_deref()
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn json_logs(&self) -> bool {
        matches!(self.log_format.as_deref(), Some(f) if f.eq_ignore_ascii_case("json"))
    }
}
