use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod docs;
mod error;
mod metrics;
mod models;
mod utils;

use crate::config::AppConfig;
use crate::error::GatewayError;
use crate::metrics::MetricsRegistry;
use crate::utils::ProcessClock;

pub struct AppState {
    pub config: AppConfig,
    pub metrics: MetricsRegistry,
    pub clock: ProcessClock,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Capture start time before anything else so uptime covers startup
    let clock = ProcessClock::start();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = AppConfig::load()?;

    init_tracing(&config);

    tracing::info!("Starting ft_transcendence API Gateway v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Process started at {}", clock.started_at().to_rfc3339());
    match &config.vault_addr {
        Some(addr) => tracing::info!("Vault address configured: {}", addr),
        None => tracing::info!("Vault not configured (VAULT_ADDR not set)"),
    }
    if config.cors_origins().is_empty() {
        tracing::warn!("CORS allows any origin with credentials; set CORS_ALLOWED_ORIGINS to restrict");
    }

    let metrics = MetricsRegistry::new()?;
    tracing::info!("Metrics registry initialized");

    let host = config.host.clone();
    let port = config.port;

    let state = Arc::new(AppState {
        config,
        metrics,
        clock,
    });

    let app = api::routes::build_app(state);

    // Start server
    let listener = bind_listener(&host, port).await?;
    serve(listener, app).await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn bind_listener(host: &str, port: u16) -> error::Result<TcpListener> {
    let listener = TcpListener::bind((host, port)).await.map_err(|e| {
        tracing::error!("Failed to bind {}:{}: {}", host, port, e);
        GatewayError::Io(e)
    })?;
    tracing::info!("Server listening on {}", listener.local_addr()?);
    Ok(listener)
}

async fn serve(listener: TcpListener, app: Router) -> error::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "api_gateway=debug,tower_http=debug".into());

    if config.json_logs() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
