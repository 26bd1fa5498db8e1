use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use period_forecast::adapters::http::{app_router, ForecastAppState};
use period_forecast::adapters::{FileProfileStore, InMemoryProfileStore};
use period_forecast::config::{AppConfig, ServerConfig, StorageBackend, StorageConfig};
use period_forecast::ports::ProfileStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let store = build_store(&config.storage);
    let app = app_router(ForecastAppState::new(store));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        backend = ?config.storage.backend,
        "Period forecast server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` overrides the configured filter if set.
fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.json_logs {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn build_store(storage: &StorageConfig) -> Arc<dyn ProfileStore> {
    match storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory profile store; the profile is lost on restart");
            Arc::new(InMemoryProfileStore::new())
        }
        StorageBackend::File => {
            tracing::info!(path = %storage.path.display(), "Using file profile store");
            Arc::new(FileProfileStore::new(&storage.path))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
