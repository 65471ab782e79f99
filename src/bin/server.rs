use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use monopereo::{
    config::{self, CliArgs},
    create_app,
    repo::{InMemoryRepository, RepoHandle},
    store::DataStore,
    telemetry,
};
use tracing::{info, warn};

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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

    info!("Shutdown signal received, stopping server");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables before clap reads them
    dotenv::dotenv().ok();

    let args = CliArgs::parse();
    let file_update = config::load_file_update();
    let config = config::get_config(&args, file_update.as_ref().cloned().unwrap_or_default());

    let _guard = telemetry::init(config.json_logs, args.debug);

    if let Err(e) = &file_update {
        warn!("Ignoring config file: {}", e);
    }

    info!("Final configuration: bind={}, data_file={:?}, json_logs={}",
          config.bind_address(), config.data_file, config.json_logs);

    let store = match &config.data_file {
        Some(path) => DataStore::load(path)
            .with_context(|| format!("Failed to load data file {:?}", path))?,
        None => {
            info!("No data file configured, serving built-in data");
            DataStore::seeded()
        }
    };

    let repo: RepoHandle = Arc::new(InMemoryRepository::new(store));
    let app = create_app(repo);

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address()))?;

    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
