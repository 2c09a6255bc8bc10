//! Account Service Binary
//!
//! Starts the account HTTP service.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin account-service
//! ```
//!
//! # Environment Variables
//!
//! - `ACCOUNT_SERVICE_CONFIG`: Config file path (default: config.yaml, else embedded defaults)
//! - `POSTGRES_USER`, `POSTGRES_PASSWORD`, `POSTGRES_HOST`, `POSTGRES_PORT`: Database access
//! - `HTTP_PORT`: HTTP server port (default: 8080)
//! - `RUST_LOG`: Log filter (overrides `observability.logging.level`)

use std::sync::Arc;

use account_service::config::{Config, load_config_or_embedded};
use account_service::infrastructure::http::{AppState, create_router};
use account_service::infrastructure::persistence::PostgresAccountStore;
use account_service::observability::init_tracing;
use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config_path = std::env::var("ACCOUNT_SERVICE_CONFIG").ok();
    let config = load_config_or_embedded(config_path.as_deref())?;

    init_tracing(&config.observability.logging)?;

    tracing::info!("Starting account service");
    log_config(&config);

    let store = PostgresAccountStore::connect(&config.database)
        .await
        .context("cannot connect to db")?;

    let app = create_router(AppState::new(Arc::new(store)));

    let listen_address = config.server.listen_address();
    let listener = TcpListener::bind(&listen_address)
        .await
        .with_context(|| format!("cannot bind {listen_address}"))?;

    tracing::info!(%listen_address, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /accounts");
    tracing::info!("  GET  /accounts/{{id}}");
    tracing::info!("  GET  /accounts?page_id=&page_size=");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("cannot start server")?;

    tracing::info!("Account service stopped");
    Ok(())
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

fn log_config(config: &Config) {
    tracing::info!(
        bind_address = %config.server.bind_address,
        http_port = config.server.http_port,
        db_host = %config.database.host,
        db_port = config.database.port,
        db_name = %config.database.name,
        log_format = %config.observability.logging.format,
        "Configuration loaded"
    );
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
