use anyhow::{Context, Result};
use axum::serve;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};
use user_directory::core::config::Config;
use user_directory::core::{routes, startup, tracing_init};

fn main() -> Result<()> {
    let explicit_path = env::args().nth(1).map(PathBuf::from);

    // An explicitly named file must exist; the default one is optional
    let (config, config_path) = match explicit_path {
        Some(path) => {
            let config = Config::from_file(&path)
                .context(format!("Failed to load configuration from '{}'", path.display()))?;
            (config, path)
        }
        None => {
            let path = PathBuf::from("config.toml");
            let config = Config::from_file_or_default(&path)
                .context(format!("Failed to load configuration from '{}'", path.display()))?;
            (config, path)
        }
    };

    // Initialize tracing/logging
    tracing_init::init_tracing(&config.logging);

    // Build Tokio runtime with configured number of threads
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.num_threads)
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;

    runtime.block_on(async_main(config, config_path))
}

async fn async_main(config: Config, config_path: PathBuf) -> Result<()> {
    info!(
        config_path = %config_path.display(),
        port = config.server.port,
        num_threads = config.server.num_threads,
        id_allocation = ?config.directory.id_allocation,
        log_level = %config.logging.level,
        log_format = %config.logging.format,
        "User directory starting"
    );

    let port = config.server.port;
    let state = startup::build_state(config);

    info!(users = state.directory.len(), "User directory startup complete");

    // Build the router with middleware
    let app = routes::build_router(Arc::new(state))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG))
                )
        );

    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr).await
        .context(format!("Failed to bind TCP listener to {}", addr))?;

    info!(address = %addr, "Server running at http://localhost:{}", port);

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Shutting down gracefully");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
