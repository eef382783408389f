//! Binary entrypoint for the recipes HTTP server.
//!
//! Configuration comes from environment variables, see
//! [`ServerConfig`](recipes_server::config::ServerConfig). Logging is
//! filtered by `RUST_LOG` (default: "info").

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use recipes_server::config::ServerConfig;
use recipes_server::router::build_router;
use recipes_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = ServerConfig::from_env().context("failed to read configuration")?;
    let state = AppState::new(&config);
    let app = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("recipes server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated with an error")?;

    tracing::info!("recipes server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "could not listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
}
