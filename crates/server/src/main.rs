mod api;
mod app_config;
mod cli;
mod router;
mod state;

use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app_config::load_config;
use crate::cli::{CliArgs, Command};
use crate::state::AppState;

async fn serve(config: prosuite_core::Config) -> anyhow::Result<()> {
    config.log_summary();

    let addr = config.server.bind_addr();
    let state = Arc::new(AppState::new(config));
    info!(assistant = state.mazwi.assistant(), "Mazwi router ready");

    let app = router::build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .init();

    let mut config = load_config();
    let args = CliArgs::parse();

    if cli::dispatch(&config, &args).await? {
        return Ok(());
    }
    if let Some(Command::Serve { port: Some(port) }) = args.command {
        config.server.port = port;
    }
    serve(config).await
}
