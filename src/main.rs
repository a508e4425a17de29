//! `mural-studio` server binary.

use anyhow::Context;
use clap::Parser;
use mural_studio::api::rest::create_router;
use mural_studio::bootstrap::build_state;
use mural_studio::settings::AppConfig;
use mural_studio::telemetry::init_tracing;
use std::path::PathBuf;
use tokio::net::TcpListener;

/// Mural studio website backend.
#[derive(Debug, Parser)]
#[command(name = "mural-studio", version, about)]
struct Cli {
    /// Configuration file. Defaults to `config/default.toml` if present.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Port to listen on, overriding the configuration.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    init_tracing(&config.logging).context("failed to initialize tracing")?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting mural-studio");

    let state = build_state(&config)?;
    let router = create_router(state);

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    tracing::info!(%address, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
