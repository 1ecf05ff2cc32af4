//! EdaMorph backend
//!
//! Serves the analysis frontend and the JSON API it calls.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use edamorph_kernel::{AppState, Config, app};

/// EdaMorph exploratory data analysis backend.
#[derive(Debug, Parser)]
#[command(name = "edamorph", version)]
struct Cli {
    /// Redirect page requests to the live frontend dev server.
    #[arg(long)]
    dev: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let config = Config::from_env()
        .context("failed to load configuration")?
        .with_dev_mode(cli.dev);

    if config.dev_mode {
        info!(url = %config.frontend_dev_url, "Running in dev mode (live frontend server)");
    } else {
        info!(dir = %config.frontend_dir.display(), "Running in production mode (built static files)");
    }

    let state = AppState::new(&config);
    info!(formats = ?state.loaders().extensions(), "File loaders registered");

    let router = app(&config, state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind to address")?;

    info!(%addr, "Server listening");

    axum::serve(listener, router).await.context("server error")?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
