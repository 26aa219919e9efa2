//! Server entry point - the outermost composition root.
//!
//! Loads `.env`, initializes tracing, reads settings and hands off to
//! the Axum adapter. All service wiring happens in
//! `banty_axum::bootstrap`.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use banty_axum::ServerConfig;
use banty_core::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "banty-server", version, about = "Banty Car Accessories API server")]
struct Cli {
    /// Port to listen on; overrides the PORT environment variable.
    #[arg(long)]
    port: Option<u16>,

    /// Directory holding the bundled catalog snapshot.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut settings = Settings::from_env();
    if let Some(port) = cli.port {
        settings.port = port;
    }

    let mut config = ServerConfig::from_settings(settings);
    config.bundled_data_dir = cli.data_dir;

    tracing::info!(port = config.settings.port, "starting banty-server");
    banty_axum::start_server(config).await
}
