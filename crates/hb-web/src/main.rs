//! hopebridge-web: Main Entry Point
//!
//! Serves the HopeBridge WASM site.
//!
//!   hopebridge-web                              # ./dist on 0.0.0.0:8080
//!   hopebridge-web --config site.toml           # file + HOPEBRIDGE__* env
//!   hopebridge-web --static-dir crates/hb-web-ui/dist --port 3000

use clap::Parser;
use hb_web::{SiteConfig, WebServer};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "hopebridge-web")]
#[command(about = "Static host for the HopeBridge site")]
struct Cli {
    /// TOML configuration file
    #[arg(long, short, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Bind host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides config)
    #[arg(long, short)]
    port: Option<u16>,

    /// Directory with index.html and the WASM bundle (overrides config)
    #[arg(long, value_name = "DIR")]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = SiteConfig::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(dir) = cli.static_dir {
        config.server.static_dir = dir;
    }

    // RUST_LOG wins over the configured filter
    tracing_subscriber::registry()
        .with(fmt::layer().compact())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    info!(
        "hopebridge-web {} starting (static_dir={:?})",
        env!("CARGO_PKG_VERSION"),
        config.server.static_dir
    );

    let server = WebServer::new(config)?;
    server.run().await?;
    Ok(())
}
