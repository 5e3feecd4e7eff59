//! Web server implementation

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

use crate::config::SiteConfig;
use crate::error::{Result, ServerError};
use crate::routes::create_router;
use crate::state::AppState;

pub struct WebServer {
    config: SiteConfig,
    state: Arc<AppState>,
}

impl WebServer {
    /// Create a new web server. Fails if the static directory does not exist.
    pub fn new(config: SiteConfig) -> Result<Self> {
        let static_dir = config.server.static_dir.clone();
        if !static_dir.is_dir() {
            return Err(ServerError::StaticDirMissing(static_dir));
        }
        if !static_dir.join("index.html").is_file() {
            warn!("No index.html in {:?}; page requests will 404", static_dir);
        }

        let state = Arc::new(AppState::new(static_dir)?);
        Ok(Self { config, state })
    }

    pub fn router(&self) -> axum::Router {
        create_router(self.state.clone(), &self.config.server)
    }

    /// Serve until Ctrl+C or SIGTERM.
    pub async fn run(self) -> Result<()> {
        let addr: SocketAddr = self.config.bind_addr()?;
        let router = self.router();
        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!("Serving {:?} on http://{}", self.state.static_dir, addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down...");
        },
    }
}
