//! hb-web: static host for the HopeBridge site
//!
//! Serves the compiled WASM bundle with an SPA fallback. The site itself
//! makes no requests back to this server.
//!
//! ```text
//! /api/health   - Health check
//! /api/pages    - Page identifiers and headings
//! /*            - Static files, falling back to index.html
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use crate::config::{ServerSettings, SiteConfig};
pub use crate::error::{Result, ServerError};
pub use crate::routes::create_router;
pub use crate::server::WebServer;
pub use crate::state::AppState;
