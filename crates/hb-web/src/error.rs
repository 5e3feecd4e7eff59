//! Error types for the host server

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),

    #[error("Content error: {0}")]
    Content(#[from] hb_core::Error),

    #[error("Static directory not found: {0:?}")]
    StaticDirMissing(PathBuf),

    #[error("Server binding error: {0}")]
    Bind(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
