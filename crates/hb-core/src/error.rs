//! Error types for the HopeBridge core

use thiserror::Error;

/// Main error type for core operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    #[error("Content error: {0}")]
    Content(#[from] toml::de::Error),

    #[error("Invalid content: {0}")]
    InvalidContent(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an unknown page error
    pub fn unknown_page(id: impl Into<String>) -> Self {
        Error::UnknownPage(id.into())
    }

    /// Create an invalid content error
    pub fn invalid_content(msg: impl Into<String>) -> Self {
        Error::InvalidContent(msg.into())
    }
}
