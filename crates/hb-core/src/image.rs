//! Image sources with a single fallback

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A primary URL and the URL shown if it fails to load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSource {
    pub src: String,
    pub fallback: String,
}

impl ImageSource {
    pub fn new(src: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            fallback: fallback.into(),
        }
    }
}

/// Display state of one image element
///
/// The first load error switches to the fallback URL. Later errors are
/// ignored, so a broken fallback does not loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackImage {
    source: ImageSource,
    using_fallback: bool,
}

impl FallbackImage {
    pub fn new(source: ImageSource) -> Self {
        Self {
            source,
            using_fallback: false,
        }
    }

    pub fn current_src(&self) -> &str {
        if self.using_fallback {
            &self.source.fallback
        } else {
            &self.source.src
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.using_fallback
    }

    /// Record a load failure. Returns the URL to switch to, if any.
    pub fn on_error(&mut self) -> Option<&str> {
        if self.using_fallback {
            return None;
        }
        self.using_fallback = true;
        debug!(src = %self.source.src, fallback = %self.source.fallback, "image failed, using fallback");
        Some(&self.source.fallback)
    }
}
