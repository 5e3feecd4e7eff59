//! Application State
//!
//! Shared, read-only state for the request handlers.

use hb_core::SiteContent;
use std::path::PathBuf;
use std::time::Instant;

pub struct AppState {
    /// Directory the SPA is served from
    pub static_dir: PathBuf,
    /// Content catalog, used by the diagnostic endpoints
    pub content: SiteContent,
    /// Server start time
    pub start_time: Instant,
}

impl AppState {
    pub fn new(static_dir: impl Into<PathBuf>) -> hb_core::Result<Self> {
        Ok(Self {
            static_dir: static_dir.into(),
            content: SiteContent::embedded()?,
            start_time: Instant::now(),
        })
    }

    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
