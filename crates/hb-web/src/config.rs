//! Host configuration
//!
//! Sources, lowest priority first:
//! 1. Built-in defaults
//! 2. Optional TOML file (`--config`)
//! 3. Environment, `HOPEBRIDGE__SECTION__KEY` (e.g. `HOPEBRIDGE__SERVER__PORT=9000`)
//!
//! CLI flags are applied on top by `main`.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{Result, ServerError};

pub const ENV_PREFIX: &str = "HOPEBRIDGE";
pub const DEFAULT_LOG_FILTER: &str = "info,hopebridge_web=debug,hb_web=debug";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    pub server: ServerSettings,
    pub log_filter: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Directory holding `index.html` and the compiled WASM bundle
    pub static_dir: PathBuf,
    pub compression: bool,
    pub security_headers: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            static_dir: PathBuf::from("dist"),
            compression: true,
            security_headers: true,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from `path` (if given) and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let raw = format!("{}:{}", self.server.host, self.server.port);
        raw.parse()
            .map_err(|_| ServerError::InvalidAddress(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.static_dir, PathBuf::from("dist"));
        assert_eq!(cfg.bind_addr().unwrap().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "log_filter = \"warn\"\n[server]\nport = 9100\nstatic_dir = \"public\""
        )
        .unwrap();

        let cfg = SiteConfig::load(Some(file.path())).unwrap();
        assert_eq!(cfg.server.port, 9100);
        assert_eq!(cfg.server.static_dir, PathBuf::from("public"));
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert!(cfg.server.compression);
        assert_eq!(cfg.log_filter, "warn");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = SiteConfig::load(Some(Path::new("/nonexistent/hopebridge.toml"))).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn test_bad_host_rejected() {
        let mut cfg = SiteConfig::default();
        cfg.server.host = "not a host".to_string();
        assert!(matches!(cfg.bind_addr(), Err(ServerError::InvalidAddress(_))));
    }
}
