//! Server configuration.
//!
//! Loaded from a YAML file named by the `HTTPD_CONFIG` environment variable,
//! with built-in defaults for every key. The `LISTEN` environment variable
//! overrides the configured listen address either way.
//!
//! ```yaml
//! server:
//!   listen_addr: "0.0.0.0:4000"
//! site:
//!   document_root: "htdocs"
//!   index_file: "index.html"
//! ```

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind. A `:0` port asks the OS for a free one; the
    /// listener logs the address it actually bound.
    pub listen_addr: String,
}

/// Filesystem side of the configuration: where URL paths resolve to.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory under which all URL paths are resolved.
    pub document_root: PathBuf,

    /// Appended to directory paths (`/` and `/sub/` requests).
    pub index_file: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:4000".to_string(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            document_root: PathBuf::from("htdocs"),
            index_file: "index.html".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("HTTPD_CONFIG") {
            Ok(path) => Self::from_yaml(&std::fs::read_to_string(&path)?)?,
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }

        Ok(cfg)
    }

    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
