//! Configuration loaded from `~/.config/urlsift/config.toml`.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::http::HttpOptions;

/// Browser-style User-Agent sent to both archive services; some of them
/// reject requests with library-default agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Global configuration. All fields have defaults so a missing or partial
/// file still yields a working setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiftConfig {
    /// Total per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Connect-phase timeout in seconds.
    pub connect_timeout_secs: u64,
    /// User-Agent header for all requests.
    pub user_agent: String,
    /// OTX page size (the API's `limit` parameter).
    pub otx_page_limit: u32,
    /// Maximum OTX pages to follow; 1 fetches only the first page.
    pub otx_max_pages: u32,
    /// Extra sensitive extensions on top of the built-in list
    /// (e.g. [".env", ".pfx"]).
    pub extra_extensions: Vec<String>,
}

impl Default for SiftConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            connect_timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            otx_page_limit: 500,
            otx_max_pages: 10,
            extra_extensions: Vec::new(),
        }
    }
}

impl SiftConfig {
    /// Per-request HTTP options derived from this config.
    pub fn http_options(&self) -> HttpOptions {
        HttpOptions {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlsift")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SiftConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SiftConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SiftConfig = toml::from_str(&data)?;
    Ok(cfg)
}
