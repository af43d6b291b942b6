//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Bind Address
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"
//! # or, when only a port is given by the platform:
//! export PORT="8080"
//! ```
//!
//! `LISTEN` wins when both are set. Without either the service binds `0.0.0.0:5000`.
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `METADATA_ENDPOINT` - Item-info endpoint (default: the public iesdouyin endpoint)
//! - `SHORT_LINK_HOSTS` - Comma-separated hosts whose links are redirect-resolved
//!   (default: `v.douyin.com`)
//! - `USER_AGENT` - Browser user agent sent upstream
//! - `RESOLVE_TIMEOUT_SECS` - Redirect and metadata timeout (default: 10)
//! - `DOWNLOAD_TIMEOUT_SECS` - Download timeout (default: 30)
//! - `DOWNLOAD_DIR` - Directory for downloaded files (default: `.`)

use anyhow::Result;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::infrastructure::http::{DEFAULT_METADATA_ENDPOINT, DEFAULT_USER_AGENT, HttpClientConfig};

const DEFAULT_LISTEN: &str = "0.0.0.0:5000";
const DEFAULT_SHORT_LINK_HOST: &str = "v.douyin.com";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub metadata_endpoint: String,
    /// Hosts whose links are short links and must be redirect-resolved.
    pub short_link_hosts: Vec<String>,
    pub user_agent: String,
    pub resolve_timeout_secs: u64,
    pub download_timeout_secs: u64,
    pub download_dir: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Currently infallible; the signature matches [`load_from_env`].
    pub fn from_env() -> Result<Self> {
        let listen_addr = Self::load_listen_addr();
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let metadata_endpoint =
            env::var("METADATA_ENDPOINT").unwrap_or_else(|_| DEFAULT_METADATA_ENDPOINT.to_string());

        let short_link_hosts = env::var("SHORT_LINK_HOSTS")
            .map(|v| parse_host_list(&v))
            .unwrap_or_else(|_| vec![DEFAULT_SHORT_LINK_HOST.to_string()]);

        let user_agent =
            env::var("USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        let resolve_timeout_secs = env::var("RESOLVE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let download_timeout_secs = env::var("DOWNLOAD_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let download_dir = env::var("DOWNLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            metadata_endpoint,
            short_link_hosts,
            user_agent,
            resolve_timeout_secs,
            download_timeout_secs,
            download_dir,
        })
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. `0.0.0.0:{PORT}`
    /// 3. `0.0.0.0:5000`
    fn load_listen_addr() -> String {
        if let Ok(addr) = env::var("LISTEN") {
            return addr;
        }

        match env::var("PORT") {
            Ok(port) => format!("0.0.0.0:{}", port),
            Err(_) => DEFAULT_LISTEN.to_string(),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `metadata_endpoint` is not an http(s) URL
    /// - `short_link_hosts` is empty
    /// - a timeout is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.metadata_endpoint.starts_with("http://")
            && !self.metadata_endpoint.starts_with("https://")
        {
            anyhow::bail!(
                "METADATA_ENDPOINT must start with 'http://' or 'https://', got '{}'",
                self.metadata_endpoint
            );
        }

        if self.short_link_hosts.is_empty() {
            anyhow::bail!("SHORT_LINK_HOSTS must name at least one host");
        }

        if self.user_agent.trim().is_empty() {
            anyhow::bail!("USER_AGENT must not be empty");
        }

        if self.resolve_timeout_secs == 0 {
            anyhow::bail!("RESOLVE_TIMEOUT_SECS must be greater than 0");
        }
        if self.download_timeout_secs == 0 {
            anyhow::bail!("DOWNLOAD_TIMEOUT_SECS must be greater than 0");
        }

        Ok(())
    }

    /// Settings for the upstream HTTP client.
    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            user_agent: self.user_agent.clone(),
            metadata_endpoint: self.metadata_endpoint.clone(),
            resolve_timeout: Duration::from_secs(self.resolve_timeout_secs),
            download_timeout: Duration::from_secs(self.download_timeout_secs),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Metadata endpoint: {}", self.metadata_endpoint);
        tracing::info!("  Short link hosts: {}", self.short_link_hosts.join(", "));
        tracing::info!(
            "  Timeouts: resolve {}s, download {}s",
            self.resolve_timeout_secs,
            self.download_timeout_secs
        );
        tracing::info!("  Download dir: {}", self.download_dir.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Splits a comma-separated host list, dropping blanks and lowercasing.
fn parse_host_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|host| host.trim().to_ascii_lowercase())
        .filter(|host| !host.is_empty())
        .collect()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
