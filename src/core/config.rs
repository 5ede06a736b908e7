//! Configuration management for the MCP server.
//!
//! Configuration is loaded once at startup from environment variables (with
//! `.env` support via dotenvy) and shared read-only for the lifetime of the
//! process.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::error::{Error, Result};

const DEFAULT_BASE_URL: &str = "https://api.proboprints.com";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream print API configuration.
    pub upstream: UpstreamConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the upstream print API.
#[derive(Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the print API.
    pub base_url: String,

    /// API key used for the Basic-auth header. Mandatory; startup fails
    /// without it.
    pub api_key: String,

    /// Whether orders default to `order_type: "test"` when the caller does
    /// not say otherwise.
    pub test_mode: bool,
}

/// Custom Debug implementation to redact the API key from logs.
impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("test_mode", &self.test_mode)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "print-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            upstream: UpstreamConfig::default(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            test_mode: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `MCP_`, e.g. `MCP_SERVER_NAME`
    /// or `MCP_PRINT_API_KEY`. A missing API key is a fatal startup error.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        config.upstream.api_key = std::env::var("MCP_PRINT_API_KEY").map_err(|_| {
            Error::config("MCP_PRINT_API_KEY is not set; the print API requires an API key")
        })?;

        if let Ok(base_url) = std::env::var("MCP_PRINT_API_BASE_URL") {
            config.upstream.base_url = base_url;
        }

        if let Ok(test_mode) = std::env::var("MCP_PRINT_TEST_MODE") {
            config.upstream.test_mode = test_mode.to_lowercase() != "false" && test_mode != "0";
        }
        info!(
            "Upstream: {} (default order type: {})",
            config.upstream.base_url,
            if config.upstream.test_mode {
                "test"
            } else {
                "production"
            }
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_from_env_requires_api_key() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_PRINT_API_KEY");
        }
        let result = Config::from_env();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_env_reads_upstream_settings() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_PRINT_API_KEY", "test_key_12345");
            std::env::set_var("MCP_PRINT_API_BASE_URL", "https://stub.example.com");
            std::env::set_var("MCP_PRINT_TEST_MODE", "false");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.upstream.api_key, "test_key_12345");
        assert_eq!(config.upstream.base_url, "https://stub.example.com");
        assert!(!config.upstream.test_mode);
        unsafe {
            std::env::remove_var("MCP_PRINT_API_KEY");
            std::env::remove_var("MCP_PRINT_API_BASE_URL");
            std::env::remove_var("MCP_PRINT_TEST_MODE");
        }
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let upstream = UpstreamConfig {
            api_key: "super_secret_key".to_string(),
            ..Default::default()
        };
        let debug_str = format!("{:?}", upstream);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_default_test_mode_is_safe() {
        let config = Config::default();
        assert!(config.upstream.test_mode);
    }
}
