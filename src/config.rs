//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Command-line flags of the server binary override the environment.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `RATE_LIMIT_ENABLED` - `true`/`1` to throttle `/api/v1` per client IP (default: `true`)
//! - `RATE_LIMIT_PERIOD_SECONDS` - Seconds per replenished request token (default: 2)
//! - `RATE_LIMIT_BURST` - Requests allowed in a burst (default: 100)
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"
//! export LOG_FORMAT="json"
//! export RATE_LIMIT_ENABLED="false"
//! ```

use crate::api::middleware::rate_limit::RateLimit;
use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub rate_limit_enabled: bool,
    /// Seconds between replenishing one rate limit token.
    pub rate_limit_period_seconds: u64,
    pub rate_limit_burst: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            rate_limit_enabled: true,
            rate_limit_period_seconds: 2,
            rate_limit_burst: 100,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// [`Config::default`] for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let rate_limit_enabled = env::var("RATE_LIMIT_ENABLED")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(defaults.rate_limit_enabled);

        let rate_limit_period_seconds = env::var("RATE_LIMIT_PERIOD_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.rate_limit_period_seconds);

        let rate_limit_burst = env::var("RATE_LIMIT_BURST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.rate_limit_burst);

        Self {
            listen_addr,
            log_level,
            log_format,
            rate_limit_enabled,
            rate_limit_period_seconds,
            rate_limit_burst,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - rate limiting is enabled with a zero period or burst
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

        if self.rate_limit_enabled {
            if self.rate_limit_period_seconds == 0 {
                anyhow::bail!("RATE_LIMIT_PERIOD_SECONDS must be greater than 0");
            }
            if self.rate_limit_burst == 0 {
                anyhow::bail!("RATE_LIMIT_BURST must be greater than 0");
            }
        }

        Ok(())
    }

    /// Rate limit settings, or `None` when throttling is disabled.
    pub fn rate_limit(&self) -> Option<RateLimit> {
        self.rate_limit_enabled.then_some(RateLimit {
            per_second: self.rate_limit_period_seconds,
            burst_size: self.rate_limit_burst,
        })
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        if self.rate_limit_enabled {
            tracing::info!(
                "  Rate limit: 1 request per {}s, burst {}",
                self.rate_limit_period_seconds,
                self.rate_limit_burst
            );
        } else {
            tracing::info!("  Rate limit: disabled");
        }
    }
}
