//! Runtime configuration.
//!
//! Defaults point at the public APIs; environment variables (optionally from a
//! `.env` file) can override them.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{DEFAULT_TIMEOUT_SECS, NWS_API_BASE, OPEN_METEO_API_BASE, USER_AGENT};

/// Settings shared by every tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// National Weather Service base URL (default: <https://api.weather.gov>)
    #[serde(default = "default_nws_base_url")]
    pub nws_base_url: String,

    /// Open-Meteo base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_open_meteo_base_url")]
    pub open_meteo_base_url: String,

    /// User-Agent sent upstream. NWS rejects anonymous clients.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_nws_base_url() -> String {
    NWS_API_BASE.to_string()
}

fn default_open_meteo_base_url() -> String {
    OPEN_METEO_API_BASE.to_string()
}

fn default_user_agent() -> String {
    USER_AGENT.to_string()
}

const fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            nws_base_url: default_nws_base_url(),
            open_meteo_base_url: default_open_meteo_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout(),
            log_level: default_log_level(),
        }
    }
}

impl WeatherConfig {
    /// Load configuration from the environment.
    ///
    /// Recognised variables: `WEATHER_NWS_API_BASE`, `WEATHER_OPEN_METEO_API_BASE`,
    /// `WEATHER_USER_AGENT`, `WEATHER_HTTP_TIMEOUT_SECS`, `WEATHER_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("WEATHER_NWS_API_BASE") {
            config.nws_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(url) = lookup("WEATHER_OPEN_METEO_API_BASE") {
            config.open_meteo_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(agent) = lookup("WEATHER_USER_AGENT") {
            config.user_agent = agent;
        }

        if let Some(raw) = lookup("WEATHER_HTTP_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout_secs = secs,
                _ => warn!(
                    "Ignoring WEATHER_HTTP_TIMEOUT_SECS={raw:?}, keeping {}s",
                    config.timeout_secs
                ),
            }
        }

        if let Some(level) = lookup("WEATHER_LOG_LEVEL") {
            config.log_level = level;
        }

        config
    }
}
