//! Runtime configuration.
//!
//! The binary fills [`Config`] from command-line flags and environment
//! variables; [`Config::validate`] rejects values the panel cannot run with.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::route::Route;

/// Default backend base URL.
pub const DEFAULT_API_URL: &str = "https://ec2-34-201-46-215.compute-1.amazonaws.com";

/// Default rows per page of the remote tables.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub page_size: usize,
    pub initial_route: Route,
    /// File backing the persistent key-value store (theme).
    pub state_file: PathBuf,
    pub request_timeout: Duration,
    /// UI tick interval.
    pub tick_rate: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            initial_route: Route::Orders,
            state_file: default_state_file(),
            request_timeout: Duration::from_secs(30),
            tick_rate: Duration::from_millis(250),
        }
    }
}

impl Config {
    pub fn validate(self) -> Result<Self, ConfigError> {
        let url = reqwest::Url::parse(&self.api_url)
            .map_err(|_| ConfigError::InvalidUrl(self.api_url.clone()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(self.api_url.clone()));
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.tick_rate.is_zero() {
            return Err(ConfigError::ZeroTick);
        }
        Ok(self)
    }
}

/// `$HOME/.config/orderdesk/state.json`, or `./orderdesk-state.json`
/// without a home directory.
pub fn default_state_file() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home)
            .join(".config")
            .join("orderdesk")
            .join("state.json"),
        _ => PathBuf::from("orderdesk-state.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_url() {
        let config = Config {
            api_url: "not a url".to_string(),
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidUrl("not a url".to_string()))
        );

        let config = Config {
            api_url: "ftp://host".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn rejects_zero_page_size_and_tick() {
        let config = Config {
            page_size: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroPageSize));

        let config = Config {
            tick_rate: Duration::ZERO,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTick));
    }
}
