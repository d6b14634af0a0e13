use std::env::vars;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::Level;

pub const DEFAULT_SERVICE_URL: &str =
    "https://services.odata.org/TripPinRESTierService/(S(cv1yysz2rbrf5cdnhz2hj2ar))/People";
pub const DEFAULT_PAGE_SIZE: u64 = 5;
pub const DEFAULT_PAGE_LINKS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("ODATA_PAGE_SIZE must be at least 1")]
    ZeroPageSize,
    #[error("ODATA_SERVICE_URL must not be empty")]
    EmptyServiceUrl,
    #[error("LOG_LEVEL `{0}` is not a tracing level")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub service_url: String,
    pub page_size: u64,
    pub page_links: u64,
    pub reset_page_on_submit: bool,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            page_links: DEFAULT_PAGE_LINKS,
            reset_page_on_submit: false,
            log_level: Level::INFO,
        }
    }
}

// Every variable is optional; unset ones take the defaults above.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    odata_service_url: Option<String>,
    odata_page_size: Option<u64>,
    odata_page_links: Option<u64>,
    odata_reset_page_on_submit: Option<bool>,
    log_level: Option<String>,
}

impl AppConfig {
    /// Reads the process environment. In the browser the environment is
    /// empty and this yields the defaults.
    pub fn from_env() -> Result<Self> {
        let raw: RawConfig =
            serde_env::from_iter(vars()).context("failed to read configuration from env")?;
        Ok(Self::from_raw(raw)?)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let service_url = match raw.odata_service_url {
            Some(url) if url.trim().is_empty() => return Err(ConfigError::EmptyServiceUrl),
            Some(url) => url.trim().to_string(),
            None => defaults.service_url,
        };

        let page_size = raw.odata_page_size.unwrap_or(defaults.page_size);
        if page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }

        let log_level = match raw.log_level {
            Some(level) => level
                .parse::<Level>()
                .map_err(|_| ConfigError::InvalidLogLevel(level))?,
            None => defaults.log_level,
        };

        Ok(Self {
            service_url,
            page_size,
            page_links: raw.odata_page_links.unwrap_or(defaults.page_links),
            reset_page_on_submit: raw
                .odata_reset_page_on_submit
                .unwrap_or(defaults.reset_page_on_submit),
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_env::from_iter;

    #[test]
    fn unset_environment_gives_defaults() {
        let raw: RawConfig =
            from_iter(Vec::<(&str, &str)>::new()).expect("RawConfig should deserialize");

        let config = AppConfig::from_raw(raw).expect("empty config should build");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let raw: RawConfig = from_iter(vec![
            ("ODATA_SERVICE_URL", "http://localhost:8080/People"),
            ("ODATA_PAGE_SIZE", "20"),
            ("ODATA_PAGE_LINKS", "3"),
            ("ODATA_RESET_PAGE_ON_SUBMIT", "true"),
            ("LOG_LEVEL", "debug"),
        ])
        .expect("RawConfig should deserialize");

        let config = AppConfig::from_raw(raw).expect("config should build");
        assert_eq!(config.service_url, "http://localhost:8080/People");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.page_links, 3);
        assert!(config.reset_page_on_submit);
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let raw: RawConfig =
            from_iter(vec![("ODATA_PAGE_SIZE", "0")]).expect("RawConfig should deserialize");

        assert_eq!(AppConfig::from_raw(raw), Err(ConfigError::ZeroPageSize));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let raw: RawConfig =
            from_iter(vec![("LOG_LEVEL", "chatty")]).expect("RawConfig should deserialize");

        let err = AppConfig::from_raw(raw).expect_err("chatty is not a level");
        assert!(err.to_string().contains("chatty"));
    }
}
