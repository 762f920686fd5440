//! Client configuration.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::api::DEFAULT_API_URL;
use crate::poller::DEFAULT_POLL_INTERVAL;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Resolved settings for a ground-control client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the vehicle API, without trailing slash.
    pub api_url: String,
    pub poll_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Raw file layout; every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfigInput {
    pub api_url: Option<String>,
    pub poll_interval_ms: Option<u64>,
}

impl ClientConfigInput {
    pub fn resolve(self) -> Result<ClientConfig, ConfigError> {
        let defaults = ClientConfig::default();

        let api_url = match self.api_url {
            Some(url) => normalize_url(&url)?,
            None => defaults.api_url,
        };

        let poll_interval = match self.poll_interval_ms {
            Some(0) => {
                return Err(ConfigError::Invalid(
                    "poll_interval_ms must be greater than zero".into(),
                ))
            }
            Some(ms) => Duration::from_millis(ms),
            None => defaults.poll_interval,
        };

        Ok(ClientConfig {
            api_url,
            poll_interval,
        })
    }
}

impl ClientConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        if input.trim().is_empty() {
            return Ok(ClientConfig::default());
        }
        let parsed: ClientConfigInput = toml::from_str(input)?;
        parsed.resolve()
    }

    /// Replace the API URL, applying the same checks as the file loader.
    pub fn with_api_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.api_url = normalize_url(url)?;
        Ok(self)
    }
}

fn normalize_url(url: &str) -> Result<String, ConfigError> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid("api_url must not be empty".into()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let cfg = ClientConfig::from_toml_str("  \n").unwrap();
        assert_eq!(cfg, ClientConfig::default());
        assert_eq!(cfg.api_url, "http://localhost:5000/api");
        assert_eq!(cfg.poll_interval, Duration::from_millis(5_000));
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
            api_url = "http://sim.local:8080/api/"
            poll_interval_ms = 2000
        "#;
        let cfg = ClientConfig::from_toml_str(toml).unwrap();
        assert_eq!(cfg.api_url, "http://sim.local:8080/api");
        assert_eq!(cfg.poll_interval, Duration::from_millis(2_000));
    }

    #[test]
    fn zero_interval_rejected() {
        let err = ClientConfig::from_toml_str("poll_interval_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unknown_key_rejected() {
        let err = ClientConfig::from_toml_str("api_uri = \"x\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn blank_url_rejected() {
        assert!(ClientConfig::default().with_api_url(" / ").is_err());
        let cfg = ClientConfig::default().with_api_url("/api/").unwrap();
        assert_eq!(cfg.api_url, "/api");
    }
}
