//! Monitoring configuration records.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Default per-site check timeout (30 seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default interval between monitoring rounds (60 seconds).
pub const DEFAULT_INTERVAL_SECS: u64 = 60;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_interval_secs() -> u64 {
    DEFAULT_INTERVAL_SECS
}

/// One monitored endpoint: where to probe and what the body must contain.
///
/// Immutable once validated; rounds receive it read-only and it may be
/// reused across rounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute HTTP or HTTPS URL to probe.
    pub url: String,
    /// Literal, case-sensitive substring the response body must contain.
    pub content_requirement: String,
    /// Per-check deadline in seconds (default: 30).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl SiteConfig {
    /// Create a site entry with the default timeout.
    pub fn new(url: impl Into<String>, content_requirement: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content_requirement: content_requirement.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the per-check deadline in seconds.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Per-check deadline as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate this entry.
    ///
    /// # Errors
    /// Returns `ConfigError::Validation` for an empty or non-http(s) URL, an
    /// empty content requirement, or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site url cannot be empty".to_string(),
            ));
        }
        let parsed = url::Url::parse(&self.url).map_err(|e| {
            ConfigError::Validation(format!("invalid url '{}': {}", self.url, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "unsupported url scheme '{}' for '{}'",
                parsed.scheme(),
                self.url
            )));
        }
        if self.content_requirement.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "site '{}': content requirement cannot be empty",
                self.url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(format!(
                "site '{}': timeout must be positive",
                self.url
            )));
        }
        Ok(())
    }
}

/// Top-level monitoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    /// Ordered list of sites checked once per round.
    pub sites: Vec<SiteConfig>,
    /// Interval between round starts in seconds (default: 60).
    #[serde(default = "default_interval_secs")]
    pub check_interval_secs: u64,
    /// Result log file path. The CLI flag takes precedence when both are set.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl MonitoringConfig {
    /// Interval between round starts as a `Duration`.
    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }

    /// Create a copy with the interval replaced (CLI override).
    #[must_use]
    pub fn with_overridden_interval(mut self, secs: u64) -> Self {
        self.check_interval_secs = secs;
        self
    }

    /// Validate the configuration; fails fast on the first invalid entry.
    ///
    /// # Errors
    /// Returns `ConfigError::Validation` for an empty site list, a zero
    /// interval, or any invalid site entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sites.is_empty() {
            return Err(ConfigError::Validation(
                "at least one site must be configured".to_string(),
            ));
        }
        if self.check_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "check interval must be positive".to_string(),
            ));
        }
        for site in &self.sites {
            site.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> MonitoringConfig {
        MonitoringConfig {
            sites: vec![SiteConfig::new("https://example.com", "Example Domain")],
            check_interval_secs: 60,
            log_file: None,
        }
    }

    #[test]
    fn test_site_defaults() {
        let site = SiteConfig::new("https://example.com", "Example Domain");
        assert_eq!(site.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(site.timeout(), Duration::from_secs(30));
        assert!(site.validate().is_ok());
    }

    #[test]
    fn test_site_rejects_empty_url() {
        let site = SiteConfig::new("", "content");
        let err = site.validate().unwrap_err();
        assert!(err.to_string().contains("url cannot be empty"));
    }

    #[test]
    fn test_site_rejects_malformed_url() {
        let site = SiteConfig::new("not a url", "content");
        assert!(site.validate().is_err());
    }

    #[test]
    fn test_site_rejects_non_http_scheme() {
        let site = SiteConfig::new("ftp://example.com", "content");
        let err = site.validate().unwrap_err();
        assert!(err.to_string().contains("scheme"));
    }

    #[test]
    fn test_site_rejects_empty_content_requirement() {
        let site = SiteConfig::new("https://example.com", "   ");
        let err = site.validate().unwrap_err();
        assert!(err.to_string().contains("content requirement"));
    }

    #[test]
    fn test_site_rejects_zero_timeout() {
        let site = SiteConfig::new("https://example.com", "content").with_timeout_secs(0);
        let err = site.validate().unwrap_err();
        assert!(err.to_string().contains("timeout must be positive"));
    }

    #[test]
    fn test_config_rejects_empty_site_list() {
        let config = MonitoringConfig {
            sites: vec![],
            check_interval_secs: 60,
            log_file: None,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_zero_interval() {
        let config = valid_config().with_overridden_interval(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_interval_override() {
        let config = valid_config().with_overridden_interval(5);
        assert_eq!(config.check_interval(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_surfaces_first_invalid_site() {
        let config = MonitoringConfig {
            sites: vec![
                SiteConfig::new("https://ok.example", "fine"),
                SiteConfig::new("https://bad.example", ""),
            ],
            check_interval_secs: 60,
            log_file: None,
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("bad.example"));
    }
}
