//! Terminal classification of check outcomes.

use serde::{Deserialize, Serialize};

/// Status of a single site check.
///
/// Exactly four terminal values; every probe resolves to one of them.
/// Serialized in the upper snake form used by the result log
/// (`SUCCESS`, `CONNECTION_ERROR`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    /// Response arrived in time, 2xx/3xx, and the body contained the
    /// required content.
    Success,
    /// Transport failure (DNS, connect, TLS, read) or an HTTP 4xx/5xx
    /// response.
    ConnectionError,
    /// Response completed with a good status but the body lacked the
    /// required content.
    ContentError,
    /// The per-site deadline elapsed before the response completed.
    TimeoutError,
}

impl CheckStatus {
    /// Get the status name as used in the result log.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::ConnectionError => "CONNECTION_ERROR",
            Self::ContentError => "CONTENT_ERROR",
            Self::TimeoutError => "TIMEOUT_ERROR",
        }
    }

    /// Whether this status is one of the three failure classifications.
    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::Success)
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
