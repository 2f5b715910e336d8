//! Probe results and per-round aggregates.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::CheckStatus;

/// Result of one probe against one site.
///
/// Created exactly once by a prober and immutable afterwards. The
/// constructors enforce that `error_message` is present iff the status is a
/// failure, and that `response_time_ms` is absent on failures that never
/// received a response.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    /// URL that was probed.
    pub url: String,
    /// Terminal classification of the check.
    pub status: CheckStatus,
    /// Elapsed request time in milliseconds. Present on completed attempts,
    /// including failures that received a response; absent on connection or
    /// timeout failures with no response.
    pub response_time_ms: Option<u64>,
    /// Failure description. Present iff `status` is not `Success`.
    pub error_message: Option<String>,
    /// Instant the check completed.
    pub timestamp: DateTime<Utc>,
}

impl CheckOutcome {
    /// Successful check: good status, content requirement satisfied.
    pub fn success(url: impl Into<String>, response_time_ms: u64) -> Self {
        Self {
            url: url.into(),
            status: CheckStatus::Success,
            response_time_ms: Some(response_time_ms),
            error_message: None,
            timestamp: Utc::now(),
        }
    }

    /// The per-site deadline elapsed before the response completed.
    pub fn timeout(url: impl Into<String>, deadline: Duration) -> Self {
        Self {
            url: url.into(),
            status: CheckStatus::TimeoutError,
            response_time_ms: None,
            error_message: Some(format!(
                "request timed out after {} seconds",
                deadline.as_secs()
            )),
            timestamp: Utc::now(),
        }
    }

    /// Transport failure or HTTP error status. `response_time_ms` is `Some`
    /// only when a response was actually received (e.g. a 404 in time).
    pub fn connection_error(
        url: impl Into<String>,
        message: impl Into<String>,
        response_time_ms: Option<u64>,
    ) -> Self {
        Self {
            url: url.into(),
            status: CheckStatus::ConnectionError,
            response_time_ms,
            error_message: Some(message.into()),
            timestamp: Utc::now(),
        }
    }

    /// Response completed but the body lacked the required content.
    pub fn content_error(
        url: impl Into<String>,
        requirement: &str,
        response_time_ms: u64,
    ) -> Self {
        Self {
            url: url.into(),
            status: CheckStatus::ContentError,
            response_time_ms: Some(response_time_ms),
            error_message: Some(format!(
                "content requirement not met: '{requirement}' not found in response body"
            )),
            timestamp: Utc::now(),
        }
    }

    /// Whether the check succeeded.
    pub fn is_success(&self) -> bool {
        self.status == CheckStatus::Success
    }
}

/// All outcomes of one monitoring round.
///
/// Outcomes are in input-site order regardless of completion order, with
/// exactly one outcome per site. Success and failure counts are derived,
/// never stored.
#[derive(Debug, Clone, Serialize)]
pub struct RoundResult {
    /// One outcome per site, in the order the sites were supplied.
    pub outcomes: Vec<CheckOutcome>,
    /// Instant the round started.
    pub started_at: DateTime<Utc>,
    /// Instant the last probe resolved.
    pub completed_at: DateTime<Utc>,
}

impl RoundResult {
    /// Assemble a finished round.
    pub fn new(
        outcomes: Vec<CheckOutcome>,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            outcomes,
            started_at,
            completed_at,
        }
    }

    /// Number of successful checks in this round.
    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of failed checks in this round.
    pub fn failure_count(&self) -> usize {
        self.outcomes.len() - self.success_count()
    }

    /// Total round wall time.
    pub fn duration(&self) -> chrono::Duration {
        self.completed_at - self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_outcome_has_no_error_message() {
        let outcome = CheckOutcome::success("https://example.com", 42);
        assert!(outcome.is_success());
        assert_eq!(outcome.response_time_ms, Some(42));
        assert!(outcome.error_message.is_none());
    }

    #[test]
    fn test_timeout_outcome_omits_response_time() {
        let outcome = CheckOutcome::timeout("https://example.com", Duration::from_secs(5));
        assert_eq!(outcome.status, CheckStatus::TimeoutError);
        assert_eq!(outcome.response_time_ms, None);
        assert!(outcome.error_message.as_deref().unwrap().contains("5"));
    }

    #[test]
    fn test_connection_error_keeps_response_time_when_present() {
        let outcome =
            CheckOutcome::connection_error("https://example.com", "HTTP error 404: Not Found", Some(12));
        assert_eq!(outcome.status, CheckStatus::ConnectionError);
        assert_eq!(outcome.response_time_ms, Some(12));
        assert!(outcome.error_message.as_deref().unwrap().contains("404"));
    }

    #[test]
    fn test_content_error_names_missing_requirement() {
        let outcome = CheckOutcome::content_error("https://example.com", "slideshow", 8);
        assert_eq!(outcome.status, CheckStatus::ContentError);
        assert!(outcome.error_message.as_deref().unwrap().contains("slideshow"));
    }

    #[test]
    fn test_round_counts_are_derived() {
        let round = RoundResult::new(
            vec![
                CheckOutcome::success("https://a.example", 1),
                CheckOutcome::content_error("https://b.example", "needle", 2),
                CheckOutcome::timeout("https://c.example", Duration::from_secs(5)),
            ],
            Utc::now(),
            Utc::now(),
        );
        assert_eq!(round.success_count(), 1);
        assert_eq!(round.failure_count(), 2);
        assert_eq!(round.outcomes.len(), 3);
    }
}
