//! JSON-lines result log with file rotation.

use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;
use tracing_appender::rolling::RollingFileAppender;

use crate::probe::{CheckOutcome, CheckStatus};

use super::{ReportError, ResultLogger};

/// Marker distinguishing monitoring records from other log traffic.
const CHECK_TYPE: &str = "site_monitoring";

/// Serialized shape of one logged check.
#[derive(Serialize)]
struct ResultRecord<'a> {
    timestamp: String,
    url: &'a str,
    status: CheckStatus,
    response_time_ms: Option<u64>,
    error_message: Option<&'a str>,
    check_type: &'static str,
}

/// Writes one JSON object per outcome to a rotated log file.
///
/// Rotation is this logger's own concern; the engine knows nothing about
/// paths or rotation policy. Writes are flushed per record so results
/// survive an abrupt shutdown.
pub struct JsonFileLogger {
    writer: Mutex<RollingFileAppender>,
}

impl JsonFileLogger {
    /// Log to `directory/file_name.<date>`, rotated daily.
    pub fn daily(directory: impl AsRef<Path>, file_name: impl AsRef<Path>) -> Self {
        Self {
            writer: Mutex::new(tracing_appender::rolling::daily(directory, file_name)),
        }
    }

    /// Log to a single file without rotation.
    pub fn plain(directory: impl AsRef<Path>, file_name: impl AsRef<Path>) -> Self {
        Self {
            writer: Mutex::new(tracing_appender::rolling::never(directory, file_name)),
        }
    }
}

#[async_trait]
impl ResultLogger for JsonFileLogger {
    async fn log_outcome(&self, outcome: &CheckOutcome) -> Result<(), ReportError> {
        let record = ResultRecord {
            timestamp: outcome.timestamp.to_rfc3339(),
            url: &outcome.url,
            status: outcome.status,
            response_time_ms: outcome.response_time_ms,
            error_message: outcome.error_message.as_deref(),
            check_type: CHECK_TYPE,
        };
        let mut line = serde_json::to_vec(&record)?;
        line.push(b'\n');

        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writer.write_all(&line)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::RoundResult;
    use chrono::Utc;
    use std::time::Duration;

    fn read_records(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_outcome_record_shape() {
        let dir = tempfile::tempdir().unwrap();
        let logger = JsonFileLogger::plain(dir.path(), "results.log");

        logger
            .log_outcome(&CheckOutcome::success("https://example.com", 42))
            .await
            .unwrap();

        let records = read_records(&dir.path().join("results.log"));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["url"], "https://example.com");
        assert_eq!(records[0]["status"], "SUCCESS");
        assert_eq!(records[0]["response_time_ms"], 42);
        assert_eq!(records[0]["error_message"], serde_json::Value::Null);
        assert_eq!(records[0]["check_type"], "site_monitoring");
        assert!(records[0]["timestamp"].as_str().unwrap().contains('T'));
    }

    #[tokio::test]
    async fn test_round_writes_one_record_per_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let logger = JsonFileLogger::plain(dir.path(), "results.log");

        let round = RoundResult::new(
            vec![
                CheckOutcome::success("https://a.example", 5),
                CheckOutcome::timeout("https://b.example", Duration::from_secs(5)),
            ],
            Utc::now(),
            Utc::now(),
        );
        logger.log_round(&round).await.unwrap();

        let records = read_records(&dir.path().join("results.log"));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["url"], "https://a.example");
        assert_eq!(records[1]["status"], "TIMEOUT_ERROR");
        assert_eq!(records[1]["response_time_ms"], serde_json::Value::Null);
        assert!(
            records[1]["error_message"]
                .as_str()
                .unwrap()
                .contains("timed out")
        );
    }
}
