//! Reporting Layer
//!
//! Durable recording of finished check results. Loggers own their storage
//! concerns (paths, rotation); the engine only hands over outcomes.
//!
//! - [`ResultLogger`]: sink trait for finished checks
//! - [`JsonFileLogger`]: one JSON object per outcome, daily-rotated file

mod file;

pub use file::JsonFileLogger;

use async_trait::async_trait;
use thiserror::Error;

use crate::probe::{CheckOutcome, RoundResult};

/// Errors that can occur while recording results.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to write the result log.
    #[error("failed to write result log: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize a result record.
    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable sink for finished check results.
///
/// A cancelled round is never delivered, so implementations only ever see
/// complete rounds and can assume one record per configured site.
#[async_trait]
pub trait ResultLogger: Send + Sync + 'static {
    /// Record a single check outcome.
    async fn log_outcome(&self, outcome: &CheckOutcome) -> Result<(), ReportError>;

    /// Record every outcome of a completed round, in round order.
    async fn log_round(&self, round: &RoundResult) -> Result<(), ReportError> {
        for outcome in &round.outcomes {
            self.log_outcome(outcome).await?;
        }
        Ok(())
    }
}
