//! Monitoring Engine
//!
//! The concurrent core: per tick, one bounded-time check per configured
//! site, fanned out in parallel and gathered into an atomic round result.
//!
//! # Architecture
//!
//! - [`RoundCoordinator`]: fans sites out to concurrent probes, waits for
//!   all of them, preserves input order
//! - [`SchedulerLoop`]: drives rounds at a fixed start-to-start interval
//!   with cooperative cancellation
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//! use vigil::{HttpProber, JsonFileLogger, RoundCoordinator, SchedulerLoop, SiteConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let prober = Arc::new(HttpProber::with_default_client()?);
//! let logger = Arc::new(JsonFileLogger::daily("./logs", "results.log"));
//! let scheduler = SchedulerLoop::new(
//!     RoundCoordinator::new(prober),
//!     logger,
//!     Duration::from_secs(60),
//! );
//!
//! let sites = vec![SiteConfig::new("https://example.com", "Example Domain")];
//! scheduler.run(&sites, CancellationToken::new()).await?;
//! # Ok(())
//! # }
//! ```

mod round;
mod scheduler;

pub use round::RoundCoordinator;
pub use scheduler::{LoopState, SchedulerLoop};

use thiserror::Error;

/// Errors that stop the engine at startup.
///
/// Probe failures are never errors; they are classified outcomes. The only
/// fatal conditions are configuration-time.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Invalid engine configuration.
    #[error("config error: {0}")]
    Config(String),
}
