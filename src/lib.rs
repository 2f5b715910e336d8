//! Vigil - Site Availability & Content Monitor
//!
//! This crate provides the core functionality for the Vigil monitoring
//! system. It can be used as a library by other Rust projects, or run as a
//! standalone binary with the `vigil` executable.
//!
//! # Architecture
//!
//! - **Config**: YAML/JSON configuration with fail-fast validation
//! - **Probe**: bounded-time HTTP checks classified into a fixed four-way
//!   taxonomy (success, connection error, content error, timeout)
//! - **Monitor**: concurrent round fan-out and the interval-driven loop
//! - **Report**: durable JSON result records with file rotation
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//! use vigil::{HttpProber, JsonFileLogger, RoundCoordinator, SchedulerLoop, SiteConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sites = vec![
//!         SiteConfig::new("https://example.com", "Example Domain").with_timeout_secs(10),
//!     ];
//!
//!     let prober = Arc::new(HttpProber::with_default_client()?);
//!     let logger = Arc::new(JsonFileLogger::daily("./logs", "results.log"));
//!     let scheduler = SchedulerLoop::new(
//!         RoundCoordinator::new(prober),
//!         logger,
//!         Duration::from_secs(60),
//!     );
//!
//!     // Runs until the token is cancelled.
//!     scheduler.run(&sites, CancellationToken::new()).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod monitor;
pub mod probe;
pub mod report;

pub use config::{ConfigError, MonitoringConfig, SiteConfig, load_config};
pub use monitor::{LoopState, MonitorError, RoundCoordinator, SchedulerLoop};
pub use probe::{CheckOutcome, CheckStatus, HttpProber, Prober, RoundResult};
pub use report::{JsonFileLogger, ReportError, ResultLogger};
