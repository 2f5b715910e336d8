//! Vigil Binary Entry Point
//!
//! This binary runs the complete Vigil monitoring loop. Core functionality
//! is provided by the `vigil` library crate.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vigil::{
    HttpProber, JsonFileLogger, RoundCoordinator, SchedulerLoop, load_config,
};

/// Default result log file when neither the CLI nor the config names one.
const DEFAULT_RESULT_LOG: &str = "vigil_results.log";

/// Vigil - Site Availability & Content Monitor
#[derive(Parser, Debug)]
#[command(name = "vigil", version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML or JSON)
    #[arg(short, long, env = "VIGIL_CONFIG")]
    config: PathBuf,

    /// Check interval in seconds (overrides config file setting)
    #[arg(short, long, env = "VIGIL_INTERVAL")]
    interval: Option<u64>,

    /// Result log file (overrides config file setting)
    #[arg(long, env = "VIGIL_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "debug"
    } else {
        "info,vigil=debug"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Vigil - Site Availability & Content Monitor");
    tracing::info!("Loading configuration from: {}", cli.config.display());

    let mut config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(
                "Failed to load configuration from {}: {}",
                cli.config.display(),
                e
            );
            return Err(e.into());
        }
    };

    // CLI > config file.
    if let Some(interval) = cli.interval {
        config = config.with_overridden_interval(interval);
        config.validate()?;
    }
    let log_file = cli
        .log_file
        .or_else(|| config.log_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULT_LOG));

    tracing::info!(
        sites = config.sites.len(),
        interval_secs = config.check_interval_secs,
        log_file = %log_file.display(),
        "configuration loaded"
    );

    let directory = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = log_file
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULT_LOG));
    let logger = Arc::new(JsonFileLogger::daily(directory, file_name));

    let prober = Arc::new(HttpProber::with_default_client()?);
    let scheduler = SchedulerLoop::new(
        RoundCoordinator::new(prober),
        logger,
        config.check_interval(),
    );

    let cancel = CancellationToken::new();
    tokio::spawn(shutdown_signal(cancel.clone()));

    scheduler.run(&config.sites, cancel).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Cancel the monitoring loop on Ctrl+C or SIGTERM.
async fn shutdown_signal(cancel: CancellationToken) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal");
        }
    }

    cancel.cancel();
}
