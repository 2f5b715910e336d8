//! Interval-driven monitoring loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::config::SiteConfig;
use crate::probe::{Prober, RoundResult};
use crate::report::ResultLogger;

use super::{MonitorError, RoundCoordinator};

/// Lifecycle states of the scheduler loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Constructed, not yet started.
    Idle,
    /// Driving rounds.
    Running,
    /// Cancellation observed, winding down.
    Stopping,
    /// Returned to the caller. Terminal.
    Stopped,
}

/// Drives monitoring rounds at a fixed interval until cancelled.
///
/// Each tick runs one round, reports every outcome (console line per check,
/// summary per round) and hands the result to the logger before the next
/// tick is scheduled. Check failures never stop the loop; the only fatal
/// startup condition is an empty site list.
pub struct SchedulerLoop<P: Prober> {
    coordinator: RoundCoordinator<P>,
    logger: Arc<dyn ResultLogger>,
    interval: Duration,
    state_tx: watch::Sender<LoopState>,
}

impl<P: Prober> SchedulerLoop<P> {
    /// Create a scheduler around a coordinator and a result logger.
    pub fn new(
        coordinator: RoundCoordinator<P>,
        logger: Arc<dyn ResultLogger>,
        interval: Duration,
    ) -> Self {
        let (state_tx, _) = watch::channel(LoopState::Idle);
        Self {
            coordinator,
            logger,
            interval,
            state_tx,
        }
    }

    /// Subscribe to loop state transitions.
    pub fn state(&self) -> watch::Receiver<LoopState> {
        self.state_tx.subscribe()
    }

    /// Drive rounds until `cancel` fires.
    ///
    /// Cadence is measured from the start of one round to the start of the
    /// next. When a round outruns the interval the next round starts
    /// immediately; ticks are never skipped in catch-up bursts and rounds
    /// never overlap.
    ///
    /// Cancellation is honored at tick boundaries and propagated into the
    /// in-flight round, which is abandoned (see
    /// [`RoundCoordinator::run_round`]); an abandoned round is never logged.
    /// The loop then transitions through `Stopping` to `Stopped` and
    /// returns without error.
    pub async fn run(
        &self,
        sites: &[SiteConfig],
        cancel: CancellationToken,
    ) -> Result<(), MonitorError> {
        if sites.is_empty() {
            return Err(MonitorError::Config("no sites configured".to_string()));
        }

        self.state_tx.send_replace(LoopState::Running);
        tracing::info!(
            sites = sites.len(),
            interval_secs = self.interval.as_secs(),
            "monitoring started"
        );

        while !cancel.is_cancelled() {
            let tick_start = Instant::now();
            tracing::debug!("starting monitoring round");

            match self.coordinator.run_round(sites, &cancel).await {
                Some(round) => self.report_round(&round).await,
                // Cancelled mid-round; nothing to report.
                None => break,
            }

            let next_tick = tick_start + self.interval;
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep_until(next_tick) => {}
            }
        }

        self.state_tx.send_replace(LoopState::Stopping);
        tracing::info!("monitoring stopping");
        self.state_tx.send_replace(LoopState::Stopped);
        Ok(())
    }

    async fn report_round(&self, round: &RoundResult) {
        for outcome in &round.outcomes {
            if outcome.is_success() {
                tracing::info!(
                    url = %outcome.url,
                    response_time_ms = outcome.response_time_ms,
                    "PASS"
                );
            } else {
                tracing::warn!(
                    url = %outcome.url,
                    status = %outcome.status,
                    error = outcome.error_message.as_deref().unwrap_or(""),
                    "FAIL"
                );
            }
        }
        tracing::info!(
            success = round.success_count(),
            failed = round.failure_count(),
            "monitoring round completed"
        );

        // Logger trouble is an infrastructure problem, not a reason to stop
        // monitoring.
        if let Err(e) = self.logger.log_round(round).await {
            tracing::warn!(error = %e, "failed to record round results");
        }
    }
}
