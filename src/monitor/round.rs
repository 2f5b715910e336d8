//! Round coordination: fan a site list out to concurrent probes.

use std::sync::Arc;

use chrono::Utc;
use tokio_util::sync::CancellationToken;

use crate::config::SiteConfig;
use crate::probe::{CheckOutcome, Prober, RoundResult};

/// Fans one round of sites out to concurrent prober invocations and gathers
/// the outcomes back in input order.
///
/// The prober is shared read-only across all in-flight checks; each check
/// owns its own request and response buffers, so no locking is involved.
pub struct RoundCoordinator<P: Prober> {
    prober: Arc<P>,
}

impl<P: Prober> RoundCoordinator<P> {
    /// Create a coordinator around a shared prober.
    pub fn new(prober: Arc<P>) -> Self {
        Self { prober }
    }

    /// Run one round: probe every site concurrently and collect all
    /// outcomes.
    ///
    /// Every site is probed at once, so total round wall time is bounded by
    /// the slowest per-site deadline rather than the sum. The round resolves
    /// only after every probe has reached a terminal outcome; partial rounds
    /// are never observable. A panic inside one probe task becomes a
    /// connection-error outcome for that site and never affects the others.
    ///
    /// Returns `None` when `cancel` fires first: the round is abandoned,
    /// all in-flight probe tasks are aborted so their connections are
    /// released promptly, and no result reaches the caller.
    pub async fn run_round(
        &self,
        sites: &[SiteConfig],
        cancel: &CancellationToken,
    ) -> Option<RoundResult> {
        let started_at = Utc::now();

        let handles: Vec<_> = sites
            .iter()
            .map(|site| {
                let prober = Arc::clone(&self.prober);
                let site = site.clone();
                tokio::spawn(async move { prober.check(&site).await })
            })
            .collect();
        let abort_handles: Vec<_> = handles.iter().map(|h| h.abort_handle()).collect();

        let gather = async {
            let mut outcomes = Vec::with_capacity(sites.len());
            for (site, handle) in sites.iter().zip(handles) {
                match handle.await {
                    Ok(outcome) => outcomes.push(outcome),
                    Err(e) => {
                        tracing::error!(url = %site.url, error = %e, "probe task failed");
                        outcomes.push(CheckOutcome::connection_error(
                            &site.url,
                            format!("probe task failed: {e}"),
                            None,
                        ));
                    }
                }
            }
            outcomes
        };

        tokio::select! {
            outcomes = gather => Some(RoundResult::new(outcomes, started_at, Utc::now())),
            _ = cancel.cancelled() => {
                tracing::info!("round cancelled, aborting in-flight probes");
                for handle in abort_handles {
                    handle.abort();
                }
                None
            }
        }
    }
}
