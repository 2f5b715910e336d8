//! Probe capability seam.

use crate::config::SiteConfig;

use super::CheckOutcome;

/// A strategy for checking one site.
///
/// Implementations capture every failure mode as a classified
/// [`CheckOutcome`]; `check` never errors. Alternate probe strategies
/// (different protocols, deeper content inspection) are additional
/// implementations of this same capability, not subclasses of an existing
/// one.
///
/// Probers are shared read-only across concurrent checks, so implementations
/// must not mutate themselves per invocation.
#[async_trait::async_trait]
pub trait Prober: Send + Sync + 'static {
    /// Check a single site and classify the result.
    async fn check(&self, site: &SiteConfig) -> CheckOutcome;
}
