//! HTTP site prober.
//!
//! Issues one GET per check under the site's deadline and classifies the
//! result. Classification precedence: timeout, then connection or HTTP
//! status failure, then content mismatch, then success. A request that
//! both times out and would have mismatched content is reported as a
//! timeout only.

use std::time::Instant;

use reqwest::{Client, StatusCode};
use tokio::time::timeout;

use crate::config::SiteConfig;

use super::{CheckOutcome, Prober};

/// Flatten a reqwest error and its source chain into one message, so the
/// outcome carries the underlying cause (DNS failure, refused connection,
/// TLS problem) and not just the top-level wrapper.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// HTTP-based prober.
///
/// Wraps a shared `reqwest::Client`; the client's connection pool is reused
/// read-only across concurrent checks. Per-site deadlines are enforced in
/// [`Prober::check`], so the client itself carries no global timeout.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    /// Build a prober around an existing shared client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a prober with its own client.
    ///
    /// # Errors
    /// Returns the underlying `reqwest` error if the client cannot be built.
    pub fn with_default_client() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("vigil/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::new(client))
    }

    /// Send the request and read the full body. Elapsed time is measured by
    /// the caller from request start to final byte.
    async fn fetch(&self, url: &str) -> Result<(StatusCode, String), reqwest::Error> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }
}

#[async_trait::async_trait]
impl Prober for HttpProber {
    async fn check(&self, site: &SiteConfig) -> CheckOutcome {
        let deadline = site.timeout();
        let start = Instant::now();

        let (status, body) = match timeout(deadline, self.fetch(&site.url)).await {
            Err(_) => {
                tracing::warn!(
                    url = %site.url,
                    timeout_secs = deadline.as_secs(),
                    "probe timed out"
                );
                return CheckOutcome::timeout(&site.url, deadline);
            }
            Ok(Err(e)) => {
                let message = describe(&e);
                tracing::warn!(url = %site.url, error = %message, "probe failed");
                return CheckOutcome::connection_error(&site.url, message, None);
            }
            Ok(Ok(fetched)) => fetched,
        };
        let elapsed_ms = start.elapsed().as_millis().min(u64::MAX as u128) as u64;

        if status.is_client_error() || status.is_server_error() {
            let reason = status.canonical_reason().unwrap_or("unknown reason");
            tracing::warn!(
                url = %site.url,
                status = status.as_u16(),
                "probe received error status"
            );
            return CheckOutcome::connection_error(
                &site.url,
                format!("HTTP error {}: {}", status.as_u16(), reason),
                Some(elapsed_ms),
            );
        }

        if !body.contains(&site.content_requirement) {
            tracing::warn!(
                url = %site.url,
                requirement = %site.content_requirement,
                "content requirement not met"
            );
            return CheckOutcome::content_error(&site.url, &site.content_requirement, elapsed_ms);
        }

        tracing::debug!(url = %site.url, latency_ms = elapsed_ms, "probe successful");
        CheckOutcome::success(&site.url, elapsed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prober_construction() {
        let prober = HttpProber::with_default_client().unwrap();
        // Clones share the same underlying connection pool.
        let _shared = prober.clone();
    }
}
