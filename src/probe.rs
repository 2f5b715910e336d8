//! Probe Layer
//!
//! Single-site checks and their results. A probe issues one bounded-time
//! HTTP request against one configured site and classifies the outcome into
//! the fixed four-way taxonomy.
//!
//! # Architecture
//!
//! - [`Prober`]: capability trait for checking one site
//! - [`HttpProber`]: HTTP GET implementation over a shared `reqwest` client
//! - [`CheckStatus`] / [`CheckOutcome`]: the taxonomy and one check's result
//! - [`RoundResult`]: all outcomes of one monitoring round
//!
//! # Example
//!
//! ```rust,no_run
//! use vigil::{HttpProber, Prober, SiteConfig};
//!
//! # async fn run() {
//! let prober = HttpProber::with_default_client().unwrap();
//! let site = SiteConfig::new("https://example.com", "Example Domain");
//! let outcome = prober.check(&site).await;
//! println!("{}: {}", outcome.url, outcome.status);
//! # }
//! ```

mod http;
mod outcome;
mod status;
mod traits;

pub use http::HttpProber;
pub use outcome::{CheckOutcome, RoundResult};
pub use status::CheckStatus;
pub use traits::Prober;
