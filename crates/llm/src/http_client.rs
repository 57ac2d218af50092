//! HTTP Client Factory
//!
//! Provides a factory function for building reqwest clients with an optional
//! request timeout.

use std::time::Duration;

/// Build a `reqwest::Client` for a provider.
///
/// - `Some(secs)` -> apply a whole-request timeout
/// - `None` -> keep the client's default (no whole-request timeout)
pub fn build_http_client(timeout_secs: Option<u64>) -> reqwest::Client {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build().expect("failed to build reqwest client")
}
