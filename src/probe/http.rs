//! HTTP connectivity probing.
//!
//! # Responsibilities
//! - Perform one GET against one target, bounded by the request timeout
//! - Measure wall-clock latency around the attempt
//! - Fold every failure mode into the returned result

use std::time::{Duration, Instant};

use crate::observability::MetricsEmitter;

/// Outcome of one connectivity attempt against one target.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub url: String,
    pub success: bool,
    /// Measured wall-clock latency; populated only on success.
    pub latency: Option<Duration>,
}

/// Performs connectivity attempts with a shared HTTP client.
pub struct Prober {
    client: reqwest::Client,
    request_timeout: Duration,
}

impl Prober {
    pub fn new(request_timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            request_timeout,
        }
    }

    /// Check connectivity to one target.
    ///
    /// A successful attempt emits exactly one connectivity metric; a failed
    /// emission is logged and swallowed so it can never reclassify the
    /// probe. Every failure mode (connect error, HTTP error status, timeout)
    /// comes back as `success = false`; nothing propagates.
    pub async fn check(&self, url: &str, emitter: &MetricsEmitter) -> ProbeResult {
        let start = Instant::now();
        let outcome = self
            .client
            .get(url)
            .timeout(self.request_timeout)
            .send()
            .await
            .and_then(|response| response.error_for_status());

        match outcome {
            Ok(_response) => {
                let latency = start.elapsed();
                if let Err(error) = emitter.emit_connectivity(url, latency.as_secs_f64()) {
                    tracing::warn!(url = %url, error = %error, "Metric failed to emit");
                }
                ProbeResult {
                    url: url.to_string(),
                    success: true,
                    latency: Some(latency),
                }
            }
            Err(error) if error.is_timeout() => {
                tracing::error!(url = %url, error = %error, "Probe timed out");
                ProbeResult {
                    url: url.to_string(),
                    success: false,
                    latency: None,
                }
            }
            Err(error) => {
                tracing::error!(url = %url, error = %error, "Probe failed");
                ProbeResult {
                    url: url.to_string(),
                    success: false,
                    latency: None,
                }
            }
        }
    }
}
