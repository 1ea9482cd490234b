//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde and the loader handle syntactic)
//! - Validate value ranges (interval, timeout, threshold all at least 1)
//! - Check probe targets and the orchestrator endpoint are absolute http(s)
//!   URLs
//!
//! Validation is a pure function and returns all violations, not just the
//! first.

use thiserror::Error;
use url::Url;

use crate::config::schema::SentinelConfig;

/// A single semantic violation in a [`SentinelConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("check_interval_secs must be at least 1")]
    ZeroInterval,

    #[error("time_limit_secs must be at least 1")]
    ZeroTimeLimit,

    #[error("request_timeout_secs must be at least 1")]
    ZeroRequestTimeout,

    #[error("unhealthy_threshold must be at least 1")]
    ZeroThreshold,

    #[error("no check URLs configured")]
    NoCheckUrls,

    #[error("invalid check URL {url:?}: {reason}")]
    InvalidCheckUrl { url: String, reason: String },

    #[error("invalid orchestrator URL {url:?}: {reason}")]
    InvalidOrchestratorUrl { url: String, reason: String },
}

/// Validate a loaded configuration before it is accepted into the system.
pub fn validate_config(config: &SentinelConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.check_interval_secs == 0 {
        errors.push(ValidationError::ZeroInterval);
    }
    if config.time_limit_secs == 0 {
        errors.push(ValidationError::ZeroTimeLimit);
    }
    if config.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
    if config.unhealthy_threshold == 0 {
        errors.push(ValidationError::ZeroThreshold);
    }

    if config.check_urls.is_empty() {
        errors.push(ValidationError::NoCheckUrls);
    }
    for url in &config.check_urls {
        if let Err(reason) = check_http_url(url) {
            errors.push(ValidationError::InvalidCheckUrl {
                url: url.clone(),
                reason,
            });
        }
    }

    if let Some(url) = &config.orchestrator_url {
        if let Err(reason) = check_http_url(url) {
            errors.push(ValidationError::InvalidOrchestratorUrl {
                url: url.clone(),
                reason,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_http_url(url: &str) -> Result<(), String> {
    let parsed = Url::parse(url).map_err(|e| e.to_string())?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("unsupported scheme {:?}", other)),
    }
}
