//! Configuration loading from the environment.
//!
//! Loading is split into a pure [`from_vars`] over any key/value iterator and
//! a thin [`from_env`] wrapper, so tests never touch process-global state.

use std::collections::HashMap;
use std::env;

use thiserror::Error;

use crate::config::schema::SentinelConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric key carried a value that does not parse.
    #[error("invalid value {value:?} for {key}: {source}")]
    Invalid {
        key: &'static str,
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Load configuration from the process environment.
pub fn from_env() -> Result<SentinelConfig, ConfigError> {
    from_vars(env::vars())
}

/// Build a configuration from the given key/value pairs, falling back to
/// defaults for absent keys.
///
/// The region defaults from the colon-separated routing field of the
/// failover target identifier when `REGION` is not set explicitly.
pub fn from_vars<I>(vars: I) -> Result<SentinelConfig, ConfigError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let vars: HashMap<String, String> = vars.into_iter().collect();
    let mut config = SentinelConfig::default();

    if let Some(value) = vars.get("CONNECTIVITY_CHECK_INTERVAL") {
        config.check_interval_secs = parse_u64("CONNECTIVITY_CHECK_INTERVAL", value)?;
    }
    if let Some(value) = vars.get("RUN_TIME_LIMIT") {
        config.time_limit_secs = parse_u64("RUN_TIME_LIMIT", value)?;
    }
    if let Some(value) = vars.get("REQUEST_TIMEOUT") {
        config.request_timeout_secs = parse_u64("REQUEST_TIMEOUT", value)?;
    }
    if let Some(value) = vars.get("UNHEALTHY_THRESHOLD") {
        config.unhealthy_threshold = parse_u64("UNHEALTHY_THRESHOLD", value)?;
    }
    if let Some(value) = vars.get("CHECK_URLS") {
        config.check_urls = split_urls(value);
    }
    if let Some(value) = vars.get("FAILOVER_STATE_MACHINE") {
        config.failover_target = value.clone();
    }
    if let Some(value) = vars.get("ORCHESTRATOR_URL") {
        config.orchestrator_url = Some(value.clone());
    }
    if let Some(value) = vars.get("AVAILABILITY_ZONE") {
        config.zone = value.clone();
    }
    config.region = match vars.get("REGION") {
        Some(value) => value.clone(),
        None => region_from_target(&config.failover_target)
            .unwrap_or("unknown")
            .to_string(),
    };

    Ok(config)
}

/// Extract the routing/region field from an ARN-shaped identifier
/// (`prefix:partition:service:REGION:...`).
pub fn region_from_target(target: &str) -> Option<&str> {
    let field = target.split(':').nth(3)?;
    (!field.is_empty()).then_some(field)
}

fn split_urls(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .collect()
}

fn parse_u64(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|source| ConfigError::Invalid {
        key,
        value: value.to_string(),
        source,
    })
}
