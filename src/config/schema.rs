//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the agent.
//! All types derive Serde traits; every field has a default so a run can
//! start with no configuration at all.

use serde::{Deserialize, Serialize};

/// Root configuration for one monitoring run.
///
/// Immutable once loaded; the health loop only ever reads it.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SentinelConfig {
    /// Seconds between tick starts.
    pub check_interval_secs: u64,

    /// Total seconds this run may occupy. The loop derives its tick budget
    /// from this so the process exits strictly before the limit.
    pub time_limit_secs: u64,

    /// Probe targets, checked sequentially in order every tick.
    pub check_urls: Vec<String>,

    /// Seconds to wait for a single probe request.
    pub request_timeout_secs: u64,

    /// Failed full rounds of checks before failover fires.
    pub unhealthy_threshold: u64,

    /// Opaque identifier of the failover orchestration resource.
    pub failover_target: String,

    /// Endpoint of the orchestration API that starts the failover workflow.
    /// Unset means the trigger cannot be started.
    pub orchestrator_url: Option<String>,

    /// Label for the network segment this run monitors.
    pub zone: String,

    /// Region label used only for metric dimensioning.
    pub region: String,
}

impl Default for SentinelConfig {
    fn default() -> Self {
        Self {
            check_interval_secs: 10,
            time_limit_secs: 300,
            check_urls: default_check_urls(),
            request_timeout_secs: 8,
            unhealthy_threshold: 3,
            failover_target: "unknown".to_string(),
            orchestrator_url: None,
            zone: "unknown".to_string(),
            region: "unknown".to_string(),
        }
    }
}

fn default_check_urls() -> Vec<String> {
    vec![
        "https://www.example.com".to_string(),
        "https://www.google.com".to_string(),
    ]
}
