//! Connectivity sentinel entry point.
//!
//! Loads configuration from the environment (optionally overridden by CLI
//! flags), wires the health loop to its production collaborators, and maps
//! the run outcome onto the process exit: quiet zero on a completed run,
//! loud nonzero when failover was triggered or could not be started.

use std::sync::Arc;

use clap::Parser;

use nat_sentinel::config::{self, SentinelConfig};
use nat_sentinel::failover::HttpOrchestrator;
use nat_sentinel::monitor::{HealthMonitor, RunError};
use nat_sentinel::observability::{logging, StdoutSink};

/// Connectivity health-check agent with automated failover.
#[derive(Parser)]
#[command(name = "nat-sentinel", version)]
#[command(about = "Probes external endpoints and triggers failover when connectivity degrades")]
struct Cli {
    /// Seconds between tick starts.
    #[arg(long)]
    check_interval: Option<u64>,

    /// Total seconds this run may occupy.
    #[arg(long)]
    time_limit: Option<u64>,

    /// Comma-separated probe targets.
    #[arg(long, value_delimiter = ',')]
    check_urls: Option<Vec<String>>,

    /// Seconds to wait per probe request.
    #[arg(long)]
    request_timeout: Option<u64>,

    /// Failed rounds of checks before failover fires.
    #[arg(long)]
    unhealthy_threshold: Option<u64>,

    /// Identifier of the failover orchestration resource.
    #[arg(long)]
    failover_target: Option<String>,

    /// Endpoint of the orchestration API that starts the failover workflow.
    #[arg(long)]
    orchestrator_url: Option<String>,

    /// Label for the monitored network segment.
    #[arg(long)]
    zone: Option<String>,

    /// Region label used for metric dimensioning.
    #[arg(long)]
    region: Option<String>,
}

impl Cli {
    fn apply(self, config: &mut SentinelConfig) {
        if let Some(value) = self.check_interval {
            config.check_interval_secs = value;
        }
        if let Some(value) = self.time_limit {
            config.time_limit_secs = value;
        }
        if let Some(value) = self.check_urls {
            config.check_urls = value;
        }
        if let Some(value) = self.request_timeout {
            config.request_timeout_secs = value;
        }
        if let Some(value) = self.unhealthy_threshold {
            config.unhealthy_threshold = value;
        }
        if let Some(target) = self.failover_target {
            if self.region.is_none() {
                if let Some(region) = config::region_from_target(&target) {
                    config.region = region.to_string();
                }
            }
            config.failover_target = target;
        }
        if let Some(value) = self.orchestrator_url {
            config.orchestrator_url = Some(value);
        }
        if let Some(value) = self.zone {
            config.zone = value;
        }
        if let Some(value) = self.region {
            config.region = value;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let cli = Cli::parse();
    let mut config = config::from_env()?;
    cli.apply(&mut config);

    if let Err(errors) = config::validate_config(&config) {
        for error in &errors {
            tracing::error!(%error, "Invalid configuration");
        }
        return Err("configuration validation failed".into());
    }

    tracing::info!(
        interval_secs = config.check_interval_secs,
        time_limit_secs = config.time_limit_secs,
        targets = config.check_urls.len(),
        unhealthy_threshold = config.unhealthy_threshold,
        zone = %config.zone,
        region = %config.region,
        "Configuration loaded"
    );

    let orchestrator = Arc::new(HttpOrchestrator::new(config.orchestrator_url.clone()));
    let monitor = HealthMonitor::new(config, orchestrator, Arc::new(StdoutSink));

    match monitor.run().await {
        Ok(()) => Ok(()),
        Err(error @ RunError::UnhealthyThresholdReached) => {
            tracing::error!("Unhealthy threshold reached. Triggered Failover");
            Err(error.into())
        }
        Err(RunError::Trigger(error)) => {
            tracing::error!(error = %error, "Failover trigger failed");
            Err(error.into())
        }
    }
}
