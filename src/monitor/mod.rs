//! Health loop orchestration.
//!
//! # Data Flow
//! ```text
//! every tick (while tick_count < tick_limit):
//!     threshold crossed?  → failover trigger → abnormal termination
//!     otherwise           → probe each target in order
//!                         → count failures into RunState
//!                         → sleep the remainder of the interval
//! ```
//!
//! # Design Decisions
//! - Probes run sequentially within a tick; each is bounded by the request
//!   timeout, so a tick's probe time is the sum of the per-target bounds
//! - The threshold check happens at the start of a tick, before probing
//! - Terminating right after a successful trigger is what makes failover
//!   at-most-once per run

use std::sync::Arc;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::config::SentinelConfig;
use crate::failover::{FailoverTrigger, Orchestrator, TriggerError};
use crate::observability::{MetricSink, MetricsEmitter};
use crate::probe::Prober;

pub mod state;

pub use state::{sleep_duration, tick_limit, RunState};

/// Terminal failures of a monitoring run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The unhealthy threshold was crossed and the failover workflow was
    /// started. Deliberate abnormal termination: a re-scheduled run must
    /// not remediate a second time.
    #[error("Unhealthy threshold reached. Triggered Failover")]
    UnhealthyThresholdReached,

    /// The failover workflow could not be started.
    #[error("failover trigger failed: {0}")]
    Trigger(#[from] TriggerError),
}

/// Drives probes, failure accounting, and the failover decision for one run.
pub struct HealthMonitor {
    config: SentinelConfig,
    prober: Prober,
    emitter: MetricsEmitter,
    trigger: FailoverTrigger,
}

impl HealthMonitor {
    /// Wire a monitor from its configuration and collaborators.
    pub fn new(
        config: SentinelConfig,
        orchestrator: Arc<dyn Orchestrator>,
        sink: Arc<dyn MetricSink>,
    ) -> Self {
        let prober = Prober::new(Duration::from_secs(config.request_timeout_secs));
        let emitter = MetricsEmitter::new(sink, config.zone.clone(), config.region.clone());
        let trigger = FailoverTrigger::new(
            orchestrator,
            config.failover_target.clone(),
            config.zone.clone(),
        );
        Self {
            config,
            prober,
            emitter,
            trigger,
        }
    }

    /// Run until the tick budget is exhausted or failover fires.
    ///
    /// Normal completion is quiet. Crossing the threshold starts the
    /// failover workflow exactly once, then returns
    /// [`RunError::UnhealthyThresholdReached`]; a trigger that cannot start
    /// returns [`RunError::Trigger`].
    pub async fn run(self) -> Result<(), RunError> {
        let interval = Duration::from_secs(self.config.check_interval_secs);
        let limit = tick_limit(self.config.time_limit_secs, self.config.check_interval_secs);
        let target_count = self.config.check_urls.len();
        let mut state = RunState::new();

        tracing::info!(
            interval_secs = self.config.check_interval_secs,
            tick_limit = limit,
            targets = target_count,
            unhealthy_threshold = self.config.unhealthy_threshold,
            zone = %self.config.zone,
            "Health loop starting"
        );

        while state.tick_count < limit {
            if state.should_failover(self.config.unhealthy_threshold, target_count) {
                self.trigger.invoke(&self.emitter).await?;
                return Err(RunError::UnhealthyThresholdReached);
            }

            let tick_start = Instant::now();
            for url in &self.config.check_urls {
                let result = self.prober.check(url, &self.emitter).await;
                state.record(&result);
            }

            tokio::time::sleep(sleep_duration(interval, tick_start.elapsed())).await;
            state.tick_count += 1;

            tracing::debug!(
                tick = state.tick_count,
                failed_checks = state.failed_checks,
                "Tick complete"
            );
        }

        tracing::debug!(
            ticks = state.tick_count,
            failed_checks = state.failed_checks,
            "Tick budget exhausted"
        );
        Ok(())
    }
}
