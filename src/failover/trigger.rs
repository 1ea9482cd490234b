//! Failover triggering.

use std::sync::Arc;

use uuid::Uuid;

use crate::failover::orchestrator::{Orchestrator, TriggerError};
use crate::observability::MetricsEmitter;

/// Invokes the external failover workflow.
///
/// The health loop calls this at most once per run; its terminal state after
/// a successful invocation is what enforces the at-most-once contract.
pub struct FailoverTrigger {
    orchestrator: Arc<dyn Orchestrator>,
    target: String,
    zone: String,
}

impl FailoverTrigger {
    pub fn new(orchestrator: Arc<dyn Orchestrator>, target: String, zone: String) -> Self {
        Self {
            orchestrator,
            target,
            zone,
        }
    }

    /// Start one execution of the failover workflow.
    ///
    /// The run name embeds the zone and a fresh UUID so failovers in other
    /// zones or later runs cannot collide on the orchestration side. On
    /// success this logs loudly and attempts one failover-metric emission
    /// (logged and swallowed on failure). An orchestration failure
    /// propagates to the caller with no "triggered" log or metric.
    pub async fn invoke(&self, emitter: &MetricsEmitter) -> Result<(), TriggerError> {
        let run_name = format!("ConnectionFailing_{}_{}", self.zone, Uuid::new_v4());
        self.orchestrator
            .start_execution(&self.target, &run_name)
            .await?;

        tracing::warn!(
            zone = %self.zone,
            target = %self.target,
            run_name = %run_name,
            "Triggered failover workflow"
        );

        if let Err(error) = emitter.emit_failover() {
            tracing::warn!(error = %error, "Metric failed to emit");
        }
        Ok(())
    }
}
