//! Client for the external failover orchestration API.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// How long a start-execution call may take. Kept short so the trigger fits
/// inside the headroom the tick budget leaves before the run's time limit.
const START_EXECUTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur when starting a failover execution.
#[derive(Debug, Error)]
pub enum TriggerError {
    /// No orchestration endpoint was configured for this run.
    #[error("orchestrator endpoint not configured")]
    NotConfigured,

    /// The request to the orchestration API could not be completed.
    #[error("failed to reach orchestrator: {0}")]
    Request(#[from] reqwest::Error),

    /// The orchestration API refused to start the execution.
    #[error("orchestrator rejected execution start: status {0}")]
    Rejected(u16),
}

/// Starts executions of the external failover workflow.
#[async_trait]
pub trait Orchestrator: Send + Sync {
    /// Start one execution of the workflow behind `target`, under a
    /// caller-provided unique run name.
    async fn start_execution(&self, target: &str, run_name: &str) -> Result<(), TriggerError>;
}

/// HTTP implementation posting start requests to the orchestration API.
pub struct HttpOrchestrator {
    client: reqwest::Client,
    endpoint: Option<String>,
}

impl HttpOrchestrator {
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl Orchestrator for HttpOrchestrator {
    async fn start_execution(&self, target: &str, run_name: &str) -> Result<(), TriggerError> {
        let endpoint = self.endpoint.as_deref().ok_or(TriggerError::NotConfigured)?;

        let response = self
            .client
            .post(endpoint)
            .timeout(START_EXECUTION_TIMEOUT)
            .json(&serde_json::json!({
                "stateMachine": target,
                "name": run_name,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TriggerError::Rejected(status.as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_endpoint_fails_without_io() {
        let orchestrator = HttpOrchestrator::new(None);
        let result = orchestrator.start_execution("unknown", "run-1").await;
        assert!(matches!(result, Err(TriggerError::NotConfigured)));
    }
}
