//! Run-state accounting for the health loop.
//!
//! Pure data and arithmetic, no clocks and no IO, so the failover decision
//! can be tested apart from timing side effects.

use std::time::Duration;

use crate::probe::ProbeResult;

/// Mutable per-run counters, owned exclusively by the health loop.
///
/// `failed_checks` never resets within a run; `tick_count` only grows.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunState {
    /// Completed ticks.
    pub tick_count: u64,

    /// Failed probes accumulated across all ticks.
    pub failed_checks: u64,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account one probe outcome.
    pub fn record(&mut self, result: &ProbeResult) {
        if !result.success {
            self.failed_checks += 1;
        }
    }

    /// Whether the unhealthy threshold has been crossed.
    ///
    /// The threshold is scaled by the number of targets: it counts failed
    /// full rounds of checks, not failures of any single target.
    pub fn should_failover(&self, unhealthy_threshold: u64, target_count: usize) -> bool {
        self.failed_checks >= unhealthy_threshold * target_count as u64
    }
}

/// Tick budget for a run: the number of whole intervals fitting in the time
/// limit, minus one, so the run exits strictly before the external limit
/// with headroom left for one failover invocation.
pub fn tick_limit(time_limit_secs: u64, check_interval_secs: u64) -> u64 {
    time_limit_secs
        .checked_div(check_interval_secs)
        .unwrap_or(0)
        .saturating_sub(1)
}

/// Remainder of the interval after a tick's probing, clamped at zero so an
/// overrunning tick proceeds immediately to the next.
pub fn sleep_duration(interval: Duration, elapsed: Duration) -> Duration {
    interval.saturating_sub(elapsed)
}
