//! Self-terminating connectivity monitor with automated failover.
//!
//! Probes a set of external endpoints from inside a private network segment
//! on a fixed interval, emits latency telemetry as embedded-metric JSON
//! lines, and starts an external failover workflow exactly once when
//! connectivity degrades past the configured threshold. It then terminates
//! abnormally so a re-scheduled run cannot remediate twice.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌────────────────────────────────────────────┐
//!                  │                HEALTH LOOP                 │
//!                  │                                            │
//!   tick timer ────┼─▶ threshold crossed? ──yes──▶ failover     │
//!                  │         │ no                  trigger ─────┼──▶ orchestration API
//!                  │         ▼                        │         │    (exactly once)
//!                  │    probe each target             │         │
//!                  │    (sequential, bounded) ◀───────┘         │
//!                  │         │                                  │
//!                  │         ▼                                  │
//!                  │    metrics emitter ──────────────────────▶ │    EMF lines on stdout
//!                  │         │                                  │
//!                  │         ▼                                  │
//!                  │    sleep remainder of interval             │
//!                  └────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod failover;
pub mod monitor;
pub mod observability;
pub mod probe;

pub use config::SentinelConfig;
pub use monitor::{HealthMonitor, RunError};
