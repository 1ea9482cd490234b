//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Subsystems produce:
//!     → logging.rs (structured tracing events on stderr)
//!     → metrics.rs (embedded-metric JSON records on stdout)
//!
//! Consumers:
//!     → Log aggregation (supervisor / log collector)
//!     → Metrics backend parsing the embedded-metric envelope
//! ```
//!
//! # Design Decisions
//! - One JSON object per metric record, one record per line
//! - Telemetry failures never alter the operation they describe

pub mod logging;
pub mod metrics;

pub use metrics::{EmitError, MetricRecord, MetricSink, MetricsEmitter, StdoutSink};
