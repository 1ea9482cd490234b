//! Embedded-metric-format telemetry.
//!
//! # Responsibilities
//! - Render connectivity-latency and failover records as embedded-metric
//!   JSON objects (one object per line, no buffering or batching)
//! - Write each record through a pluggable sink (stdout in production)
//!
//! # Metrics
//! - `NatLatency` (seconds): probe latency, dimensioned by
//!   (AvailabilityZone, Region, Url)
//! - `NatFailover` (count): unit value 1 per failover event, dimensioned by
//!   (Region)
//!
//! Emission failures surface as [`EmitError`]; every caller logs and
//! swallows them so telemetry can never change the outcome of the operation
//! it describes.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::json;
use thiserror::Error;

/// Metric namespace shared by every record.
pub const NAMESPACE: &str = "NatInstances";

/// Errors that can occur while emitting a metric record.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The record could not be rendered to JSON.
    #[error("failed to render metric record: {0}")]
    Render(#[from] serde_json::Error),

    /// The sink rejected the rendered line.
    #[error("failed to write metric record: {0}")]
    Sink(#[from] io::Error),
}

/// One telemetry record, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricRecord {
    /// A successful probe and its measured latency.
    Connectivity {
        url: String,
        latency_seconds: f64,
        zone: String,
        region: String,
        timestamp_ms: u64,
    },

    /// A failover was triggered.
    Failover { region: String, timestamp_ms: u64 },
}

impl MetricRecord {
    /// Render the record as a single embedded-metric JSON object.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        let value = match self {
            MetricRecord::Connectivity {
                url,
                latency_seconds,
                zone,
                region,
                timestamp_ms,
            } => json!({
                "_aws": {
                    "Timestamp": timestamp_ms,
                    "CloudWatchMetrics": [{
                        "Namespace": NAMESPACE,
                        "Dimensions": [["AvailabilityZone", "Region", "Url"]],
                        "Metrics": [{
                            "Name": "NatLatency",
                            "Unit": "Seconds",
                            "StorageResolution": 60,
                        }],
                    }],
                },
                "AvailabilityZone": zone,
                "Region": region,
                "Url": url,
                "NatLatency": latency_seconds,
            }),
            MetricRecord::Failover {
                region,
                timestamp_ms,
            } => json!({
                "_aws": {
                    "Timestamp": timestamp_ms,
                    "CloudWatchMetrics": [{
                        "Namespace": NAMESPACE,
                        "Dimensions": [["Region"]],
                        "Metrics": [{
                            "Name": "NatFailover",
                            "Unit": "Count",
                            "StorageResolution": 60,
                        }],
                    }],
                },
                "Region": region,
                "NatFailover": 1,
            }),
        };
        serde_json::to_string(&value)
    }
}

/// Destination for rendered metric lines.
///
/// The seam exists so tests can capture records and inject write failures.
pub trait MetricSink: Send + Sync {
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Production sink: one line per record on stdout, where the log collector
/// picks it up.
pub struct StdoutSink;

impl MetricSink for StdoutSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{line}")
    }
}

/// Formats and emits metric records, carrying the run's fixed dimensions.
pub struct MetricsEmitter {
    sink: Arc<dyn MetricSink>,
    zone: String,
    region: String,
}

impl MetricsEmitter {
    pub fn new(sink: Arc<dyn MetricSink>, zone: String, region: String) -> Self {
        Self { sink, zone, region }
    }

    /// Emit one connectivity-latency record for a successful probe.
    pub fn emit_connectivity(&self, url: &str, latency_seconds: f64) -> Result<(), EmitError> {
        self.emit(&MetricRecord::Connectivity {
            url: url.to_string(),
            latency_seconds,
            zone: self.zone.clone(),
            region: self.region.clone(),
            timestamp_ms: epoch_millis(),
        })
    }

    /// Emit one failover-event record.
    pub fn emit_failover(&self) -> Result<(), EmitError> {
        self.emit(&MetricRecord::Failover {
            region: self.region.clone(),
            timestamp_ms: epoch_millis(),
        })
    }

    fn emit(&self, record: &MetricRecord) -> Result<(), EmitError> {
        let line = record.render()?;
        self.sink.write_line(&line)?;
        Ok(())
    }
}

fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
