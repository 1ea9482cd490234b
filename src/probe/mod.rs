//! Connectivity probing subsystem.
//!
//! One probe is one bounded HTTP attempt against one target. The health
//! loop runs probes sequentially each tick and feeds the results into its
//! failure accounting; a probe itself never fails outward.

pub mod http;

pub use http::{ProbeResult, Prober};
