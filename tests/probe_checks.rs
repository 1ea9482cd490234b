//! Probe behavior against live mock backends.

use std::sync::Arc;
use std::time::{Duration, Instant};

use nat_sentinel::observability::{MetricSink, MetricsEmitter};
use nat_sentinel::probe::Prober;

mod common;

fn emitter(sink: Arc<dyn MetricSink>) -> MetricsEmitter {
    MetricsEmitter::new(sink, "zone-a".to_string(), "eu-west-1".to_string())
}

#[tokio::test]
async fn test_successful_probe_measures_latency_and_emits_once() {
    let addr = common::start_mock_backend(200, "ok").await;
    let url = format!("http://{}/", addr);

    let sink = common::CaptureSink::new();
    let prober = Prober::new(Duration::from_secs(2));
    let result = prober.check(&url, &emitter(sink.clone())).await;

    assert!(result.success);
    assert_eq!(result.url, url);
    assert!(result.latency.is_some());

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["Url"], url.as_str());
    assert_eq!(records[0]["AvailabilityZone"], "zone-a");
    assert!(records[0]["NatLatency"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn test_error_status_is_a_failure_with_no_metric() {
    let addr = common::start_mock_backend(503, "unavailable").await;
    let url = format!("http://{}/", addr);

    let sink = common::CaptureSink::new();
    let prober = Prober::new(Duration::from_secs(2));
    let result = prober.check(&url, &emitter(sink.clone())).await;

    assert!(!result.success);
    assert!(result.latency.is_none());
    assert!(sink.records().is_empty());
}

#[tokio::test]
async fn test_connection_refused_is_a_failure_with_no_metric() {
    let addr = common::refused_addr().await;
    let url = format!("http://{}/", addr);

    let sink = common::CaptureSink::new();
    let prober = Prober::new(Duration::from_secs(2));
    let result = prober.check(&url, &emitter(sink.clone())).await;

    assert!(!result.success);
    assert!(sink.records().is_empty());
}

#[tokio::test]
async fn test_unresponsive_backend_times_out() {
    let addr = common::start_silent_backend().await;
    let url = format!("http://{}/", addr);

    let sink = common::CaptureSink::new();
    let prober = Prober::new(Duration::from_secs(1));

    let start = Instant::now();
    let result = prober.check(&url, &emitter(sink.clone())).await;

    assert!(!result.success);
    assert!(start.elapsed() >= Duration::from_secs(1));
    assert!(start.elapsed() < Duration::from_secs(5));
    assert!(sink.records().is_empty());
}

#[tokio::test]
async fn test_metric_failure_never_reclassifies_the_probe() {
    let addr = common::start_mock_backend(200, "ok").await;
    let url = format!("http://{}/", addr);

    let prober = Prober::new(Duration::from_secs(2));
    let result = prober
        .check(&url, &emitter(Arc::new(common::FailingSink)))
        .await;

    assert!(result.success);
    assert!(result.latency.is_some());
}
