//! Request metrics for the gateway
//!
//! Provides a Prometheus-compatible registry holding:
//! - `api_requests_total{method, endpoint, status}` counter
//! - `api_request_duration_seconds{method, endpoint}` histogram
//!
//! The registry owns its recorder instead of installing a global one, so
//! every `AppState` (and every test) gets an independent set of metrics.
//! Metrics live in memory only and start from zero on every restart.

use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle, PrometheusRecorder};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::Result;

/// Metric names as constants for consistency
pub mod names {
    pub const API_REQUESTS_TOTAL: &str = "api_requests_total";
    pub const API_REQUEST_DURATION_SECONDS: &str = "api_request_duration_seconds";
}

/// Label keys
pub mod labels {
    pub const METHOD: &str = "method";
    pub const ENDPOINT: &str = "endpoint";
    pub const STATUS: &str = "status";
}

/// Prometheus client default buckets (in seconds)
pub const DURATION_BUCKETS: &[f64] = &[
    0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5, 10.0,
];

/// Content type of the Prometheus text exposition format
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// One completed request, folded into the registry as soon as it is recorded
#[derive(Debug, Clone)]
pub struct RequestMetric {
    pub method: String,
    pub path: String,
    pub status: u16,
    pub duration: Duration,
}

/// Process-wide request metrics
///
/// Cloning is cheap and every clone records into the same storage. The
/// recorder keeps one atomic counter and one atomic bucket set per label
/// combination, so recording never contends with a scrape.
#[derive(Clone)]
pub struct MetricsRegistry {
    recorder: Arc<PrometheusRecorder>,
    handle: PrometheusHandle,
}

impl MetricsRegistry {
    pub fn new() -> Result<Self> {
        let recorder = PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Full(names::API_REQUEST_DURATION_SECONDS.to_string()),
                DURATION_BUCKETS,
            )?
            .build_recorder();
        let handle = recorder.handle();

        let registry = Self {
            recorder: Arc::new(recorder),
            handle,
        };

        metrics::with_local_recorder(registry.recorder.as_ref(), || {
            describe_counter!(names::API_REQUESTS_TOTAL, "Total API requests");
            describe_histogram!(
                names::API_REQUEST_DURATION_SECONDS,
                Unit::Seconds,
                "API request duration in seconds"
            );
        });

        Ok(registry)
    }

    /// Fold one request into the counter and the duration histogram
    pub fn record(&self, metric: &RequestMetric) {
        let status = metric.status.to_string();
        let duration_secs = metric.duration.as_secs_f64();

        metrics::with_local_recorder(self.recorder.as_ref(), || {
            counter!(
                names::API_REQUESTS_TOTAL,
                labels::METHOD => metric.method.clone(),
                labels::ENDPOINT => metric.path.clone(),
                labels::STATUS => status
            )
            .increment(1);

            histogram!(
                names::API_REQUEST_DURATION_SECONDS,
                labels::METHOD => metric.method.clone(),
                labels::ENDPOINT => metric.path.clone()
            )
            .record(duration_secs);
        });
    }

    /// Record an HTTP request
    pub fn record_http_request(&self, method: &str, path: &str, status: u16, duration: Duration) {
        self.record(&RequestMetric {
            method: method.to_string(),
            path: path.to_string(),
            status,
            duration,
        });
    }

    /// Render the current state in the Prometheus text exposition format
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

// ============================================================================
// Timer Helper
// ============================================================================

/// Timer for measuring durations
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the value of one sample line in a rendered exposition.
///
/// Matches on the metric name and on every `key="value"` pair given,
/// regardless of label order.
#[cfg(test)]
pub(crate) fn sample_value(exposition: &str, name: &str, labels: &[(&str, &str)]) -> Option<f64> {
    exposition
        .lines()
        .filter(|line| !line.starts_with('#'))
        .find(|line| {
            let Some(rest) = line.strip_prefix(name) else {
                return false;
            };
            if !(rest.starts_with('{') || rest.starts_with(' ')) {
                return false;
            }
            let (label_part, _) = rest.rsplit_once(' ').unwrap_or((rest, ""));
            labels
                .iter()
                .all(|(k, v)| label_part.contains(&format!("{}=\"{}\"", k, v)))
        })
        .and_then(|line| line.rsplit_once(' '))
        .and_then(|(_, value)| value.trim().parse().ok())
}
