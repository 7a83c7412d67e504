//! Counters for transport requests and submission outcomes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct Counters {
    requests: AtomicU64,
    request_errors: AtomicU64,
    request_ms: AtomicU64,
    succeeded: AtomicU64,
    failed: AtomicU64,
    blocked: AtomicU64,
}

/// Shared handle; clones update the same counters.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    counters: Arc<Counters>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start timing one transport request.
    pub fn start_request(&self) -> RequestTimer {
        RequestTimer {
            started: Instant::now(),
            metrics: self.clone(),
        }
    }

    pub fn record_http_request(&self, elapsed: Duration) {
        let c = &self.counters;
        c.requests.fetch_add(1, Ordering::Relaxed);
        c.request_ms
            .fetch_add(elapsed.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn record_http_error(&self) {
        self.counters.request_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_succeeded(&self) {
        self.counters.succeeded.fetch_add(1, Ordering::Relaxed);
    }

    /// The transport was reached and the send failed.
    pub fn record_submission_failed(&self) {
        self.counters.failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Submit stopped before sending: invalid form or no transport.
    pub fn record_submission_blocked(&self) {
        self.counters.blocked.fetch_add(1, Ordering::Relaxed);
    }

    pub fn http_requests_total(&self) -> u64 {
        self.counters.requests.load(Ordering::Relaxed)
    }

    pub fn http_errors_total(&self) -> u64 {
        self.counters.request_errors.load(Ordering::Relaxed)
    }

    pub fn http_duration_total_ms(&self) -> u64 {
        self.counters.request_ms.load(Ordering::Relaxed)
    }

    /// Mean request time in milliseconds, 0 before the first request.
    pub fn http_duration_avg_ms(&self) -> f64 {
        match self.http_requests_total() {
            0 => 0.0,
            n => self.http_duration_total_ms() as f64 / n as f64,
        }
    }

    pub fn submissions_succeeded_total(&self) -> u64 {
        self.counters.succeeded.load(Ordering::Relaxed)
    }

    pub fn submissions_failed_total(&self) -> u64 {
        self.counters.failed.load(Ordering::Relaxed)
    }

    pub fn submissions_blocked_total(&self) -> u64 {
        self.counters.blocked.load(Ordering::Relaxed)
    }

    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            submissions_succeeded_total: self.submissions_succeeded_total(),
            submissions_failed_total: self.submissions_failed_total(),
            submissions_blocked_total: self.submissions_blocked_total(),
        }
    }
}

/// Point-in-time copy of the counters, logged when the driver exits.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_avg_ms: f64,
    pub submissions_succeeded_total: u64,
    pub submissions_failed_total: u64,
    pub submissions_blocked_total: u64,
}

/// In-flight request; consumed by [`RequestTimer::finish`].
pub struct RequestTimer {
    started: Instant,
    metrics: Metrics,
}

impl RequestTimer {
    /// Count the request and its duration, plus an error when `ok` is false.
    pub fn finish(self, ok: bool) {
        self.metrics.record_http_request(self.started.elapsed());
        if !ok {
            self.metrics.record_http_error();
        }
    }
}
