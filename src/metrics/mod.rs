//! Basic metrics instrumentation for contact submissions and mail delivery.
//!
//! Provides in-process counters; a summary is logged when the server stops.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector shared by the services.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Public submissions that passed validation and were stored
    submissions_accepted_total: Arc<AtomicU64>,

    /// Public submissions rejected by validation
    submissions_rejected_total: Arc<AtomicU64>,

    /// Emails handed to the mailer successfully
    emails_sent_total: Arc<AtomicU64>,

    /// Emails that failed to render or send
    email_failures_total: Arc<AtomicU64>,

    /// Records created through the admin screen
    records_created_total: Arc<AtomicU64>,

    /// Records updated through the admin screen
    records_updated_total: Arc<AtomicU64>,

    /// Records deleted through the admin screen
    records_deleted_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            submissions_accepted_total: Arc::new(AtomicU64::new(0)),
            submissions_rejected_total: Arc::new(AtomicU64::new(0)),
            emails_sent_total: Arc::new(AtomicU64::new(0)),
            email_failures_total: Arc::new(AtomicU64::new(0)),
            records_created_total: Arc::new(AtomicU64::new(0)),
            records_updated_total: Arc::new(AtomicU64::new(0)),
            records_deleted_total: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn record_submission_accepted(&self) {
        self.submissions_accepted_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_rejected(&self) {
        self.submissions_rejected_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_email_sent(&self) {
        self.emails_sent_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_email_failure(&self) {
        self.email_failures_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_created(&self) {
        self.records_created_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_updated(&self) {
        self.records_updated_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_deleted(&self) {
        self.records_deleted_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            submissions_accepted_total: self.submissions_accepted_total.load(Ordering::Relaxed),
            submissions_rejected_total: self.submissions_rejected_total.load(Ordering::Relaxed),
            emails_sent_total: self.emails_sent_total.load(Ordering::Relaxed),
            email_failures_total: self.email_failures_total.load(Ordering::Relaxed),
            records_created_total: self.records_created_total.load(Ordering::Relaxed),
            records_updated_total: self.records_updated_total.load(Ordering::Relaxed),
            records_deleted_total: self.records_deleted_total.load(Ordering::Relaxed),
        }
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        for counter in [
            &self.submissions_accepted_total,
            &self.submissions_rejected_total,
            &self.emails_sent_total,
            &self.email_failures_total,
            &self.records_created_total,
            &self.records_updated_total,
            &self.records_deleted_total,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsSummary {
    pub submissions_accepted_total: u64,
    pub submissions_rejected_total: u64,
    pub emails_sent_total: u64,
    pub email_failures_total: u64,
    pub records_created_total: u64,
    pub records_updated_total: u64,
    pub records_deleted_total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_metrics_creation() {
        assert_eq!(Metrics::new().summary(), MetricsSummary::default());
    }

    #[test]
    fn test_summary() {
        let metrics = Metrics::new();
        metrics.record_submission_accepted();
        metrics.record_submission_rejected();
        metrics.record_submission_rejected();
        metrics.record_email_sent();
        metrics.record_email_failure();
        metrics.record_created();
        metrics.record_updated();
        metrics.record_deleted();

        let summary = metrics.summary();
        assert_eq!(summary.submissions_accepted_total, 1);
        assert_eq!(summary.submissions_rejected_total, 2);
        assert_eq!(summary.emails_sent_total, 1);
        assert_eq!(summary.email_failures_total, 1);
        assert_eq!(summary.records_created_total, 1);
        assert_eq!(summary.records_updated_total, 1);
        assert_eq!(summary.records_deleted_total, 1);
    }

    #[test]
    fn test_reset() {
        let metrics = Metrics::new();
        metrics.record_email_sent();
        metrics.record_deleted();

        metrics.reset();
        assert_eq!(metrics.summary(), MetricsSummary::default());
    }

    #[test]
    fn test_concurrent_access() {
        let metrics = Metrics::new();
        let metrics1 = metrics.clone();
        let metrics2 = metrics.clone();

        let handle1 = thread::spawn(move || {
            for _ in 0..100 {
                metrics1.record_email_sent();
            }
        });

        let handle2 = thread::spawn(move || {
            for _ in 0..100 {
                metrics2.record_email_sent();
            }
        });

        handle1.join().unwrap();
        handle2.join().unwrap();

        assert_eq!(metrics.summary().emails_sent_total, 200);
    }
}
