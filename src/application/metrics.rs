//! Observability metrics for the intake form.
//!
//! Provides counters about validation and quoting activity for monitoring
//! and debugging.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics tracking intake-form activity.
///
/// All metrics use atomic operations for thread-safe updates and reads.
/// Clones share the same underlying counters.
#[derive(Debug, Clone)]
pub struct IntakeMetrics {
    inner: Arc<MetricsInner>,
}

#[derive(Debug)]
struct MetricsInner {
    /// Field checks that passed
    checks_passed: AtomicU64,
    /// Field checks that failed
    checks_failed: AtomicU64,
    /// Loan quotes computed
    quotes_computed: AtomicU64,
    /// Wizard steps completed
    steps_completed: AtomicU64,
}

impl IntakeMetrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MetricsInner {
                checks_passed: AtomicU64::new(0),
                checks_failed: AtomicU64::new(0),
                quotes_computed: AtomicU64::new(0),
                steps_completed: AtomicU64::new(0),
            }),
        }
    }

    /// Record a passing field check.
    pub(crate) fn record_check_passed(&self) {
        self.inner.checks_passed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failing field check.
    pub(crate) fn record_check_failed(&self) {
        self.inner.checks_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a computed quote.
    pub(crate) fn record_quote(&self) {
        self.inner.quotes_computed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a completed wizard step.
    pub(crate) fn record_step_completed(&self) {
        self.inner.steps_completed.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the total number of passing field checks.
    pub fn checks_passed(&self) -> u64 {
        self.inner.checks_passed.load(Ordering::Relaxed)
    }

    /// Get the total number of failing field checks.
    pub fn checks_failed(&self) -> u64 {
        self.inner.checks_failed.load(Ordering::Relaxed)
    }

    /// Get the total number of quotes computed.
    pub fn quotes_computed(&self) -> u64 {
        self.inner.quotes_computed.load(Ordering::Relaxed)
    }

    /// Get the total number of wizard steps completed.
    pub fn steps_completed(&self) -> u64 {
        self.inner.steps_completed.load(Ordering::Relaxed)
    }

    /// Get a snapshot of all metrics.
    pub fn snapshot(&self) -> IntakeSnapshot {
        IntakeSnapshot {
            checks_passed: self.checks_passed(),
            checks_failed: self.checks_failed(),
            quotes_computed: self.quotes_computed(),
            steps_completed: self.steps_completed(),
        }
    }

    /// Reset all metrics to zero.
    ///
    /// Useful for testing or when starting a new monitoring period.
    pub fn reset(&self) {
        self.inner.checks_passed.store(0, Ordering::Relaxed);
        self.inner.checks_failed.store(0, Ordering::Relaxed);
        self.inner.quotes_computed.store(0, Ordering::Relaxed);
        self.inner.steps_completed.store(0, Ordering::Relaxed);
    }
}

impl Default for IntakeMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntakeSnapshot {
    /// Field checks that passed
    pub checks_passed: u64,
    /// Field checks that failed
    pub checks_failed: u64,
    /// Loan quotes computed
    pub quotes_computed: u64,
    /// Wizard steps completed
    pub steps_completed: u64,
}

impl IntakeSnapshot {
    /// Calculate the failure rate of field checks (0.0 to 1.0).
    ///
    /// Returns 0.0 if no checks have run.
    pub fn failure_rate(&self) -> f64 {
        let total = self.total_checks();
        if total == 0 {
            0.0
        } else {
            self.checks_failed as f64 / total as f64
        }
    }

    /// Get the total number of field checks (passed + failed).
    pub fn total_checks(&self) -> u64 {
        self.checks_passed.saturating_add(self.checks_failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let metrics = IntakeMetrics::new();
        assert_eq!(metrics.checks_passed(), 0);
        assert_eq!(metrics.checks_failed(), 0);
        assert_eq!(metrics.quotes_computed(), 0);
        assert_eq!(metrics.steps_completed(), 0);
    }

    #[test]
    fn test_record_checks() {
        let metrics = IntakeMetrics::new();
        metrics.record_check_passed();
        metrics.record_check_passed();
        metrics.record_check_failed();

        assert_eq!(metrics.checks_passed(), 2);
        assert_eq!(metrics.checks_failed(), 1);
    }

    #[test]
    fn test_snapshot() {
        let metrics = IntakeMetrics::new();
        metrics.record_check_passed();
        metrics.record_check_failed();
        metrics.record_quote();
        metrics.record_step_completed();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.checks_passed, 1);
        assert_eq!(snapshot.checks_failed, 1);
        assert_eq!(snapshot.quotes_computed, 1);
        assert_eq!(snapshot.steps_completed, 1);
    }

    #[test]
    fn test_failure_rate() {
        let metrics = IntakeMetrics::new();

        // No checks - rate should be 0
        assert_eq!(metrics.snapshot().failure_rate(), 0.0);

        metrics.record_check_passed();
        assert_eq!(metrics.snapshot().failure_rate(), 0.0);

        metrics.record_check_failed();
        assert!((metrics.snapshot().failure_rate() - 0.5).abs() < f64::EPSILON);

        metrics.record_check_failed();
        metrics.record_check_failed();
        assert!((metrics.snapshot().failure_rate() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset() {
        let metrics = IntakeMetrics::new();
        metrics.record_check_passed();
        metrics.record_quote();

        metrics.reset();
        assert_eq!(metrics.snapshot().total_checks(), 0);
        assert_eq!(metrics.quotes_computed(), 0);
    }

    #[test]
    fn test_clone_shares_counters() {
        let a = IntakeMetrics::new();
        a.record_check_passed();

        let b = a.clone();
        b.record_check_passed();

        assert_eq!(a.checks_passed(), 2);
        assert_eq!(b.checks_passed(), 2);
    }

    #[test]
    fn test_concurrent_updates() {
        use std::thread;

        let metrics = IntakeMetrics::new();
        let mut handles = vec![];

        for _ in 0..10 {
            let m = metrics.clone();
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    m.record_check_passed();
                    m.record_check_failed();
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(metrics.checks_passed(), 1000);
        assert_eq!(metrics.checks_failed(), 1000);
    }
}
