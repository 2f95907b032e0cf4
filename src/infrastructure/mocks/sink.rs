//! Mock analytics sink for testing.

use crate::application::analytics::AnalyticsEvent;
use crate::application::ports::AnalyticsSink;
use std::sync::{Arc, Mutex};

/// Sink that captures delivered events for inspection.
///
/// Clones share the same underlying capture buffer.
///
/// # Example
/// ```
/// use loan_intake::infrastructure::mocks::{MockClock, MockSink};
/// use loan_intake::AnalyticsTracker;
/// use std::sync::Arc;
/// use std::time::Instant;
///
/// let sink = MockSink::new();
/// let tracker = AnalyticsTracker::new(
///     Arc::new(MockClock::new(Instant::now())),
///     Arc::new(sink.clone()),
/// );
///
/// tracker.track_field_interaction("phone", "blur");
/// assert_eq!(sink.count(), 1);
/// assert_eq!(sink.events()[0].name, "field_interaction");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockSink {
    events: Arc<Mutex<Vec<AnalyticsEvent>>>,
}

impl MockSink {
    /// Create an empty capture sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events delivered so far.
    pub fn count(&self) -> usize {
        self.events
            .lock()
            .expect("MockSink mutex poisoned - a test thread panicked while holding the lock")
            .len()
    }

    /// Snapshot of every delivered event, in order.
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events
            .lock()
            .expect("MockSink mutex poisoned - a test thread panicked while holding the lock")
            .clone()
    }

    /// Clear the capture buffer.
    pub fn clear(&self) {
        self.events
            .lock()
            .expect("MockSink mutex poisoned - a test thread panicked while holding the lock")
            .clear();
    }
}

impl AnalyticsSink for MockSink {
    fn deliver(&self, event: &AnalyticsEvent) {
        self.events
            .lock()
            .expect("MockSink mutex poisoned - a test thread panicked while holding the lock")
            .push(event.clone());
    }
}
