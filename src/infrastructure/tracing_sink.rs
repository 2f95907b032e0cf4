//! Analytics delivery through the `tracing` ecosystem.

use crate::application::analytics::AnalyticsEvent;
use crate::application::ports::AnalyticsSink;

/// Sink that emits every analytics event as a structured `tracing` event.
///
/// Events are emitted at INFO level under the `loan_intake::analytics`
/// target, so applications can route or filter them independently of the
/// crate's debug logging.
///
/// # Example
/// ```
/// use loan_intake::{AnalyticsTracker, SystemClock, TracingSink};
/// use std::sync::Arc;
///
/// let tracker = AnalyticsTracker::new(Arc::new(SystemClock::new()), Arc::new(TracingSink::new()));
/// tracker.track_step_viewed(1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a new tracing sink.
    pub fn new() -> Self {
        Self
    }
}

impl AnalyticsSink for TracingSink {
    fn deliver(&self, event: &AnalyticsEvent) {
        tracing::info!(
            target: "loan_intake::analytics",
            event = %event.name,
            session = %event.session_id,
            elapsed_ms = event.elapsed.as_millis() as u64,
            properties = ?event.properties,
            "analytics event"
        );
    }
}
