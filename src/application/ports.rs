//! Ports (interfaces) for the application layer.
//!
//! In hexagonal architecture, ports define the interfaces that the application
//! layer needs. Infrastructure adapters implement these ports.

use crate::application::analytics::AnalyticsEvent;
use std::fmt::Debug;
use std::time::Instant;

/// Port for obtaining current time.
///
/// This abstraction allows the application layer to work with time
/// without depending on system clock implementation details.
/// Infrastructure provides concrete implementations (SystemClock, MockClock).
pub trait Clock: Send + Sync + Debug {
    /// Get the current instant.
    fn now(&self) -> Instant;
}

/// Port for delivering analytics events.
///
/// The tracker records every event in memory and hands each one to a sink
/// for delivery. Infrastructure provides concrete implementations
/// (TracingSink for structured log delivery, MockSink for tests). Delivery
/// is fire-and-forget: sinks must not fail the tracking call.
pub trait AnalyticsSink: Send + Sync {
    /// Deliver a single tracked event.
    fn deliver(&self, event: &AnalyticsEvent);
}
