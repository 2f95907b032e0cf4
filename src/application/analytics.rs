//! Form analytics tracking.
//!
//! Records named events with string properties against a per-form session.
//! Events are kept in memory for inspection and handed to an
//! [`AnalyticsSink`](crate::application::ports::AnalyticsSink) for delivery;
//! timestamps come from the [`Clock`](crate::application::ports::Clock) port
//! so tests can control time.

use crate::application::ports::{AnalyticsSink, Clock};
use rand::Rng;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Display names for the wizard steps.
///
/// Unknown steps fall back to `"Step N"`.
pub fn step_name(step: usize) -> String {
    match step {
        1 => "Personal Information".to_string(),
        2 => "Employment Details".to_string(),
        3 => "Loan Information".to_string(),
        n => format!("Step {}", n),
    }
}

/// A single tracked analytics event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalyticsEvent {
    /// Event name (e.g. `form_step_viewed`)
    pub name: String,
    /// The tracker's session id
    pub session_id: String,
    /// Time elapsed since the tracker started
    pub elapsed: Duration,
    /// Free-form string properties
    pub properties: BTreeMap<String, String>,
}

/// Tracks analytics events for one form session.
///
/// Every event carries the session id and the time elapsed since the
/// tracker was created. Tracking is infallible: the sink is fire-and-forget
/// and the in-memory log always records the event.
pub struct AnalyticsTracker {
    session_id: String,
    started: Instant,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn AnalyticsSink>,
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl AnalyticsTracker {
    /// Create a tracker with a generated session id.
    pub fn new(clock: Arc<dyn Clock>, sink: Arc<dyn AnalyticsSink>) -> Self {
        Self::with_session_id(generate_session_id(), clock, sink)
    }

    /// Create a tracker with an explicit session id.
    pub fn with_session_id(
        session_id: String,
        clock: Arc<dyn Clock>,
        sink: Arc<dyn AnalyticsSink>,
    ) -> Self {
        let started = clock.now();
        Self {
            session_id,
            started,
            clock,
            sink,
            events: Mutex::new(Vec::new()),
        }
    }

    /// The session id shared by every event from this tracker.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Time elapsed since the tracker was created.
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.started)
    }

    /// Track a named event with properties.
    pub fn track(&self, name: impl Into<String>, properties: BTreeMap<String, String>) {
        let event = AnalyticsEvent {
            name: name.into(),
            session_id: self.session_id.clone(),
            elapsed: self.elapsed(),
            properties,
        };

        self.sink.deliver(&event);

        self.events
            .lock()
            .expect("analytics event log mutex poisoned")
            .push(event);
    }

    /// Track that a wizard step was shown.
    pub fn track_step_viewed(&self, step: usize) {
        let mut properties = BTreeMap::new();
        properties.insert("step".to_string(), step.to_string());
        properties.insert("step_name".to_string(), step_name(step));
        self.track("form_step_viewed", properties);
    }

    /// Track an interaction with a single field.
    pub fn track_field_interaction(&self, field: &str, action: &str) {
        let mut properties = BTreeMap::new();
        properties.insert("field_name".to_string(), field.to_string());
        properties.insert("action".to_string(), action.to_string());
        self.track("field_interaction", properties);
    }

    /// Track the outcome of a form submission.
    pub fn track_submission(&self, success: bool, error_message: Option<&str>) {
        let mut properties = BTreeMap::new();
        properties.insert("success".to_string(), success.to_string());
        properties.insert(
            "time_spent_ms".to_string(),
            self.elapsed().as_millis().to_string(),
        );
        if let Some(message) = error_message {
            properties.insert("error_message".to_string(), message.to_string());
        }
        self.track("form_submitted", properties);
    }

    /// Snapshot of every event tracked so far, in order.
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events
            .lock()
            .expect("analytics event log mutex poisoned")
            .clone()
    }

    /// Number of events tracked so far.
    pub fn event_count(&self) -> usize {
        self.events
            .lock()
            .expect("analytics event log mutex poisoned")
            .len()
    }
}

impl std::fmt::Debug for AnalyticsTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyticsTracker")
            .field("session_id", &self.session_id)
            .field("event_count", &self.event_count())
            .field("sink", &"<sink>")
            .finish()
    }
}

/// Generate a session id: `session_<epoch millis>_<9 base-36 chars>`.
fn generate_session_id() -> String {
    const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);

    let mut rng = rand::thread_rng();
    let suffix: String = (0..9)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();

    format!("session_{}_{}", millis, suffix)
}
