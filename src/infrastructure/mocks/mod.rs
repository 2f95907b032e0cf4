//! Mock implementations for testing.

mod clock;
mod sink;

pub use clock::MockClock;
pub use sink::MockSink;
