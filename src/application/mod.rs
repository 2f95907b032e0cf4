//! Application layer - orchestration of domain logic.
//!
//! This layer coordinates the domain logic and manages form-level behavior:
//! - Rule registry (the borrower rule table)
//! - Form evaluator (checks + quoting with metrics and logging)
//! - Step wizard (navigation and whole-form validation)
//! - Analytics tracking
//!
//! ## Ports
//!
//! The application layer defines ports (traits) that infrastructure
//! adapters must implement. This keeps the application layer independent
//! from infrastructure details.

pub mod analytics;
pub mod evaluator;
pub mod metrics;
pub mod ports;
pub mod ruleset;
pub mod wizard;
