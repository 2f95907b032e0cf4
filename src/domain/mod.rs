//! Domain layer - pure business logic with no external dependencies.
//!
//! This layer contains the core concepts and invariants of the intake form:
//! - Field validation rules and verdicts
//! - Loan quoting (purpose policies and the amortization formula)
//! - Amount-in-words rendering
//! - en-IN display formatting
//!
//! All types in this layer are value types and pure functions.

pub mod format;
pub mod quote;
pub mod rule;
pub mod words;
