//! # loan-intake
//!
//! Client-side core for a multi-step loan-application form: a declarative
//! field-validation rule engine, an EMI (loan installment) estimator, an
//! amount-in-words renderer, and light analytics/metrics instrumentation.
//!
//! The crate contains no UI binding, no network and no persistence. Every
//! operation is a pure synchronous computation over immutable inputs, safe
//! to call from concurrent invocations without locking. Validation fails
//! open for unknown fields and unknown loan purposes: the client-side check
//! is a courtesy, the server-side collaborator is authoritative.
//!
//! ## Quick Start
//!
//! Evaluate field values against the borrower rule table:
//!
//! ```rust
//! use loan_intake::RuleSet;
//!
//! let rules = RuleSet::borrower();
//!
//! let verdict = rules.evaluate("phone", "9876543210");
//! assert!(verdict.is_valid());
//!
//! let verdict = rules.evaluate("zip_code", "5600");
//! assert_eq!(
//!     verdict.message.as_deref(),
//!     Some("Please enter a valid 6-digit PIN code"),
//! );
//! ```
//!
//! Quote a loan and render the amount:
//!
//! ```rust
//! use loan_intake::{amount_in_words, format_rupees, quote};
//!
//! let q = quote(1_000_000.0, "home_loan");
//! assert_eq!(q.interest_rate, 8.5);
//! assert_eq!(format_rupees(q.processing_fee), "\u{20b9}15,000");
//!
//! assert_eq!(amount_in_words(1_000_000), "One Lakh");
//! ```
//!
//! Drive the three-step wizard:
//!
//! ```rust
//! use loan_intake::{FormEvaluator, FormWizard, RuleSet};
//! use std::sync::Arc;
//!
//! let mut wizard = FormWizard::new(FormEvaluator::new(Arc::new(RuleSet::borrower())));
//!
//! // Nothing entered yet: step 1 reports its required fields.
//! let report = wizard.next_step();
//! assert!(!report.is_valid());
//! assert_eq!(wizard.current_step(), 1);
//! ```
//!
//! ## Validation semantics
//!
//! Checks run in a fixed order and the first failure wins: required,
//! empty-optional short-circuit, pattern, minimum length, numeric lower
//! bound (a parse failure counts as below the minimum), numeric upper
//! bound, custom predicate. Values are trimmed before any check. Evaluation
//! never panics and never returns an error: invalid input is a
//! [`ValidationResult`] with `valid = false` and a human-readable message.
//!
//! ## Amount-in-words
//!
//! [`amount_in_words`] renders amounts with the Indian magnitude words
//! Thousand, Lakh and Crore, but consumes the amount in groups of 1000 at
//! every level, so 100,000 renders as "One Hundred Thousand" rather than
//! "One Lakh". This matches the form's established output and is kept
//! deliberately; see [`domain::words`] for details.
//!
//! ## Observability
//!
//! The [`FormEvaluator`] records every check and quote into shared
//! [`IntakeMetrics`] counters and emits `tracing` debug events. The
//! [`AnalyticsTracker`] records session-scoped events (step views, field
//! interactions, submission outcomes) and delivers them through an
//! [`AnalyticsSink`]; [`TracingSink`] ships them as structured `tracing`
//! events.
//!
//! ```rust
//! use loan_intake::{FormEvaluator, RuleSet};
//! use std::sync::Arc;
//!
//! let evaluator = FormEvaluator::new(Arc::new(RuleSet::borrower()));
//! evaluator.evaluate("email", "not-an-email");
//!
//! let snapshot = evaluator.metrics().snapshot();
//! assert_eq!(snapshot.checks_failed, 1);
//! ```

// Domain layer - pure business logic
pub mod domain;

// Application layer - orchestration
pub mod application;

// Infrastructure layer - external adapters
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::{
    format::{format_rupees, group_inr},
    quote::{quote, quote_with_policy, LoanPurpose, LoanQuote, PurposePolicy},
    rule::{FieldRule, FieldRuleBuilder, Predicate, RuleError, ValidationResult},
    words::amount_in_words,
};

pub use application::{
    analytics::{step_name, AnalyticsEvent, AnalyticsTracker},
    evaluator::FormEvaluator,
    metrics::{IntakeMetrics, IntakeSnapshot},
    ports::{AnalyticsSink, Clock},
    ruleset::RuleSet,
    wizard::{step_fields, FieldFailure, FormWizard, StepReport, STEP_COUNT},
};

pub use infrastructure::{clock::SystemClock, tracing_sink::TracingSink};
