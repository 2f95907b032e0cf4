//! Form-level evaluation coordinator.
//!
//! Wraps a shared [`RuleSet`] with metrics and structured logging so that
//! every check and quote is observable without changing the pure domain
//! semantics.

use crate::application::metrics::IntakeMetrics;
use crate::application::ruleset::RuleSet;
use crate::domain::quote::{quote, LoanQuote};
use crate::domain::rule::ValidationResult;
use std::sync::Arc;

/// Coordinates field checks and quoting over a shared rule set.
///
/// Cheap to clone: clones share the rule set and the metrics counters.
///
/// # Example
/// ```
/// use loan_intake::{FormEvaluator, RuleSet};
/// use std::sync::Arc;
///
/// let evaluator = FormEvaluator::new(Arc::new(RuleSet::borrower()));
///
/// assert!(evaluator.evaluate("phone", "9876543210").is_valid());
/// assert!(!evaluator.evaluate("phone", "12345").is_valid());
///
/// let snapshot = evaluator.metrics().snapshot();
/// assert_eq!(snapshot.checks_passed, 1);
/// assert_eq!(snapshot.checks_failed, 1);
/// ```
#[derive(Debug, Clone)]
pub struct FormEvaluator {
    rules: Arc<RuleSet>,
    metrics: IntakeMetrics,
}

impl FormEvaluator {
    /// Create an evaluator over a shared rule set with fresh metrics.
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self::with_metrics(rules, IntakeMetrics::new())
    }

    /// Create an evaluator recording into existing metrics.
    pub fn with_metrics(rules: Arc<RuleSet>, metrics: IntakeMetrics) -> Self {
        Self { rules, metrics }
    }

    /// Evaluate a raw field value, recording the outcome.
    pub fn evaluate(&self, field: &str, raw: &str) -> ValidationResult {
        self.evaluate_with_required(field, raw, None)
    }

    /// Evaluate with an optional requiredness override, recording the outcome.
    pub fn evaluate_with_required(
        &self,
        field: &str,
        raw: &str,
        required: Option<bool>,
    ) -> ValidationResult {
        let verdict = self.rules.evaluate_with_required(field, raw, required);

        if verdict.is_valid() {
            self.metrics.record_check_passed();
        } else {
            self.metrics.record_check_failed();
        }

        tracing::debug!(
            field,
            valid = verdict.is_valid(),
            message = verdict.message.as_deref().unwrap_or(""),
            "field check"
        );

        verdict
    }

    /// Quote a loan, recording the computation.
    pub fn quote(&self, principal: f64, purpose: &str) -> LoanQuote {
        let q = quote(principal, purpose);
        self.metrics.record_quote();

        tracing::debug!(
            principal,
            purpose,
            emi = q.emi,
            rate = q.interest_rate,
            fee = q.processing_fee,
            "loan quote"
        );

        q
    }

    /// Get a reference to the rule set.
    pub fn rules(&self) -> &Arc<RuleSet> {
        &self.rules
    }

    /// Get a reference to the metrics.
    pub fn metrics(&self) -> &IntakeMetrics {
        &self.metrics
    }
}
