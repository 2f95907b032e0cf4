//! Multi-step form state machine.
//!
//! Models the three-step borrower form: personal information, employment
//! details, loan information. Navigation validates the current step before
//! advancing; whole-form validation repositions to the first failing step,
//! mirroring how the form walks a borrower back to their mistake.

use crate::application::evaluator::FormEvaluator;
use ahash::AHashMap;

/// Number of wizard steps.
pub const STEP_COUNT: usize = 3;

/// Employment statuses for which annual income is not required.
const INCOME_EXEMPT_STATUSES: [&str; 2] = ["unemployed", "student"];

/// The field names belonging to a step (1-based).
///
/// Unknown steps have no fields.
pub fn step_fields(step: usize) -> &'static [&'static str] {
    match step {
        1 => &[
            "first_name",
            "last_name",
            "email",
            "phone",
            "date_of_birth",
            "address",
            "city",
            "state",
            "zip_code",
        ],
        2 => &["employment_status", "annual_income"],
        3 => &["loan_amount", "loan_purpose"],
        _ => &[],
    }
}

/// A single failing field within a step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldFailure {
    /// Field name
    pub field: String,
    /// Human-readable failure message
    pub message: String,
}

/// Outcome of validating one step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepReport {
    /// The step that was validated (1-based)
    pub step: usize,
    /// Failing fields, in step-field order
    pub failures: Vec<FieldFailure>,
}

impl StepReport {
    /// Check if every field in the step passed.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

/// State machine for the multi-step borrower form.
///
/// Holds the raw field values entered so far and the current step. Field
/// values are evaluated against the shared rule set via a [`FormEvaluator`];
/// missing fields evaluate as empty strings.
///
/// # Example
/// ```
/// use loan_intake::{FormEvaluator, FormWizard, RuleSet};
/// use std::sync::Arc;
///
/// let mut wizard = FormWizard::new(FormEvaluator::new(Arc::new(RuleSet::borrower())));
/// assert_eq!(wizard.current_step(), 1);
///
/// // An empty personal-information step does not advance.
/// let report = wizard.next_step();
/// assert!(!report.is_valid());
/// assert_eq!(wizard.current_step(), 1);
/// ```
#[derive(Debug)]
pub struct FormWizard {
    evaluator: FormEvaluator,
    data: AHashMap<String, String>,
    required_overrides: AHashMap<String, bool>,
    current_step: usize,
}

impl FormWizard {
    /// Create a wizard positioned at step 1 with no data entered.
    pub fn new(evaluator: FormEvaluator) -> Self {
        Self {
            evaluator,
            data: AHashMap::new(),
            required_overrides: AHashMap::new(),
            current_step: 1,
        }
    }

    /// The current step (1-based).
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Store a raw field value.
    ///
    /// Setting `employment_status` adjusts whether `annual_income` is
    /// required: unemployed borrowers and students may leave it empty,
    /// everyone else must provide it.
    pub fn set_field(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();

        if field == "employment_status" {
            let exempt = INCOME_EXEMPT_STATUSES.contains(&value.trim());
            self.required_overrides
                .insert("annual_income".to_string(), !exempt);
        }

        self.data.insert(field, value);
    }

    /// The raw value stored for a field, if any.
    pub fn field(&self, field: &str) -> Option<&str> {
        self.data.get(field).map(|v| v.as_str())
    }

    /// Validate every field of a step.
    ///
    /// Fields with no stored value are evaluated as empty.
    pub fn validate_step(&self, step: usize) -> StepReport {
        let mut failures = Vec::new();

        for &field in step_fields(step) {
            let raw = self.data.get(field).map(|v| v.as_str()).unwrap_or("");
            let required = self.required_overrides.get(field).copied();
            let verdict = self.evaluator.evaluate_with_required(field, raw, required);

            if let Some(message) = verdict.message {
                failures.push(FieldFailure {
                    field: field.to_string(),
                    message,
                });
            }
        }

        StepReport { step, failures }
    }

    /// Validate the current step and advance if it passes.
    ///
    /// Returns the step report either way; the caller surfaces failures to
    /// the borrower. The final step never advances past itself.
    pub fn next_step(&mut self) -> StepReport {
        let report = self.validate_step(self.current_step);

        if report.is_valid() && self.current_step < STEP_COUNT {
            self.current_step += 1;
            self.evaluator.metrics().record_step_completed();
            tracing::debug!(step = self.current_step, "wizard advanced");
        }

        report
    }

    /// Move back one step without validating.
    ///
    /// Returns the new current step; step 1 is the floor.
    pub fn prev_step(&mut self) -> usize {
        if self.current_step > 1 {
            self.current_step -= 1;
        }
        self.current_step
    }

    /// Validate every step, as done on submission.
    ///
    /// On the first failing step, the wizard repositions there and returns
    /// its report so the borrower lands on the fields to fix.
    pub fn validate_all(&mut self) -> Result<(), StepReport> {
        for step in 1..=STEP_COUNT {
            let report = self.validate_step(step);
            if !report.is_valid() {
                self.current_step = step;
                return Err(report);
            }
        }
        Ok(())
    }

    /// Clear all data and return to step 1.
    pub fn reset(&mut self) {
        self.data.clear();
        self.required_overrides.clear();
        self.current_step = 1;
    }

    /// Get a reference to the evaluator.
    pub fn evaluator(&self) -> &FormEvaluator {
        &self.evaluator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ruleset::RuleSet;
    use std::sync::Arc;

    fn wizard() -> FormWizard {
        FormWizard::new(FormEvaluator::new(Arc::new(RuleSet::borrower())))
    }

    fn fill_personal_info(wizard: &mut FormWizard) {
        wizard.set_field("first_name", "Asha");
        wizard.set_field("last_name", "Verma");
        wizard.set_field("email", "asha.verma@example.com");
        wizard.set_field("phone", "9876543210");
        wizard.set_field("date_of_birth", "1990-04-12");
        wizard.set_field("address", "12 MG Road, Indiranagar");
        wizard.set_field("city", "Bengaluru");
        wizard.set_field("state", "Karnataka");
        wizard.set_field("zip_code", "560001");
    }

    fn fill_employment(wizard: &mut FormWizard) {
        wizard.set_field("employment_status", "salaried");
        wizard.set_field("annual_income", "900000");
    }

    fn fill_loan(wizard: &mut FormWizard) {
        wizard.set_field("loan_amount", "500000");
        wizard.set_field("loan_purpose", "home_loan");
    }

    #[test]
    fn test_empty_step_does_not_advance() {
        let mut w = wizard();
        let report = w.next_step();

        assert!(!report.is_valid());
        assert_eq!(w.current_step(), 1);
        // Every required personal field is missing.
        assert_eq!(report.failures.len(), 9);
    }

    #[test]
    fn test_valid_step_advances() {
        let mut w = wizard();
        fill_personal_info(&mut w);

        let report = w.next_step();
        assert!(report.is_valid());
        assert_eq!(w.current_step(), 2);
        assert_eq!(w.evaluator().metrics().steps_completed(), 1);
    }

    #[test]
    fn test_failure_reports_fields_in_order() {
        let mut w = wizard();
        fill_personal_info(&mut w);
        w.set_field("phone", "12345");
        w.set_field("zip_code", "ABC");

        let report = w.validate_step(1);
        let failing: Vec<&str> = report.failures.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(failing, ["phone", "zip_code"]);
    }

    #[test]
    fn test_prev_step_floors_at_one() {
        let mut w = wizard();
        assert_eq!(w.prev_step(), 1);

        fill_personal_info(&mut w);
        w.next_step();
        assert_eq!(w.current_step(), 2);
        assert_eq!(w.prev_step(), 1);
        assert_eq!(w.prev_step(), 1);
    }

    #[test]
    fn test_final_step_does_not_advance_past_itself() {
        let mut w = wizard();
        fill_personal_info(&mut w);
        fill_employment(&mut w);
        fill_loan(&mut w);

        w.next_step();
        w.next_step();
        assert_eq!(w.current_step(), 3);

        let report = w.next_step();
        assert!(report.is_valid());
        assert_eq!(w.current_step(), 3);
    }

    #[test]
    fn test_validate_all_repositions_to_first_failure() {
        let mut w = wizard();
        fill_personal_info(&mut w);
        fill_loan(&mut w);
        // Step 2 left empty: employment_status is required.

        // Walk forward past step 1 first.
        w.next_step();
        w.next_step(); // fails, stays on 2... then move manually to 3 to prove repositioning
        assert_eq!(w.current_step(), 2);

        let err = w.validate_all().unwrap_err();
        assert_eq!(err.step, 2);
        assert_eq!(w.current_step(), 2);
        assert_eq!(err.failures[0].field, "employment_status");
    }

    #[test]
    fn test_validate_all_passes_complete_form() {
        let mut w = wizard();
        fill_personal_info(&mut w);
        fill_employment(&mut w);
        fill_loan(&mut w);

        assert!(w.validate_all().is_ok());
    }

    #[test]
    fn test_student_income_exemption() {
        let mut w = wizard();
        w.set_field("employment_status", "student");

        let report = w.validate_step(2);
        assert!(report.is_valid(), "failures: {:?}", report.failures);
    }

    #[test]
    fn test_salaried_income_required() {
        let mut w = wizard();
        w.set_field("employment_status", "salaried");

        let report = w.validate_step(2);
        assert!(!report.is_valid());
        assert_eq!(report.failures[0].field, "annual_income");
        assert_eq!(report.failures[0].message, "Annual Income is required");
    }

    #[test]
    fn test_exemption_recomputed_on_status_change() {
        let mut w = wizard();
        w.set_field("employment_status", "student");
        assert!(w.validate_step(2).is_valid());

        w.set_field("employment_status", "self_employed");
        assert!(!w.validate_step(2).is_valid());

        w.set_field("employment_status", "unemployed");
        assert!(w.validate_step(2).is_valid());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut w = wizard();
        fill_personal_info(&mut w);
        w.next_step();
        w.set_field("employment_status", "salaried");

        w.reset();
        assert_eq!(w.current_step(), 1);
        assert_eq!(w.field("first_name"), None);
        // The income override is gone with the data.
        assert!(w.validate_step(2).failures.iter().all(|f| f.field != "annual_income"));
    }

    #[test]
    fn test_unknown_step_has_no_fields() {
        let w = wizard();
        assert!(w.validate_step(99).is_valid());
        assert!(step_fields(0).is_empty());
    }
}
