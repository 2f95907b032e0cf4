//! Example walking a borrower through the three-step application form.
//!
//! This example shows how to drive the wizard: store field values,
//! validate step by step, handle a rejected field, and read the metrics
//! and analytics collected along the way.

use loan_intake::{
    step_name, AnalyticsTracker, FormEvaluator, FormWizard, RuleSet, SystemClock, TracingSink,
};
use std::sync::Arc;
use tracing_subscriber::prelude::*;

fn main() {
    // Ship field-check and analytics events to stderr as structured logs.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut wizard = FormWizard::new(FormEvaluator::new(Arc::new(RuleSet::borrower())));
    let tracker = AnalyticsTracker::new(Arc::new(SystemClock::new()), Arc::new(TracingSink::new()));

    println!("=== Borrower Form Walkthrough ===");
    println!("Session: {}\n", tracker.session_id());

    // Step 1: personal information, with a typo in the phone number.
    println!("--- {} ---", step_name(wizard.current_step()));
    tracker.track_step_viewed(wizard.current_step());

    wizard.set_field("first_name", "Asha");
    wizard.set_field("last_name", "Verma");
    wizard.set_field("email", "asha.verma@example.com");
    wizard.set_field("phone", "12345");
    wizard.set_field("date_of_birth", "1990-04-12");
    wizard.set_field("address", "12 MG Road, Indiranagar");
    wizard.set_field("city", "Bengaluru");
    wizard.set_field("state", "Karnataka");
    wizard.set_field("zip_code", "560001");

    let report = wizard.next_step();
    for failure in &report.failures {
        println!("  rejected {}: {}", failure.field, failure.message);
    }

    // Fix the phone number and advance.
    wizard.set_field("phone", "9876543210");
    tracker.track_field_interaction("phone", "corrected");
    assert!(wizard.next_step().is_valid());

    // Step 2: a student may leave annual income blank.
    println!("\n--- {} ---", step_name(wizard.current_step()));
    tracker.track_step_viewed(wizard.current_step());

    wizard.set_field("employment_status", "student");
    assert!(wizard.next_step().is_valid());

    // Step 3: loan details and submission.
    println!("\n--- {} ---", step_name(wizard.current_step()));
    tracker.track_step_viewed(wizard.current_step());

    wizard.set_field("loan_amount", "500000");
    wizard.set_field("loan_purpose", "education_loan");

    match wizard.validate_all() {
        Ok(()) => {
            tracker.track_submission(true, None);
            println!("  application accepted");
        }
        Err(report) => {
            tracker.track_submission(false, Some("validation failed"));
            println!("  back to step {}: {:?}", report.step, report.failures);
        }
    }

    let snapshot = wizard.evaluator().metrics().snapshot();
    println!("\n=== Session Metrics ===");
    println!("checks passed:   {}", snapshot.checks_passed);
    println!("checks failed:   {}", snapshot.checks_failed);
    println!("steps completed: {}", snapshot.steps_completed);
    println!("events tracked:  {}", tracker.event_count());
}
