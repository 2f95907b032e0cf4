//! Example quoting loans across purposes and rendering the amounts.
//!
//! This example shows the EMI estimator, the processing-fee cap, the
//! rupee formatter and the amount-in-words renderer.

use loan_intake::{amount_in_words, format_rupees, quote};

fn main() {
    println!("=== Loan Calculator ===\n");

    let principal = 1_000_000.0;
    println!(
        "Principal: {} ({})\n",
        format_rupees(principal),
        amount_in_words(principal as u64)
    );

    for purpose in [
        "home_loan",
        "car_loan",
        "personal_loan",
        "business_loan",
        "education_loan",
        "gold_loan",
    ] {
        let q = quote(principal, purpose);
        println!(
            "{:<16} rate {:>4.1}%  emi {:>10}  fee {:>10}",
            purpose,
            q.interest_rate,
            format_rupees(q.emi),
            format_rupees(q.processing_fee),
        );
    }

    // Unknown purposes quote at the fallback policy rather than failing.
    let q = quote(principal, "holiday_loan");
    println!(
        "{:<16} rate {:>4.1}%  emi {:>10}  fee {:>10}  (fallback)",
        "holiday_loan",
        q.interest_rate,
        format_rupees(q.emi),
        format_rupees(q.processing_fee),
    );

    // The fee is 1.5% of principal, capped at fifty thousand.
    println!("\n=== Processing Fee Cap ===");
    for principal in [1_000_000.0, 3_000_000.0, 5_000_000.0, 10_000_000.0] {
        let q = quote(principal, "home_loan");
        println!(
            "principal {:>12}  fee {:>10}",
            format_rupees(principal),
            format_rupees(q.processing_fee),
        );
    }

    println!("\n=== Amounts In Words ===");
    for amount in [12_345u64, 100_000, 1_000_000, 2_550_000, 10_000_000] {
        println!("{:>12} = {}", format_rupees(amount as f64), amount_in_words(amount));
    }
}
