//! Display formatting helpers for rupee amounts.
//!
//! Groups digits in the en-IN convention: the last three digits, then
//! groups of two (1,00,00,000). Pure string transforms; quotes themselves
//! stay unrounded (see [`crate::domain::quote`]).

/// Group an integer amount with en-IN separators.
///
/// # Example
/// ```
/// use loan_intake::group_inr;
///
/// assert_eq!(group_inr(999), "999");
/// assert_eq!(group_inr(1_234), "1,234");
/// assert_eq!(group_inr(1_234_567), "12,34,567");
/// assert_eq!(group_inr(10_000_000), "1,00,00,000");
/// ```
pub fn group_inr(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);

    // Group the remaining digits in pairs, right to left.
    let mut groups = Vec::new();
    let bytes = head.as_bytes();
    let mut end = bytes.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    let mut result = groups.join(",");
    result.push(',');
    result.push_str(tail);
    result
}

/// Format a rupee amount for display: rounded, grouped, with the sign.
///
/// Mirrors the presentation used by the form's calculator panel. Negative
/// and non-finite amounts render as zero; the core never produces them.
///
/// # Example
/// ```
/// use loan_intake::format_rupees;
///
/// assert_eq!(format_rupees(8678.23), "\u{20b9}8,678");
/// assert_eq!(format_rupees(15_000.0), "\u{20b9}15,000");
/// ```
pub fn format_rupees(amount: f64) -> String {
    let rounded = if amount.is_finite() && amount > 0.0 {
        amount.round() as u64
    } else {
        0
    };
    format!("\u{20b9}{}", group_inr(rounded))
}
