//! Integer-to-words rendering in the Indian numbering system.
//!
//! Magnitude words are Thousand (10^3), Lakh (10^5) and Crore (10^7), but
//! the amount is consumed in groups of 1000 at every level. True Indian
//! numbering groups digits 3-2-2, so e.g. 100,000 renders here as "One
//! Hundred Thousand" rather than "One Lakh". This is a known deviation and
//! is kept deliberately: the rendered strings are part of the form's
//! established display output and must not change.

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const MAGNITUDES: [&str; 4] = ["", "Thousand", "Lakh", "Crore"];

/// Render a three-digit group (0..=999) with a trailing space.
fn hundreds(mut n: u64) -> String {
    let mut result = String::new();

    if n >= 100 {
        result.push_str(ONES[(n / 100) as usize]);
        result.push_str(" Hundred ");
        n %= 100;
    }

    if n >= 20 {
        result.push_str(TENS[(n / 10) as usize]);
        result.push(' ');
        n %= 10;
    } else if n >= 10 {
        result.push_str(TEENS[(n - 10) as usize]);
        result.push(' ');
        return result;
    }

    if n > 0 {
        result.push_str(ONES[n as usize]);
        result.push(' ');
    }

    result
}

/// Render a non-negative amount as words.
///
/// Zero groups are skipped entirely (no "Zero Thousand"); the result is
/// trimmed of surrounding whitespace. Groups above the crore magnitude are
/// unreachable for loan amounts and render without a magnitude word.
///
/// # Example
/// ```
/// use loan_intake::amount_in_words;
///
/// assert_eq!(amount_in_words(0), "Zero");
/// assert_eq!(amount_in_words(1_000), "One Thousand");
/// assert_eq!(amount_in_words(100_000), "One Hundred Thousand");
/// assert_eq!(amount_in_words(10_000_000), "Ten Lakh");
/// ```
pub fn amount_in_words(mut n: u64) -> String {
    if n == 0 {
        return "Zero".to_string();
    }

    let mut result = String::new();
    let mut group = 0;

    while n > 0 {
        if n % 1000 != 0 {
            let magnitude = MAGNITUDES.get(group).copied().unwrap_or("");
            result = format!("{}{} {}", hundreds(n % 1000), magnitude, result);
        }
        n /= 1000;
        group += 1;
    }

    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(amount_in_words(0), "Zero");
    }

    #[test]
    fn test_single_digits() {
        assert_eq!(amount_in_words(1), "One");
        assert_eq!(amount_in_words(9), "Nine");
    }

    #[test]
    fn test_teens() {
        assert_eq!(amount_in_words(10), "Ten");
        assert_eq!(amount_in_words(13), "Thirteen");
        assert_eq!(amount_in_words(19), "Nineteen");
    }

    #[test]
    fn test_tens_and_ones() {
        assert_eq!(amount_in_words(20), "Twenty");
        assert_eq!(amount_in_words(42), "Forty Two");
        assert_eq!(amount_in_words(99), "Ninety Nine");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(amount_in_words(100), "One Hundred");
        assert_eq!(amount_in_words(118), "One Hundred Eighteen");
        assert_eq!(amount_in_words(999), "Nine Hundred Ninety Nine");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(amount_in_words(1_000), "One Thousand");
        assert_eq!(amount_in_words(10_000), "Ten Thousand");
        assert_eq!(amount_in_words(12_345), "Twelve Thousand Three Hundred Forty Five");
    }

    #[test]
    fn test_grouping_by_thousand_quirk() {
        // The amount is consumed in groups of 1000 at every level, so
        // 100,000 is "One Hundred Thousand" and not "One Lakh".
        assert_eq!(amount_in_words(100_000), "One Hundred Thousand");
        assert_eq!(amount_in_words(250_000), "Two Hundred Fifty Thousand");

        // The Lakh word appears only once the thousand group rolls over.
        assert_eq!(amount_in_words(1_000_000), "One Lakh");
        assert_eq!(amount_in_words(2_500_000), "Two Lakh Five Hundred Thousand");
    }

    #[test]
    fn test_crore_group() {
        // Each group is a plain multiplier of 1000^i, so the maximum loan
        // amount of 1 crore lands in the Lakh group with multiplier 10.
        assert_eq!(amount_in_words(10_000_000), "Ten Lakh");
        assert_eq!(amount_in_words(1_000_000_000), "One Crore");
    }

    #[test]
    fn test_zero_groups_are_skipped() {
        assert_eq!(amount_in_words(1_000_023), "One Lakh Twenty Three");
        assert_eq!(amount_in_words(5_000_000), "Five Lakh");
    }

    #[test]
    fn test_no_surrounding_whitespace() {
        for n in [1, 20, 100, 1_000, 100_000, 12_345_678] {
            let words = amount_in_words(n);
            assert_eq!(words, words.trim());
            assert!(!words.contains("  "), "double space in {:?}", words);
        }
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(amount_in_words(987_654), amount_in_words(987_654));
    }
}
