//! Field validation rules and verdicts.
//!
//! A [`FieldRule`] describes the declarative constraints for one logical form
//! field. Rules are immutable once built; evaluation is a pure function from
//! raw input text to a [`ValidationResult`].

use regex::Regex;
use std::sync::Arc;

/// Custom validation predicate stored per rule.
///
/// Receives the trimmed field value and returns whether it is acceptable.
pub type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Verdict produced by evaluating a field value against a rule.
///
/// Produced fresh per evaluation; carries no shared state.
///
/// # Example
/// ```
/// use loan_intake::ValidationResult;
///
/// let ok = ValidationResult::pass();
/// assert!(ok.is_valid());
/// assert_eq!(ok.message, None);
///
/// let bad = ValidationResult::fail("Please enter a valid PIN code");
/// assert!(!bad.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationResult {
    /// Whether the value passed every check.
    pub valid: bool,
    /// Human-readable failure message, present only when invalid.
    pub message: Option<String>,
}

impl ValidationResult {
    /// A passing verdict.
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// A failing verdict with a human-readable message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    /// Check if this verdict is a pass.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Error returned when building a [`FieldRule`] fails.
#[derive(Debug)]
pub enum RuleError {
    /// The pattern string is not a valid regular expression.
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// The underlying regex error
        source: regex::Error,
    },
    /// `min` is greater than `max`.
    InvertedBounds {
        /// Lower numeric bound
        min: f64,
        /// Upper numeric bound
        max: f64,
    },
    /// A minimum length of zero never constrains anything.
    ZeroMinLength,
}

impl std::fmt::Display for RuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleError::InvalidPattern { pattern, source } => {
                write!(f, "invalid pattern {:?}: {}", pattern, source)
            }
            RuleError::InvertedBounds { min, max } => {
                write!(f, "min bound {} is greater than max bound {}", min, max)
            }
            RuleError::ZeroMinLength => {
                write!(f, "min_length must be greater than 0")
            }
        }
    }
}

impl std::error::Error for RuleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RuleError::InvalidPattern { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Declarative validation rule for one logical form field.
///
/// Checks run in a fixed order and the first failure wins:
/// required, empty-optional short-circuit, pattern, minimum length,
/// numeric lower bound, numeric upper bound, custom predicate.
///
/// # Example
/// ```
/// use loan_intake::FieldRule;
///
/// let rule = FieldRule::builder("PIN Code", "Please enter a valid 6-digit PIN code")
///     .required()
///     .pattern(r"^\d{6}$")
///     .build()
///     .unwrap();
///
/// assert!(rule.check("560001").is_valid());
/// assert!(!rule.check("5600").is_valid());
/// assert!(!rule.check("").is_valid());
/// ```
#[derive(Clone)]
pub struct FieldRule {
    required: bool,
    min_length: Option<usize>,
    pattern: Option<Regex>,
    min: Option<f64>,
    max: Option<f64>,
    custom: Option<Predicate>,
    message: String,
    label: String,
}

impl FieldRule {
    /// Start building a rule with a display label and a failure message.
    ///
    /// The label is used for the composed "is required" message; the failure
    /// message is used for every other check.
    pub fn builder(label: impl Into<String>, message: impl Into<String>) -> FieldRuleBuilder {
        FieldRuleBuilder {
            required: false,
            min_length: None,
            pattern: None,
            min: None,
            max: None,
            custom: None,
            message: message.into(),
            label: label.into(),
        }
    }

    /// Whether this rule requires a non-empty value.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The display label for this field.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The failure message for non-required checks.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Evaluate a raw value against this rule.
    ///
    /// The value is trimmed of leading/trailing whitespace before any check.
    /// Never panics: unparseable numeric input for a bounded field is a
    /// validation failure, not an error.
    pub fn check(&self, raw: &str) -> ValidationResult {
        self.check_with_required(raw, self.required)
    }

    /// Evaluate with the required flag overridden.
    ///
    /// Used by form-level logic that relaxes or tightens requiredness at
    /// runtime (e.g. income becomes optional for students) without mutating
    /// the shared rule table.
    pub fn check_with_required(&self, raw: &str, required: bool) -> ValidationResult {
        let value = raw.trim();

        if required && value.is_empty() {
            return ValidationResult::fail(format!("{} is required", self.label));
        }

        // Empty optional values skip every remaining check.
        if value.is_empty() {
            return ValidationResult::pass();
        }

        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(value) {
                return ValidationResult::fail(&self.message);
            }
        }

        if let Some(min_length) = self.min_length {
            if value.chars().count() < min_length {
                return ValidationResult::fail(&self.message);
            }
        }

        if let Some(min) = self.min {
            // Parse failure counts as below the minimum.
            match value.parse::<f64>() {
                Ok(n) if n >= min => {}
                _ => return ValidationResult::fail(&self.message),
            }
        }

        if let Some(max) = self.max {
            if let Ok(n) = value.parse::<f64>() {
                if n > max {
                    return ValidationResult::fail(&self.message);
                }
            }
        }

        if let Some(custom) = &self.custom {
            if !custom(value) {
                return ValidationResult::fail(&self.message);
            }
        }

        ValidationResult::pass()
    }
}

impl std::fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule")
            .field("required", &self.required)
            .field("min_length", &self.min_length)
            .field("pattern", &self.pattern.as_ref().map(|p| p.as_str()))
            .field("min", &self.min)
            .field("max", &self.max)
            .field("custom", &self.custom.as_ref().map(|_| "<fn>"))
            .field("message", &self.message)
            .field("label", &self.label)
            .finish()
    }
}

/// Builder for constructing a [`FieldRule`].
pub struct FieldRuleBuilder {
    required: bool,
    min_length: Option<usize>,
    pattern: Option<String>,
    min: Option<f64>,
    max: Option<f64>,
    custom: Option<Predicate>,
    message: String,
    label: String,
}

impl FieldRuleBuilder {
    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the minimum value length in characters.
    ///
    /// Validated when `build()` is called; zero is rejected.
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Set a regular expression the trimmed value must match.
    ///
    /// Compiled when `build()` is called.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set the numeric lower bound (inclusive).
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the numeric upper bound (inclusive).
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Attach a custom predicate checked after every built-in rule.
    pub fn custom<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(predicate));
        self
    }

    /// Build the rule, compiling the pattern and validating bounds.
    pub fn build(self) -> Result<FieldRule, RuleError> {
        if self.min_length == Some(0) {
            return Err(RuleError::ZeroMinLength);
        }

        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(RuleError::InvertedBounds { min, max });
            }
        }

        let pattern = match self.pattern {
            Some(p) => Some(Regex::new(&p).map_err(|source| RuleError::InvalidPattern {
                pattern: p,
                source,
            })?),
            None => None,
        };

        Ok(FieldRule {
            required: self.required,
            min_length: self.min_length,
            pattern,
            min: self.min,
            max: self.max,
            custom: self.custom,
            message: self.message,
            label: self.label,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone_rule() -> FieldRule {
        FieldRule::builder(
            "Phone Number",
            "Please enter a valid 10-digit mobile number starting with 6, 7, 8, or 9",
        )
        .required()
        .pattern(r"^[6-9]\d{9}$")
        .build()
        .unwrap()
    }

    #[test]
    fn test_required_rejects_empty() {
        let rule = phone_rule();
        let verdict = rule.check("");
        assert!(!verdict.is_valid());
        assert_eq!(verdict.message.as_deref(), Some("Phone Number is required"));
    }

    #[test]
    fn test_required_rejects_whitespace_only() {
        let rule = phone_rule();
        assert!(!rule.check("   ").is_valid());
    }

    #[test]
    fn test_optional_empty_short_circuits() {
        // Pattern would reject "", but empty optional values skip all checks.
        let rule = FieldRule::builder("Annual Income", "Annual income must be a positive number")
            .min(0.0)
            .build()
            .unwrap();

        assert!(rule.check("").is_valid());
        assert!(rule.check("   ").is_valid());
    }

    #[test]
    fn test_pattern_mismatch() {
        let rule = phone_rule();
        assert!(rule.check("9876543210").is_valid());
        assert!(!rule.check("1234567890").is_valid());
        assert_eq!(
            rule.check("1234567890").message.as_deref(),
            Some("Please enter a valid 10-digit mobile number starting with 6, 7, 8, or 9")
        );
    }

    #[test]
    fn test_value_is_trimmed_before_checks() {
        let rule = phone_rule();
        assert!(rule.check("  9876543210  ").is_valid());
    }

    #[test]
    fn test_min_length() {
        let rule = FieldRule::builder("Address", "Please enter a complete address")
            .required()
            .min_length(10)
            .build()
            .unwrap();

        assert!(!rule.check("short").is_valid());
        assert!(rule.check("221B Baker Street").is_valid());
    }

    #[test]
    fn test_pattern_checked_before_min_length() {
        let rule = FieldRule::builder("City", "City name must contain only letters")
            .required()
            .min_length(2)
            .pattern(r"^[a-zA-Z\s]+$")
            .build()
            .unwrap();

        // "4" fails both pattern and length; the pattern message fires first
        // and both share the rule message, so verify via a digit-free input.
        assert!(!rule.check("42").is_valid());
        assert!(!rule.check("a").is_valid());
        assert!(rule.check("Pune").is_valid());
    }

    #[test]
    fn test_numeric_bounds() {
        let rule = FieldRule::builder(
            "Loan Amount",
            "Loan amount must be between \u{20b9}10,000 and \u{20b9}1,00,00,000",
        )
        .required()
        .min(10_000.0)
        .max(10_000_000.0)
        .build()
        .unwrap();

        assert!(!rule.check("9999").is_valid());
        assert!(rule.check("10000").is_valid());
        assert!(rule.check("10000000").is_valid());
        assert!(!rule.check("10000001").is_valid());
    }

    #[test]
    fn test_unparseable_number_fails_min() {
        let rule = FieldRule::builder("Annual Income", "Annual income must be a positive number")
            .min(0.0)
            .build()
            .unwrap();

        assert!(!rule.check("abc").is_valid());
        assert!(rule.check("0").is_valid());
        assert!(rule.check("450000.50").is_valid());
    }

    #[test]
    fn test_unparseable_number_passes_max_only_rule() {
        // Only the lower bound treats a parse failure as a violation.
        let rule = FieldRule::builder("Ceiling", "Too large")
            .max(100.0)
            .build()
            .unwrap();

        assert!(rule.check("not a number").is_valid());
        assert!(!rule.check("101").is_valid());
    }

    #[test]
    fn test_custom_predicate() {
        let rule = FieldRule::builder("Even", "Value must be even")
            .required()
            .custom(|v| v.parse::<i64>().map(|n| n % 2 == 0).unwrap_or(false))
            .build()
            .unwrap();

        assert!(rule.check("4").is_valid());
        assert!(!rule.check("3").is_valid());
        assert!(!rule.check("x").is_valid());
    }

    #[test]
    fn test_custom_runs_last() {
        let rule = FieldRule::builder("Code", "Bad code")
            .required()
            .pattern(r"^\d+$")
            .custom(|_| false)
            .build()
            .unwrap();

        // Pattern failure and predicate failure share the message, but the
        // predicate is only consulted for pattern-clean input.
        assert!(!rule.check("abc").is_valid());
        assert!(!rule.check("123").is_valid());
    }

    #[test]
    fn test_required_override() {
        let rule = FieldRule::builder("Annual Income", "Annual income must be a positive number")
            .min(0.0)
            .build()
            .unwrap();

        assert!(rule.check("").is_valid());
        assert!(!rule.check_with_required("", true).is_valid());
        assert!(rule.check_with_required("50000", true).is_valid());
    }

    #[test]
    fn test_idempotent_evaluation() {
        let rule = phone_rule();
        assert_eq!(rule.check("9876543210"), rule.check("9876543210"));
        assert_eq!(rule.check("bogus"), rule.check("bogus"));
    }

    #[test]
    fn test_builder_rejects_invalid_pattern() {
        let err = FieldRule::builder("Broken", "msg")
            .pattern(r"([unclosed")
            .build()
            .unwrap_err();

        assert!(matches!(err, RuleError::InvalidPattern { .. }));
        assert!(err.to_string().contains("invalid pattern"));
    }

    #[test]
    fn test_builder_rejects_inverted_bounds() {
        let err = FieldRule::builder("Bounds", "msg")
            .min(100.0)
            .max(10.0)
            .build()
            .unwrap_err();

        match err {
            RuleError::InvertedBounds { min, max } => {
                assert_eq!(min, 100.0);
                assert_eq!(max, 10.0);
            }
            other => panic!("expected InvertedBounds, got {:?}", other),
        }
    }

    #[test]
    fn test_builder_rejects_zero_min_length() {
        let err = FieldRule::builder("Len", "msg")
            .min_length(0)
            .build()
            .unwrap_err();

        assert!(matches!(err, RuleError::ZeroMinLength));
    }

    #[test]
    fn test_debug_hides_predicate() {
        let rule = FieldRule::builder("X", "msg").custom(|_| true).build().unwrap();
        let debug = format!("{:?}", rule);
        assert!(debug.contains("<fn>"));
    }
}
