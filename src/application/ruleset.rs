//! Rule registry and the default borrower rule table.
//!
//! A [`RuleSet`] maps field names to their [`FieldRule`]s and dispatches
//! evaluation. Unknown fields pass silently: the client-side check is not
//! authoritative, so it fails open and leaves rejection to the server-side
//! collaborator.

use crate::domain::rule::{FieldRule, ValidationResult};
use ahash::AHashMap;
use chrono::{Datelike, Local, NaiveDate};

/// Registry of validation rules keyed by field name.
///
/// Built once at startup and read-only afterwards; safe to share across
/// concurrent evaluations without locking.
///
/// # Example
/// ```
/// use loan_intake::RuleSet;
///
/// let rules = RuleSet::borrower();
///
/// assert!(rules.evaluate("phone", "9876543210").is_valid());
/// assert!(!rules.evaluate("phone", "1234567890").is_valid());
///
/// // Unknown fields pass silently.
/// assert!(rules.evaluate("middle_name", "anything").is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: AHashMap<String, FieldRule>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self {
            rules: AHashMap::new(),
        }
    }

    /// Insert a rule for a field, replacing any existing rule.
    pub fn insert(&mut self, field: impl Into<String>, rule: FieldRule) {
        self.rules.insert(field.into(), rule);
    }

    /// Look up the rule for a field.
    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.rules.get(field)
    }

    /// The display label for a field, falling back to the field name.
    pub fn label<'a>(&'a self, field: &'a str) -> &'a str {
        self.rules.get(field).map(|r| r.label()).unwrap_or(field)
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the set has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over field names with rules.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(|k| k.as_str())
    }

    /// Evaluate a raw field value.
    ///
    /// Fields without a rule are always valid.
    pub fn evaluate(&self, field: &str, raw: &str) -> ValidationResult {
        match self.rules.get(field) {
            Some(rule) => rule.check(raw),
            None => ValidationResult::pass(),
        }
    }

    /// Evaluate with an optional requiredness override for the field.
    ///
    /// `None` keeps the rule's own required flag.
    pub fn evaluate_with_required(
        &self,
        field: &str,
        raw: &str,
        required: Option<bool>,
    ) -> ValidationResult {
        match self.rules.get(field) {
            Some(rule) => rule.check_with_required(raw, required.unwrap_or(rule.is_required())),
            None => ValidationResult::pass(),
        }
    }

    /// The default borrower-application rule table.
    ///
    /// One rule per form field, matching the intake form's constraints:
    /// names and cities are letters-only, phone is a 10-digit Indian mobile
    /// number, zip_code is a 6-digit PIN code, loan_amount is bounded to
    /// the product range.
    pub fn borrower() -> Self {
        let mut set = Self::new();

        set.insert(
            "first_name",
            build(
                FieldRule::builder(
                    "First Name",
                    "First name must contain only letters and be at least 2 characters",
                )
                .required()
                .min_length(2)
                .pattern(r"^[a-zA-Z\s]+$"),
            ),
        );

        set.insert(
            "last_name",
            build(
                FieldRule::builder(
                    "Last Name",
                    "Last name must contain only letters and be at least 2 characters",
                )
                .required()
                .min_length(2)
                .pattern(r"^[a-zA-Z\s]+$"),
            ),
        );

        set.insert(
            "email",
            build(
                FieldRule::builder("Email Address", "Please enter a valid email address")
                    .required()
                    .pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"),
            ),
        );

        set.insert(
            "phone",
            build(
                FieldRule::builder(
                    "Phone Number",
                    "Please enter a valid 10-digit mobile number starting with 6, 7, 8, or 9",
                )
                .required()
                .pattern(r"^[6-9]\d{9}$"),
            ),
        );

        set.insert(
            "date_of_birth",
            build(
                FieldRule::builder("Date of Birth", "You must be between 18 and 80 years old")
                    .required()
                    .custom(|value| {
                        let Ok(birth) = NaiveDate::parse_from_str(value, "%Y-%m-%d") else {
                            return false;
                        };
                        // Calendar-year difference, not an exact birthday check.
                        let age = Local::now().year() - birth.year();
                        (18..=80).contains(&age)
                    }),
            ),
        );

        set.insert(
            "address",
            build(
                FieldRule::builder(
                    "Address",
                    "Please enter a complete address (minimum 10 characters)",
                )
                .required()
                .min_length(10),
            ),
        );

        set.insert(
            "city",
            build(
                FieldRule::builder("City", "City name must contain only letters")
                    .required()
                    .min_length(2)
                    .pattern(r"^[a-zA-Z\s]+$"),
            ),
        );

        set.insert(
            "state",
            build(FieldRule::builder("State", "Please select your state").required()),
        );

        set.insert(
            "zip_code",
            build(
                FieldRule::builder("PIN Code", "Please enter a valid 6-digit PIN code")
                    .required()
                    .pattern(r"^\d{6}$"),
            ),
        );

        set.insert(
            "employment_status",
            build(
                FieldRule::builder("Employment Status", "Please select your employment status")
                    .required(),
            ),
        );

        set.insert(
            "annual_income",
            build(
                FieldRule::builder("Annual Income", "Annual income must be a positive number")
                    .min(0.0),
            ),
        );

        set.insert(
            "loan_amount",
            build(
                FieldRule::builder(
                    "Loan Amount",
                    "Loan amount must be between \u{20b9}10,000 and \u{20b9}1,00,00,000",
                )
                .required()
                .min(10_000.0)
                .max(10_000_000.0),
            ),
        );

        set.insert(
            "loan_purpose",
            build(
                FieldRule::builder("Loan Purpose", "Please select the purpose of your loan")
                    .required(),
            ),
        );

        set
    }
}

/// Build a rule from the static borrower table.
///
/// The table's patterns and bounds are fixed and known-valid.
fn build(builder: crate::domain::rule::FieldRuleBuilder) -> FieldRule {
    builder
        .build()
        .expect("static borrower rule table is valid")
}
