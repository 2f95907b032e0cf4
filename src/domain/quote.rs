//! EMI quoting for loan principals.
//!
//! Resolves a loan purpose to its interest-rate/tenure policy and derives an
//! EMI quote with the standard amortization formula. Quotes are exact real
//! numbers; rounding and currency formatting are the caller's concern.

/// Loan purposes with a dedicated rate/tenure policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoanPurpose {
    /// Home loan
    Home,
    /// Car loan
    Car,
    /// Personal loan
    Personal,
    /// Business loan
    Business,
    /// Education loan
    Education,
    /// Gold loan
    Gold,
}

impl LoanPurpose {
    /// Parse a purpose from its form value (e.g. `"home_loan"`).
    ///
    /// Returns `None` for unknown purposes; callers fall back to
    /// [`PurposePolicy::DEFAULT`] rather than failing.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "home_loan" => Some(LoanPurpose::Home),
            "car_loan" => Some(LoanPurpose::Car),
            "personal_loan" => Some(LoanPurpose::Personal),
            "business_loan" => Some(LoanPurpose::Business),
            "education_loan" => Some(LoanPurpose::Education),
            "gold_loan" => Some(LoanPurpose::Gold),
            _ => None,
        }
    }

    /// The form value for this purpose.
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanPurpose::Home => "home_loan",
            LoanPurpose::Car => "car_loan",
            LoanPurpose::Personal => "personal_loan",
            LoanPurpose::Business => "business_loan",
            LoanPurpose::Education => "education_loan",
            LoanPurpose::Gold => "gold_loan",
        }
    }

    /// The rate/tenure policy for this purpose.
    pub fn policy(&self) -> PurposePolicy {
        match self {
            LoanPurpose::Home => PurposePolicy::new(8.5, 240),
            LoanPurpose::Car => PurposePolicy::new(9.5, 60),
            LoanPurpose::Personal => PurposePolicy::new(12.5, 36),
            LoanPurpose::Business => PurposePolicy::new(11.0, 60),
            LoanPurpose::Education => PurposePolicy::new(10.0, 84),
            LoanPurpose::Gold => PurposePolicy::new(7.5, 12),
        }
    }
}

/// Annual interest rate and tenure applied to a loan purpose.
///
/// Static, read-only configuration; resolved once per quote.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PurposePolicy {
    /// Annual interest rate in percent (e.g. 8.5 for 8.5% p.a.)
    pub rate_percent: f64,
    /// Repayment duration in months
    pub tenure_months: u32,
}

impl PurposePolicy {
    /// Fallback policy for unknown loan purposes.
    pub const DEFAULT: PurposePolicy = PurposePolicy {
        rate_percent: 12.5,
        tenure_months: 36,
    };

    /// Create a policy from an annual rate and a tenure in months.
    pub const fn new(rate_percent: f64, tenure_months: u32) -> Self {
        Self {
            rate_percent,
            tenure_months,
        }
    }
}

/// An EMI quote derived from `(principal, purpose)`.
///
/// Value type with no identity; produced fresh per call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoanQuote {
    /// Equated monthly installment
    pub emi: f64,
    /// Annual interest rate in percent
    pub interest_rate: f64,
    /// One-time processing fee
    pub processing_fee: f64,
}

impl LoanQuote {
    /// The zero quote: sentinel for "no principal entered yet".
    pub const ZERO: LoanQuote = LoanQuote {
        emi: 0.0,
        interest_rate: 0.0,
        processing_fee: 0.0,
    };

    /// Check if this is the zero quote.
    pub fn is_zero(&self) -> bool {
        self.emi == 0.0 && self.interest_rate == 0.0 && self.processing_fee == 0.0
    }
}

/// Processing fee: flat 1.5% of principal, capped.
const FEE_RATE: f64 = 0.015;
const FEE_CAP: f64 = 50_000.0;

/// Quote a loan for a principal and a purpose form value.
///
/// A non-positive (or non-finite) principal yields [`LoanQuote::ZERO`],
/// a sentinel for "not yet entered" rather than a failure. Unknown purposes fall
/// back to [`PurposePolicy::DEFAULT`].
///
/// # Example
/// ```
/// use loan_intake::quote;
///
/// let q = quote(1_000_000.0, "home_loan");
/// assert_eq!(q.interest_rate, 8.5);
/// assert_eq!(q.processing_fee, 15_000.0);
/// assert!((q.emi - 8678.0).abs() < 1.0);
///
/// assert!(quote(0.0, "car_loan").is_zero());
/// ```
pub fn quote(principal: f64, purpose: &str) -> LoanQuote {
    let policy = LoanPurpose::parse(purpose)
        .map(|p| p.policy())
        .unwrap_or(PurposePolicy::DEFAULT);

    quote_with_policy(principal, policy)
}

/// Quote a loan under an explicit policy.
///
/// Applies the amortization formula `P * r * (1+r)^n / ((1+r)^n - 1)` with
/// the monthly rate `r = rate_percent / 12 / 100`. A zero rate degrades to
/// straight-line `P / n`, avoiding division by zero.
pub fn quote_with_policy(principal: f64, policy: PurposePolicy) -> LoanQuote {
    if !(principal > 0.0) {
        return LoanQuote::ZERO;
    }

    let monthly_rate = policy.rate_percent / 12.0 / 100.0;
    let tenure = policy.tenure_months as f64;

    let emi = if monthly_rate > 0.0 {
        let factor = (1.0 + monthly_rate).powf(tenure);
        principal * monthly_rate * factor / (factor - 1.0)
    } else {
        principal / tenure
    };

    let processing_fee = (principal * FEE_RATE).min(FEE_CAP);

    LoanQuote {
        emi,
        interest_rate: policy.rate_percent,
        processing_fee,
    }
}
