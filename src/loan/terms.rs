//! Loan terms and request structures

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::amortization::{self, Amortization};
use crate::error::{LoanError, Result};

/// Default loan amount for a new calculation
pub const DEFAULT_PRINCIPAL: f64 = 400_000.0;

/// Default annual rate in percent (6.5 = 6.5%)
pub const DEFAULT_ANNUAL_RATE_PERCENT: f64 = 6.5;

/// Default term in whole years
pub const DEFAULT_TERM_YEARS: u32 = 30;

/// Longest accepted term in whole years
pub const MAX_TERM_YEARS: u32 = 50;

/// Fixed-rate loan parameters
///
/// Build through [`LoanTerms::new`] to get boundary validation. The engine
/// itself accepts any values and evaluates them mechanically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed, in currency units
    pub principal: f64,

    /// Annual interest rate in percent
    pub annual_rate_percent: f64,

    /// Term in whole years
    pub term_years: u32,
}

impl LoanTerms {
    /// Create validated loan terms
    pub fn new(principal: f64, annual_rate_percent: f64, term_years: u32) -> Result<Self> {
        let terms = Self {
            principal,
            annual_rate_percent,
            term_years,
        };
        terms.validate()?;
        Ok(terms)
    }

    /// Reject terms the engine would evaluate into a meaningless schedule
    pub fn validate(&self) -> Result<()> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(LoanError::InvalidPrincipal(self.principal));
        }
        if !self.annual_rate_percent.is_finite() || self.annual_rate_percent < 0.0 {
            return Err(LoanError::InvalidRate(self.annual_rate_percent));
        }
        if self.term_years == 0 || self.term_years > MAX_TERM_YEARS {
            return Err(LoanError::InvalidTerm(self.term_years));
        }
        Ok(())
    }

    /// Monthly decimal rate
    pub fn periodic_rate(&self) -> f64 {
        amortization::periodic_rate(self.annual_rate_percent)
    }

    /// Number of monthly payments
    pub fn payment_count(&self) -> u32 {
        amortization::payment_count(self.term_years)
    }

    /// Run the amortization engine for these terms
    pub fn amortize(&self) -> Amortization {
        amortization::compute_amortization(
            self.principal,
            self.annual_rate_percent,
            self.term_years,
        )
    }
}

fn default_principal() -> f64 {
    DEFAULT_PRINCIPAL
}

fn default_annual_rate_percent() -> f64 {
    DEFAULT_ANNUAL_RATE_PERCENT
}

fn default_term_years() -> u32 {
    DEFAULT_TERM_YEARS
}

/// Loan parameters as supplied in a JSON request
///
/// Missing fields fall back to the defaults above. Convert into
/// [`LoanTerms`] with `try_into()` to validate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRequest {
    #[serde(default = "default_principal", alias = "loan_amount")]
    pub principal: f64,

    #[serde(default = "default_annual_rate_percent", alias = "interest_rate")]
    pub annual_rate_percent: f64,

    #[serde(default = "default_term_years", alias = "loan_term")]
    pub term_years: u32,
}

impl Default for LoanRequest {
    fn default() -> Self {
        Self {
            principal: DEFAULT_PRINCIPAL,
            annual_rate_percent: DEFAULT_ANNUAL_RATE_PERCENT,
            term_years: DEFAULT_TERM_YEARS,
        }
    }
}

impl LoanRequest {
    /// Parse a request from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a request from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

impl TryFrom<LoanRequest> for LoanTerms {
    type Error = LoanError;

    fn try_from(request: LoanRequest) -> Result<Self> {
        LoanTerms::new(request.principal, request.annual_rate_percent, request.term_years)
    }
}
