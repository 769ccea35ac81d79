//! Mortgage Calculator - fixed-rate amortization engine
//!
//! This library provides:
//! - Level monthly payment derivation (annuity formula, interest-free branch)
//! - Full monthly schedules with interest/principal split and running totals
//! - Input validation and CSV/JSON loading of loan terms
//! - Summary, breakdown and yearly views over a schedule
//! - Rate/term what-if comparisons and parallel batch runs

pub mod error;
pub mod loan;
pub mod amortization;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::LoanError;
pub use loan::{LoanRequest, LoanTerms};
pub use amortization::{compute_amortization, Amortization, PeriodRecord};
pub use report::{LoanReport, LoanSummary, PaymentBreakdown, YearlyRow};
pub use scenario::ScenarioRunner;
