//! Loan input terms, request parsing, and CSV loading

mod terms;
pub mod loader;

pub use terms::{
    LoanRequest, LoanTerms, DEFAULT_ANNUAL_RATE_PERCENT, DEFAULT_PRINCIPAL, DEFAULT_TERM_YEARS,
    MAX_TERM_YEARS,
};
pub use loader::{load_loans, load_loans_from_reader};
