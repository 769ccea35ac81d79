//! Core amortization engine for fixed-rate, fully-amortizing monthly loans

use log::debug;

use super::schedule::{Amortization, PeriodRecord};
use super::state::AmortizationState;

/// Monthly payments per loan year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Convert an annual percentage (6.5 meaning 6.5%) to a monthly decimal rate
pub fn periodic_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / MONTHS_PER_YEAR as f64
}

/// Number of monthly payments over the term
pub fn payment_count(term_years: u32) -> u32 {
    term_years.saturating_mul(MONTHS_PER_YEAR)
}

/// Level payment that retires `principal` in `payment_count` equal payments
///
/// A zero rate is straight-line repayment. Otherwise the annuity formula:
/// `P * r * (1+r)^n / ((1+r)^n - 1)`.
pub fn level_payment(principal: f64, periodic_rate: f64, payment_count: u32) -> f64 {
    let n = payment_count as f64;

    if periodic_rate == 0.0 {
        return principal / n;
    }

    let growth = (1.0 + periodic_rate).powf(n);
    principal * periodic_rate * growth / (growth - 1.0)
}

/// Compute the level payment and full monthly schedule for a loan
///
/// Total over its numeric inputs: nothing here validates or fails. Callers
/// reject non-positive principal or term and negative rates beforehand
/// (see [`crate::loan::LoanTerms::new`]). A zero term yields an empty
/// schedule.
pub fn compute_amortization(
    principal: f64,
    annual_rate_percent: f64,
    term_years: u32,
) -> Amortization {
    let rate = periodic_rate(annual_rate_percent);
    let count = payment_count(term_years);
    let payment_amount = level_payment(principal, rate, count);

    debug!(
        "amortizing {:.2} at {}% over {} payments: level payment {:.6}",
        principal, annual_rate_percent, count, payment_amount
    );

    let mut state = AmortizationState::from_principal(principal);
    let schedule: Vec<PeriodRecord> = (0..count)
        .map(|_| state.apply_payment(payment_amount, rate))
        .collect();

    Amortization {
        payment_amount,
        schedule,
    }
}
