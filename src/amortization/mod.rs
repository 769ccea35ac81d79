//! Amortization engine for fixed-rate monthly loans

mod state;
mod engine;
mod schedule;

pub use state::AmortizationState;
pub use engine::{
    compute_amortization, level_payment, payment_count, periodic_rate, MONTHS_PER_YEAR,
};
pub use schedule::{Amortization, PeriodRecord};
