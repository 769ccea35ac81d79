//! Schedule output structures for amortization runs

use serde::{Deserialize, Serialize};

use super::engine::MONTHS_PER_YEAR;

/// A single row of the repayment schedule for one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodRecord {
    /// Payment number (1-indexed)
    pub period_index: u32,

    /// Level payment, identical on every row
    pub payment_amount: f64,

    // Split of this period's payment
    pub interest_portion: f64,
    pub principal_portion: f64,

    /// Balance after this period's payment, never below zero
    pub remaining_balance: f64,

    // Running totals through this period
    pub cumulative_principal: f64,
    pub cumulative_interest: f64,
}

impl PeriodRecord {
    /// Loan year this payment falls in (months 1-12 are year 1)
    pub fn year(&self) -> u32 {
        self.period_index.div_ceil(MONTHS_PER_YEAR)
    }

    /// True for the last payment of a loan year
    pub fn closes_year(&self) -> bool {
        self.period_index % MONTHS_PER_YEAR == 0
    }
}

/// Complete amortization result: the level payment and its schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amortization {
    /// Constant monthly payment
    pub payment_amount: f64,

    /// Monthly rows in ascending period order
    pub schedule: Vec<PeriodRecord>,
}

impl Amortization {
    /// Number of payments in the schedule
    pub fn payment_count(&self) -> u32 {
        self.schedule.len() as u32
    }

    /// Look up a row by its 1-indexed period
    pub fn record(&self, period_index: u32) -> Option<&PeriodRecord> {
        let idx = (period_index as usize).checked_sub(1)?;
        self.schedule.get(idx)
    }

    pub fn final_record(&self) -> Option<&PeriodRecord> {
        self.schedule.last()
    }

    /// Sum of all payments over the life of the loan
    pub fn total_paid(&self) -> f64 {
        self.payment_amount * self.schedule.len() as f64
    }

    /// Interest accumulated through the final period
    pub fn total_interest(&self) -> f64 {
        self.final_record().map(|r| r.cumulative_interest).unwrap_or(0.0)
    }

    /// Principal retired through the final period
    pub fn total_principal(&self) -> f64 {
        self.final_record().map(|r| r.cumulative_principal).unwrap_or(0.0)
    }

    /// Balance left after the final period
    pub fn final_balance(&self) -> f64 {
        self.final_record().map(|r| r.remaining_balance).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(period_index: u32) -> PeriodRecord {
        PeriodRecord {
            period_index,
            payment_amount: 100.0,
            interest_portion: 10.0,
            principal_portion: 90.0,
            remaining_balance: 0.0,
            cumulative_principal: 90.0 * period_index as f64,
            cumulative_interest: 10.0 * period_index as f64,
        }
    }

    #[test]
    fn test_year_boundaries() {
        assert_eq!(row(1).year(), 1);
        assert_eq!(row(12).year(), 1);
        assert_eq!(row(13).year(), 2);
        assert!(row(24).closes_year());
        assert!(!row(25).closes_year());
    }

    #[test]
    fn test_record_lookup_is_one_indexed() {
        let result = Amortization {
            payment_amount: 100.0,
            schedule: (1..=3).map(row).collect(),
        };

        assert!(result.record(0).is_none());
        assert_eq!(result.record(1).map(|r| r.period_index), Some(1));
        assert_eq!(result.record(3).map(|r| r.period_index), Some(3));
        assert!(result.record(4).is_none());
        assert_eq!(result.total_paid(), 300.0);
        assert_eq!(result.total_interest(), 30.0);
    }

    #[test]
    fn test_empty_schedule_totals() {
        let result = Amortization { payment_amount: 0.0, schedule: Vec::new() };
        assert_eq!(result.payment_count(), 0);
        assert!(result.final_record().is_none());
        assert_eq!(result.total_interest(), 0.0);
        assert_eq!(result.final_balance(), 0.0);
    }
}
