//! Derived views over an amortization result
//!
//! Headline summary, principal/interest breakdown, a yearly-sampled time
//! series and the per-year table. All values are raw numbers; currency
//! formatting is left to the presentation layer.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::amortization::{Amortization, PeriodRecord, MONTHS_PER_YEAR};
use crate::error::Result;
use crate::loan::LoanTerms;

/// Headline figures for a loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_years: u32,
    pub payment_count: u32,
    pub monthly_payment: f64,
    /// monthly_payment * payment_count
    pub total_paid: f64,
    /// total_paid - principal
    pub total_interest: f64,
}

impl LoanSummary {
    pub fn from_amortization(terms: &LoanTerms, amortization: &Amortization) -> Self {
        let payment_count = amortization.payment_count();
        let total_paid = amortization.payment_amount * payment_count as f64;

        Self {
            principal: terms.principal,
            annual_rate_percent: terms.annual_rate_percent,
            term_years: terms.term_years,
            payment_count,
            monthly_payment: amortization.payment_amount,
            total_paid,
            total_interest: total_paid - terms.principal,
        }
    }

    pub fn breakdown(&self) -> PaymentBreakdown {
        PaymentBreakdown::new(self.principal, self.total_interest)
    }
}

/// Two-way split of total cost into principal and interest
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    pub principal: f64,
    pub interest: f64,
    /// Share of total cost that is principal, in [0, 1]
    pub principal_share: f64,
    /// Share of total cost that is interest, in [0, 1]
    pub interest_share: f64,
}

impl PaymentBreakdown {
    pub fn new(principal: f64, interest: f64) -> Self {
        let total = principal + interest;
        let (principal_share, interest_share) = if total > 0.0 {
            (principal / total, interest / total)
        } else {
            (0.0, 0.0)
        };

        Self {
            principal,
            interest,
            principal_share,
            interest_share,
        }
    }
}

/// Time series sampled at the first payment and every year-end
pub fn chart_series(schedule: &[PeriodRecord]) -> Vec<PeriodRecord> {
    schedule
        .iter()
        .filter(|r| r.period_index == 1 || r.closes_year())
        .copied()
        .collect()
}

/// One row per completed loan year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyRow {
    pub year: u32,
    pub cumulative_principal: f64,
    pub cumulative_interest: f64,
    pub remaining_balance: f64,
}

/// Cumulative totals and balance at each year-end
pub fn yearly_rows(schedule: &[PeriodRecord]) -> Vec<YearlyRow> {
    schedule
        .iter()
        .filter(|r| r.closes_year())
        .map(|r| YearlyRow {
            year: r.period_index / MONTHS_PER_YEAR,
            cumulative_principal: r.cumulative_principal,
            cumulative_interest: r.cumulative_interest,
            remaining_balance: r.remaining_balance,
        })
        .collect()
}

/// Summary plus yearly table, as returned by the JSON surfaces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanReport {
    pub summary: LoanSummary,
    pub breakdown: PaymentBreakdown,
    pub yearly: Vec<YearlyRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<PeriodRecord>>,
}

impl LoanReport {
    pub fn build(terms: &LoanTerms, amortization: &Amortization, include_schedule: bool) -> Self {
        let summary = LoanSummary::from_amortization(terms, amortization);
        let breakdown = summary.breakdown();

        Self {
            summary,
            breakdown,
            yearly: yearly_rows(&amortization.schedule),
            schedule: include_schedule.then(|| amortization.schedule.clone()),
        }
    }
}

/// Write monthly rows as CSV, one line per period with a header row
pub fn write_schedule_csv<W: Write>(writer: W, schedule: &[PeriodRecord]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in schedule {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write loan summaries as CSV, one line per loan with a header row
pub fn write_summaries_csv<W: Write>(writer: W, summaries: &[LoanSummary]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for summary in summaries {
        csv_writer.serialize(summary)?;
    }
    csv_writer.flush()?;
    Ok(())
}
