//! Scenario runner for what-if comparisons and batch amortization
//!
//! Holds a base set of loan terms and reruns the engine with one parameter
//! varied, or amortizes whole batches of independent loans.

use log::warn;
use rayon::prelude::*;

use crate::amortization::Amortization;
use crate::error::Result;
use crate::loan::{LoanTerms, DEFAULT_ANNUAL_RATE_PERCENT, DEFAULT_PRINCIPAL, DEFAULT_TERM_YEARS};
use crate::report::LoanSummary;

/// Scenario runner built around a base loan
///
/// # Example
/// ```
/// use mortgage_calculator::{LoanTerms, ScenarioRunner};
///
/// let runner = ScenarioRunner::new(LoanTerms::new(400_000.0, 6.5, 30).unwrap());
/// let summaries = runner.rate_sensitivity(&[5.5, 6.0, 6.5, 7.0]);
/// assert_eq!(summaries.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_terms: LoanTerms,
}

impl ScenarioRunner {
    pub fn new(base_terms: LoanTerms) -> Self {
        Self { base_terms }
    }

    /// Amortize the base loan
    pub fn run(&self) -> Amortization {
        self.base_terms.amortize()
    }

    /// Base loan with a different annual rate
    pub fn with_rate(&self, annual_rate_percent: f64) -> Result<LoanTerms> {
        LoanTerms::new(self.base_terms.principal, annual_rate_percent, self.base_terms.term_years)
    }

    /// Base loan with a different term
    pub fn with_term(&self, term_years: u32) -> Result<LoanTerms> {
        LoanTerms::new(self.base_terms.principal, self.base_terms.annual_rate_percent, term_years)
    }

    /// Summaries for each candidate rate, skipping rates that fail validation
    pub fn rate_sensitivity(&self, rates: &[f64]) -> Vec<LoanSummary> {
        rates
            .iter()
            .filter_map(|&rate| match self.with_rate(rate) {
                Ok(terms) => Some(summarize(&terms)),
                Err(e) => {
                    warn!("skipping rate scenario: {}", e);
                    None
                }
            })
            .collect()
    }

    /// Summaries for each candidate term, skipping terms that fail validation
    pub fn term_comparison(&self, terms: &[u32]) -> Vec<LoanSummary> {
        terms
            .iter()
            .filter_map(|&years| match self.with_term(years) {
                Ok(terms) => Some(summarize(&terms)),
                Err(e) => {
                    warn!("skipping term scenario: {}", e);
                    None
                }
            })
            .collect()
    }

    /// Amortize many loans in order
    pub fn run_batch(loans: &[LoanTerms]) -> Vec<Amortization> {
        loans.iter().map(LoanTerms::amortize).collect()
    }

    /// Amortize many loans across the rayon pool, preserving input order
    pub fn run_batch_parallel(loans: &[LoanTerms]) -> Vec<Amortization> {
        loans.par_iter().map(LoanTerms::amortize).collect()
    }

    pub fn base_terms(&self) -> &LoanTerms {
        &self.base_terms
    }

    /// Mutable access to the base loan
    ///
    /// Edits here skip validation; call [`LoanTerms::validate`] on
    /// [`Self::base_terms`] before running.
    pub fn base_terms_mut(&mut self) -> &mut LoanTerms {
        &mut self.base_terms
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(LoanTerms {
            principal: DEFAULT_PRINCIPAL,
            annual_rate_percent: DEFAULT_ANNUAL_RATE_PERCENT,
            term_years: DEFAULT_TERM_YEARS,
        })
    }
}

fn summarize(terms: &LoanTerms) -> LoanSummary {
    LoanSummary::from_amortization(terms, &terms.amortize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_sensitivity_orders_payments() {
        let runner = ScenarioRunner::default();
        let summaries = runner.rate_sensitivity(&[0.0, 3.0, 6.5, 9.0]);

        assert_eq!(summaries.len(), 4);
        for pair in summaries.windows(2) {
            assert!(pair[1].monthly_payment > pair[0].monthly_payment);
            assert!(pair[1].total_interest > pair[0].total_interest);
        }
        assert!((summaries[2].monthly_payment - 2528.27).abs() < 0.01);
    }

    #[test]
    fn test_invalid_scenarios_skipped() {
        let runner = ScenarioRunner::default();
        assert_eq!(runner.rate_sensitivity(&[-1.0, 5.0]).len(), 1);
        assert_eq!(runner.term_comparison(&[0, 10, 15, 20, 30]).len(), 4);
    }

    #[test]
    fn test_shorter_term_costs_less_interest() {
        let runner = ScenarioRunner::default();
        let summaries = runner.term_comparison(&[10, 15, 20, 30]);

        for pair in summaries.windows(2) {
            assert!(pair[1].monthly_payment < pair[0].monthly_payment);
            assert!(pair[1].total_interest > pair[0].total_interest);
        }
    }

    #[test]
    fn test_parallel_batch_matches_sequential() {
        let loans: Vec<LoanTerms> = (1..=40)
            .map(|i| LoanTerms::new(50_000.0 * i as f64, 0.25 * i as f64, 10 + i % 21).unwrap())
            .collect();

        let sequential = ScenarioRunner::run_batch(&loans);
        let parallel = ScenarioRunner::run_batch_parallel(&loans);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_base_terms_mut() {
        let mut runner = ScenarioRunner::default();
        runner.base_terms_mut().term_years = 15;
        assert_eq!(runner.run().schedule.len(), 180);
    }

    #[test]
    fn test_base_terms_mut_edits_need_revalidation() {
        let mut runner = ScenarioRunner::default();
        runner.base_terms_mut().term_years = 0;
        assert!(matches!(
            runner.base_terms().validate(),
            Err(crate::LoanError::InvalidTerm(0))
        ));
    }
}
