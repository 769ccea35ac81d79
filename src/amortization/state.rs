//! Running balance state for a single loan

use super::schedule::PeriodRecord;

/// State of the loan between payments
#[derive(Debug, Clone)]
pub struct AmortizationState {
    /// Last period applied (0 before the first payment)
    pub period_index: u32,

    /// Outstanding balance carried into the next period
    pub balance: f64,

    /// Principal retired so far
    pub cumulative_principal: f64,

    /// Interest charged so far
    pub cumulative_interest: f64,
}

impl AmortizationState {
    /// Initialize state at origination
    pub fn from_principal(principal: f64) -> Self {
        Self {
            period_index: 0,
            balance: principal,
            cumulative_principal: 0.0,
            cumulative_interest: 0.0,
        }
    }

    /// Apply one level payment and advance to the next period
    ///
    /// Interest accrues on the balance carried into the period. The carried
    /// balance is floored at zero, which absorbs rounding drift on the final
    /// payment.
    pub fn apply_payment(&mut self, payment_amount: f64, periodic_rate: f64) -> PeriodRecord {
        self.period_index += 1;

        let interest_portion = self.balance * periodic_rate;
        let principal_portion = payment_amount - interest_portion;

        self.balance = (self.balance - principal_portion).max(0.0);
        self.cumulative_principal += principal_portion;
        self.cumulative_interest += interest_portion;

        PeriodRecord {
            period_index: self.period_index,
            payment_amount,
            interest_portion,
            principal_portion,
            remaining_balance: self.balance,
            cumulative_principal: self.cumulative_principal,
            cumulative_interest: self.cumulative_interest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_payment_split() {
        let mut state = AmortizationState::from_principal(1000.0);
        let row = state.apply_payment(110.0, 0.01);

        assert_eq!(row.period_index, 1);
        assert!((row.interest_portion - 10.0).abs() < 1e-12);
        assert!((row.principal_portion - 100.0).abs() < 1e-12);
        assert!((row.remaining_balance - 900.0).abs() < 1e-12);
        assert!((state.balance - 900.0).abs() < 1e-12);
    }

    #[test]
    fn test_balance_floored_at_zero() {
        let mut state = AmortizationState::from_principal(50.0);
        let row = state.apply_payment(80.0, 0.0);

        assert_eq!(row.remaining_balance, 0.0);
        assert_eq!(state.balance, 0.0);
        // Overpayment still counts toward principal retired
        assert_eq!(row.cumulative_principal, 80.0);
    }

    #[test]
    fn test_cumulative_totals_accumulate() {
        let mut state = AmortizationState::from_principal(1200.0);
        let first = state.apply_payment(100.0, 0.01);
        let second = state.apply_payment(100.0, 0.01);

        assert_eq!(second.period_index, 2);
        assert!(
            (second.cumulative_interest - (first.interest_portion + second.interest_portion)).abs()
                < 1e-12
        );
        assert!(
            (second.cumulative_principal - (first.principal_portion + second.principal_portion))
                .abs()
                < 1e-12
        );
    }
}
