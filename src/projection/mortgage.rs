//! Mortgage payment and down payment calculations

use serde::{Deserialize, Serialize};

/// Monthly payment of an amortizing loan.
///
/// # Arguments
/// * `principal` - Amount borrowed
/// * `rate_pct` - Annual nominal interest rate in percent (3.5 for 3.5%)
/// * `years` - Loan term in years
///
/// A non-positive term yields 0 and a zero rate repays the principal in
/// equal installments.
pub fn mortgage_payment(principal: f64, rate_pct: f64, years: i32) -> f64 {
    let r = rate_pct / 100.0 / 12.0;
    let n = years.saturating_mul(12);
    if n <= 0 {
        return 0.0;
    }
    if r == 0.0 {
        return principal / f64::from(n);
    }
    let growth = (1.0 + r).powi(n);
    principal * r * growth / (growth - 1.0)
}

/// Loan terms used to judge affordability of the projected price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageTerms {
    /// Share of the price paid upfront (0.2 for 20%)
    pub down_pct: f64,
    /// Annual interest rate in percent
    pub rate_pct: f64,
    /// Loan term in years
    pub years: i32,
}

impl MortgageTerms {
    /// Upfront payment for a property price
    pub fn down_payment(&self, price: f64) -> f64 {
        price * self.down_pct
    }

    /// Monthly payment on the financed part of a property price
    pub fn monthly_payment(&self, price: f64) -> f64 {
        mortgage_payment(price - self.down_payment(price), self.rate_pct, self.years)
    }
}

impl Default for MortgageTerms {
    fn default() -> Self {
        Self {
            down_pct: 0.20,
            rate_pct: 3.0,
            years: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zero_rate() {
        assert_eq!(mortgage_payment(120000.0, 0.0, 30), 120000.0 / 360.0);
        assert_abs_diff_eq!(mortgage_payment(120000.0, 0.0, 30), 333.3333333, epsilon = 1e-6);
    }

    #[test]
    fn test_non_positive_term() {
        assert_eq!(mortgage_payment(200000.0, 3.0, 0), 0.0);
        assert_eq!(mortgage_payment(200000.0, 0.0, 0), 0.0);
        assert_eq!(mortgage_payment(200000.0, 3.0, -5), 0.0);
    }

    #[test]
    fn test_annuity_formula() {
        // 200k at 3% over 30 years
        assert_abs_diff_eq!(mortgage_payment(200000.0, 3.0, 30), 843.21, epsilon = 0.01);
        // 150k at 4.5% over 20 years
        assert_abs_diff_eq!(mortgage_payment(150000.0, 4.5, 20), 948.97, epsilon = 0.01);
    }

    #[test]
    fn test_payments_repay_principal() {
        let principal = 180000.0;
        let payment = mortgage_payment(principal, 2.5, 25);
        let r = 2.5 / 100.0 / 12.0;
        let mut balance = principal;
        for _ in 0..300 {
            balance = balance * (1.0 + r) - payment;
        }
        assert_abs_diff_eq!(balance, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_terms() {
        let terms = MortgageTerms::default();
        assert_abs_diff_eq!(terms.down_payment(250000.0), 50000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(terms.monthly_payment(250000.0), 843.21, epsilon = 0.01);
    }
}
