//! Loan payment calculator.
//!
//! Level monthly payment for a fully amortizing installment loan.
//!
//! # Formula
//!
//! ```text
//! r = APR / 100 / 12,  n = years * 12
//! payment = P * r * (1+r)^n / ((1+r)^n - 1)      (r > 0)
//! payment = P / n                                (r = 0)
//! total cost = payment * n,  total interest = total cost - P
//! ```

use serde::{Deserialize, Serialize};

use fincalc_core::{Bounds, Calculator, ClampInputs};
use fincalc_math::tvm::{annuity_payment, monthly_rate, months};

/// Inputs for [`LoanPayment`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanInput {
    /// Amount borrowed.
    pub principal: f64,
    /// Annual percentage rate, in percent.
    pub apr: f64,
    /// Term in years.
    pub years: f64,
}

impl Default for LoanInput {
    fn default() -> Self {
        Self::new(25_000.0, 6.9, 5.0)
    }
}

impl LoanInput {
    /// Range of `principal`.
    pub const PRINCIPAL: Bounds = Bounds::MONEY;
    /// Range of `apr`.
    pub const APR: Bounds = Bounds::new(0.0, 100.0);
    /// Range of `years`.
    pub const YEARS: Bounds = Bounds::new(1.0, 40.0);

    /// Creates a new input record.
    pub fn new(principal: f64, apr: f64, years: f64) -> Self {
        Self {
            principal,
            apr,
            years,
        }
    }
}

impl ClampInputs for LoanInput {
    fn clamped(&self) -> Self {
        Self {
            principal: Self::PRINCIPAL.clamp(self.principal),
            apr: Self::APR.clamp(self.apr),
            years: Self::YEARS.clamp(self.years),
        }
    }
}

/// Output of [`LoanPayment`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    /// Monthly payment.
    pub payment: f64,
    /// Interest paid over the life of the loan.
    pub total_interest: f64,
    /// Sum of all payments.
    pub total_cost: f64,
}

/// Loan payment calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoanPayment;

impl Calculator for LoanPayment {
    type Input = LoanInput;
    type Output = LoanResult;

    fn id(&self) -> &'static str {
        "loan-payment"
    }

    fn calculate(&self, input: &LoanInput) -> LoanResult {
        let r = monthly_rate(input.apr);
        let n = months(input.years);

        if r == 0.0 {
            return LoanResult {
                payment: input.principal / n,
                total_interest: 0.0,
                total_cost: input.principal,
            };
        }

        let payment = annuity_payment(input.principal, r, n);
        let total_cost = payment * n;
        LoanResult {
            payment,
            total_interest: total_cost - input.principal,
            total_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_car_loan() {
        let result = LoanPayment.calculate(&LoanInput::new(25_000.0, 6.9, 5.0));
        assert_abs_diff_eq!(result.payment, 493.85, epsilon = 1e-2);
        assert_abs_diff_eq!(result.total_cost, 29_631.08, epsilon = 1e-2);
        assert_abs_diff_eq!(result.total_interest, 4_631.08, epsilon = 1e-2);
    }

    #[test]
    fn test_zero_rate_is_exact() {
        let result = LoanPayment.calculate(&LoanInput::new(1200.0, 0.0, 1.0));
        assert_eq!(result.payment, 100.0);
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.total_cost, 1200.0);
    }

    #[test]
    fn test_zero_principal() {
        let result = LoanPayment.calculate(&LoanInput::new(0.0, 5.0, 10.0));
        assert_eq!(result.payment, 0.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_interest_is_cost_minus_principal() {
        let input = LoanInput::new(300_000.0, 6.5, 30.0);
        let result = LoanPayment.calculate(&input);
        assert_abs_diff_eq!(
            result.total_interest,
            result.total_cost - input.principal,
            epsilon = 1e-6
        );
        assert!(result.total_interest > 0.0);
    }

    #[test]
    fn test_clamp() {
        let input = LoanInput::new(-10.0, 250.0, 0.0).clamped();
        assert_eq!(input, LoanInput::new(0.0, 100.0, 1.0));
        assert!(LoanInput::default().is_within_bounds());
    }
}
