//! Mortgage affordability from income and existing debts.
//!
//! Applies the 28/36 rule of thumb: housing may take at most 28% of gross
//! monthly income, and housing plus other debts at most 36%. The stricter of
//! the two caps (never below zero) is the affordable monthly payment, and the
//! maximum loan is the present value of that payment over the term.

use serde::{Deserialize, Serialize};

use fincalc_core::{Bounds, Calculator, ClampInputs};
use fincalc_math::tvm::{annuity_present_value_factor, monthly_rate, months};

/// Front-end ratio: share of gross income available for housing.
pub const HOUSING_RATIO: f64 = 0.28;

/// Back-end ratio: share of gross income available for all debt service.
pub const TOTAL_DEBT_RATIO: f64 = 0.36;

/// Inputs for [`MortgageAffordability`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MortgageInput {
    /// Gross monthly income.
    pub monthly_income: f64,
    /// Other monthly debt payments.
    pub monthly_debts: f64,
    /// Mortgage APR, in percent.
    pub apr: f64,
    /// Term in years.
    pub years: f64,
}

impl Default for MortgageInput {
    fn default() -> Self {
        Self::new(8000.0, 500.0, 6.5, 30.0)
    }
}

impl MortgageInput {
    /// Range of `monthly_income` and `monthly_debts`.
    pub const AMOUNT: Bounds = Bounds::MONEY;
    /// Range of `apr`.
    pub const APR: Bounds = Bounds::new(0.0, 30.0);
    /// Range of `years`.
    pub const YEARS: Bounds = Bounds::new(1.0, 40.0);

    /// Creates a new input record.
    pub fn new(monthly_income: f64, monthly_debts: f64, apr: f64, years: f64) -> Self {
        Self {
            monthly_income,
            monthly_debts,
            apr,
            years,
        }
    }
}

impl ClampInputs for MortgageInput {
    fn clamped(&self) -> Self {
        Self {
            monthly_income: Self::AMOUNT.clamp(self.monthly_income),
            monthly_debts: Self::AMOUNT.clamp(self.monthly_debts),
            apr: Self::APR.clamp(self.apr),
            years: Self::YEARS.clamp(self.years),
        }
    }
}

/// Output of [`MortgageAffordability`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageResult {
    /// Largest affordable monthly mortgage payment.
    pub max_payment: f64,
    /// Largest loan that payment services over the term.
    pub max_loan: f64,
}

/// Mortgage affordability calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct MortgageAffordability;

impl MortgageAffordability {
    /// Affordable monthly payment under the 28/36 rule.
    pub fn max_payment(monthly_income: f64, monthly_debts: f64) -> f64 {
        let housing_cap = monthly_income * HOUSING_RATIO;
        let total_cap = monthly_income * TOTAL_DEBT_RATIO - monthly_debts;
        housing_cap.min(total_cap).max(0.0)
    }
}

impl Calculator for MortgageAffordability {
    type Input = MortgageInput;
    type Output = MortgageResult;

    fn id(&self) -> &'static str {
        "mortgage-affordability"
    }

    fn calculate(&self, input: &MortgageInput) -> MortgageResult {
        let max_payment = Self::max_payment(input.monthly_income, input.monthly_debts);
        let r = monthly_rate(input.apr);
        let n = months(input.years);
        MortgageResult {
            max_payment,
            max_loan: max_payment * annuity_present_value_factor(r, n),
        }
    }
}
