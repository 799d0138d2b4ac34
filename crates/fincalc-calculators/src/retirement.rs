//! Retirement projection.
//!
//! Grows current savings plus monthly contributions until retirement age and
//! deflates the result back into today's money. A retirement age at or below
//! the current age gives a zero-year horizon, so the projection is just the
//! current savings.

use serde::{Deserialize, Serialize};

use fincalc_core::{Bounds, Calculator, ClampInputs};
use fincalc_math::tvm::{
    annuity_future_value_factor, discount, growth_factor, monthly_rate, months,
};

/// Inputs for [`RetirementProjection`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetirementInput {
    /// Age today.
    pub current_age: f64,
    /// Planned retirement age. May be below `current_age`.
    pub retire_age: f64,
    /// Savings today.
    pub current_savings: f64,
    /// Amount added at the end of every month.
    pub monthly_contribution: f64,
    /// Expected annual return, in percent.
    pub annual_return: f64,
    /// Expected annual inflation, in percent.
    pub inflation: f64,
}

impl Default for RetirementInput {
    fn default() -> Self {
        Self {
            current_age: 30.0,
            retire_age: 65.0,
            current_savings: 20_000.0,
            monthly_contribution: 600.0,
            annual_return: 7.0,
            inflation: 2.5,
        }
    }
}

impl RetirementInput {
    /// Range of `current_age`.
    pub const CURRENT_AGE: Bounds = Bounds::new(18.0, 70.0);
    /// Range of `retire_age`.
    pub const RETIRE_AGE: Bounds = Bounds::new(30.0, 80.0);
    /// Range of `current_savings` and `monthly_contribution`.
    pub const AMOUNT: Bounds = Bounds::MONEY;
    /// Range of `annual_return`.
    pub const RETURN: Bounds = Bounds::new(0.0, 20.0);
    /// Range of `inflation`.
    pub const INFLATION: Bounds = Bounds::new(0.0, 10.0);

    /// Years until retirement, never negative.
    pub fn years_to_retirement(&self) -> f64 {
        (self.retire_age - self.current_age).max(0.0)
    }
}

impl ClampInputs for RetirementInput {
    fn clamped(&self) -> Self {
        Self {
            current_age: Self::CURRENT_AGE.clamp(self.current_age),
            retire_age: Self::RETIRE_AGE.clamp(self.retire_age),
            current_savings: Self::AMOUNT.clamp(self.current_savings),
            monthly_contribution: Self::AMOUNT.clamp(self.monthly_contribution),
            annual_return: Self::RETURN.clamp(self.annual_return),
            inflation: Self::INFLATION.clamp(self.inflation),
        }
    }
}

/// Output of [`RetirementProjection`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementResult {
    /// Years of growth.
    pub years: f64,
    /// Projected balance at retirement in future money.
    pub nominal: f64,
    /// Projected balance at retirement in today's money.
    pub real: f64,
}

/// Retirement projection calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RetirementProjection;

impl Calculator for RetirementProjection {
    type Input = RetirementInput;
    type Output = RetirementResult;

    fn id(&self) -> &'static str {
        "retirement"
    }

    fn calculate(&self, input: &RetirementInput) -> RetirementResult {
        let years = input.years_to_retirement();
        let r = monthly_rate(input.annual_return);
        let n = months(years);

        let nominal = input.current_savings * growth_factor(r, n)
            + input.monthly_contribution * annuity_future_value_factor(r, n);

        RetirementResult {
            years,
            nominal,
            real: discount(nominal, input.inflation, years),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_projection() {
        let result = RetirementProjection.calculate(&RetirementInput::default());
        assert_eq!(result.years, 35.0);
        assert_relative_eq!(result.nominal, 1_310_755.80, epsilon = 1e-2);
        assert_relative_eq!(result.real, 552_314.57, epsilon = 1e-2);
    }

    #[test]
    fn test_retire_age_below_current_age() {
        let input = RetirementInput {
            current_age: 60.0,
            retire_age: 50.0,
            ..RetirementInput::default()
        };
        let result = RetirementProjection.calculate(&input);
        assert_eq!(result.years, 0.0);
        assert_eq!(result.nominal, input.current_savings);
        assert_eq!(result.real, input.current_savings);
    }

    #[test]
    fn test_zero_return_accumulates_contributions() {
        let input = RetirementInput {
            current_age: 40.0,
            retire_age: 50.0,
            current_savings: 1000.0,
            monthly_contribution: 100.0,
            annual_return: 0.0,
            inflation: 0.0,
        };
        let result = RetirementProjection.calculate(&input);
        assert_eq!(result.nominal, 1000.0 + 100.0 * 120.0);
        assert_eq!(result.real, result.nominal);
    }

    #[test]
    fn test_clamp() {
        let input = RetirementInput {
            current_age: 10.0,
            retire_age: 95.0,
            inflation: 12.0,
            ..RetirementInput::default()
        }
        .clamped();
        assert_eq!(input.current_age, 18.0);
        assert_eq!(input.retire_age, 80.0);
        assert_eq!(input.inflation, 10.0);
    }
}
