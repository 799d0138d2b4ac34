//! Savings growth calculator.
//!
//! A starting balance plus a fixed monthly contribution, compounded monthly.
//! Contributions are made at the end of each month.

use serde::{Deserialize, Serialize};

use fincalc_core::{Bounds, Calculator, ClampInputs};
use fincalc_math::tvm::{annuity_future_value_factor, growth_factor, monthly_rate, months};

/// Inputs for [`SavingsGrowth`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavingsInput {
    /// Starting balance.
    pub initial: f64,
    /// Amount added at the end of every month.
    pub monthly_contribution: f64,
    /// Nominal annual rate, in percent.
    pub annual_rate: f64,
    /// Duration in years.
    pub years: f64,
}

impl Default for SavingsInput {
    fn default() -> Self {
        Self::new(2000.0, 200.0, 5.0, 10.0)
    }
}

impl SavingsInput {
    /// Range of `initial` and `monthly_contribution`.
    pub const AMOUNT: Bounds = Bounds::MONEY;
    /// Range of `annual_rate`.
    pub const RATE: Bounds = Bounds::new(0.0, 50.0);
    /// Range of `years`.
    pub const YEARS: Bounds = Bounds::new(1.0, 60.0);

    /// Creates a new input record.
    pub fn new(initial: f64, monthly_contribution: f64, annual_rate: f64, years: f64) -> Self {
        Self {
            initial,
            monthly_contribution,
            annual_rate,
            years,
        }
    }
}

impl ClampInputs for SavingsInput {
    fn clamped(&self) -> Self {
        Self {
            initial: Self::AMOUNT.clamp(self.initial),
            monthly_contribution: Self::AMOUNT.clamp(self.monthly_contribution),
            annual_rate: Self::RATE.clamp(self.annual_rate),
            years: Self::YEARS.clamp(self.years),
        }
    }
}

/// Output of [`SavingsGrowth`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsResult {
    /// Balance at the end of the horizon.
    pub future_value: f64,
    /// Starting balance plus every contribution.
    pub contributions: f64,
    /// Growth earned on top of contributions.
    pub interest: f64,
}

/// Savings growth calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SavingsGrowth;

impl Calculator for SavingsGrowth {
    type Input = SavingsInput;
    type Output = SavingsResult;

    fn id(&self) -> &'static str {
        "savings-growth"
    }

    fn calculate(&self, input: &SavingsInput) -> SavingsResult {
        let r = monthly_rate(input.annual_rate);
        let n = months(input.years);
        let contributions = input.initial + input.monthly_contribution * n;

        // A zero (or non-finite) rate falls back to plain accumulation.
        let future_value = if r != 0.0 && r.is_finite() {
            input.initial * growth_factor(r, n)
                + input.monthly_contribution * annuity_future_value_factor(r, n)
        } else {
            contributions
        };

        SavingsResult {
            future_value,
            contributions,
            interest: future_value - contributions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rate() {
        let result = SavingsGrowth.calculate(&SavingsInput::new(1000.0, 100.0, 0.0, 1.0));
        assert_eq!(result.future_value, 2200.0);
        assert_eq!(result.contributions, 2200.0);
        assert_eq!(result.interest, 0.0);
    }

    #[test]
    fn test_default_scenario() {
        let result = SavingsGrowth.calculate(&SavingsInput::default());
        assert_relative_eq!(result.future_value, 34_350.47, epsilon = 1e-2);
        assert_eq!(result.contributions, 26_000.0);
        assert_relative_eq!(result.interest, 8_350.47, epsilon = 1e-2);
    }

    #[test]
    fn test_lump_sum_only() {
        let result = SavingsGrowth.calculate(&SavingsInput::new(1000.0, 0.0, 12.0, 1.0));
        assert_relative_eq!(result.future_value, 1000.0 * 1.01_f64.powi(12), max_relative = 1e-12);
    }

    #[test]
    fn test_clamp() {
        let input = SavingsInput::new(f64::NAN, -5.0, 75.0, 100.0).clamped();
        assert_eq!(input, SavingsInput::new(0.0, 0.0, 50.0, 60.0));
    }
}
