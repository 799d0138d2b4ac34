//! Compound interest on a lump sum, no contributions.
//!
//! ```text
//! amount = P * (1 + rate/100/m)^(m * years)
//! ```

use serde::{Deserialize, Serialize};

use fincalc_core::{Bounds, Calculator, ClampInputs};
use fincalc_math::tvm::growth_factor;

/// Inputs for [`CompoundInterest`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompoundInterestInput {
    /// Starting amount.
    pub principal: f64,
    /// Nominal annual rate, in percent.
    pub annual_rate: f64,
    /// Compounding periods per year (12 = monthly, 365 = daily).
    pub periods_per_year: f64,
    /// Horizon in years.
    pub years: f64,
}

impl Default for CompoundInterestInput {
    fn default() -> Self {
        Self::new(5000.0, 7.0, 12.0, 8.0)
    }
}

impl CompoundInterestInput {
    /// Range of `principal`.
    pub const PRINCIPAL: Bounds = Bounds::MONEY;
    /// Range of `annual_rate`.
    pub const RATE: Bounds = Bounds::new(0.0, 100.0);
    /// Range of `periods_per_year`.
    pub const PERIODS: Bounds = Bounds::new(1.0, 365.0);
    /// Range of `years`.
    pub const YEARS: Bounds = Bounds::new(1.0, 100.0);

    /// Creates a new input record.
    pub fn new(principal: f64, annual_rate: f64, periods_per_year: f64, years: f64) -> Self {
        Self {
            principal,
            annual_rate,
            periods_per_year,
            years,
        }
    }
}

impl ClampInputs for CompoundInterestInput {
    fn clamped(&self) -> Self {
        Self {
            principal: Self::PRINCIPAL.clamp(self.principal),
            annual_rate: Self::RATE.clamp(self.annual_rate),
            periods_per_year: Self::PERIODS.clamp(self.periods_per_year),
            years: Self::YEARS.clamp(self.years),
        }
    }
}

/// Output of [`CompoundInterest`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    /// Final amount.
    pub amount: f64,
    /// Amount minus principal.
    pub interest: f64,
}

/// Compound interest calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompoundInterest;

impl Calculator for CompoundInterest {
    type Input = CompoundInterestInput;
    type Output = CompoundInterestResult;

    fn id(&self) -> &'static str {
        "compound-interest"
    }

    fn calculate(&self, input: &CompoundInterestInput) -> CompoundInterestResult {
        let m = input.periods_per_year;
        let periodic = input.annual_rate / 100.0 / m;
        let amount = input.principal * growth_factor(periodic, m * input.years);
        CompoundInterestResult {
            amount,
            interest: amount - input.principal,
        }
    }
}
