//! Inflation adjuster.
//!
//! Converts between today's money and future money at a constant annual
//! inflation rate. `amount` is read both ways: compounded forward as today's
//! money, and discounted back as a future sum.

use serde::{Deserialize, Serialize};

use fincalc_core::{Bounds, Calculator, ClampInputs};
use fincalc_math::tvm::{compound, discount};

/// Inputs for [`InflationAdjuster`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InflationInput {
    /// The amount to convert.
    pub amount: f64,
    /// Annual inflation, in percent.
    pub inflation: f64,
    /// Years between today and the future date.
    pub years: f64,
}

impl Default for InflationInput {
    fn default() -> Self {
        Self::new(10_000.0, 3.0, 10.0)
    }
}

impl InflationInput {
    /// Range of `amount`.
    pub const AMOUNT: Bounds = Bounds::MONEY;
    /// Range of `inflation`.
    pub const INFLATION: Bounds = Bounds::new(0.0, 15.0);
    /// Range of `years`.
    pub const YEARS: Bounds = Bounds::new(0.0, 60.0);

    /// Creates a new input record.
    pub fn new(amount: f64, inflation: f64, years: f64) -> Self {
        Self {
            amount,
            inflation,
            years,
        }
    }
}

impl ClampInputs for InflationInput {
    fn clamped(&self) -> Self {
        Self::new(
            Self::AMOUNT.clamp(self.amount),
            Self::INFLATION.clamp(self.inflation),
            Self::YEARS.clamp(self.years),
        )
    }
}

/// Output of [`InflationAdjuster`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InflationResult {
    /// What today's `amount` will nominally be worth after `years`.
    pub future_value: f64,
    /// What a future `amount` is worth in today's money.
    pub present_value: f64,
}

/// Inflation adjuster calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct InflationAdjuster;

impl Calculator for InflationAdjuster {
    type Input = InflationInput;
    type Output = InflationResult;

    fn id(&self) -> &'static str {
        "inflation-adjuster"
    }

    fn calculate(&self, input: &InflationInput) -> InflationResult {
        InflationResult {
            future_value: compound(input.amount, input.inflation, input.years),
            present_value: discount(input.amount, input.inflation, input.years),
        }
    }
}
