//! Break-even analysis.
//!
//! Each unit sold contributes `price - variable cost` towards fixed costs.
//! With a positive margin the break-even volume is the whole number of units
//! that first covers them; with a zero or negative margin no volume ever does,
//! and both outputs are `None`. A volume too large to count in a `u64` (a
//! margin of a fraction of a cent against large fixed costs) is likewise
//! reported as `None`.

use serde::{Deserialize, Serialize};

use fincalc_core::{Bounds, Calculator, ClampInputs};

/// Inputs for [`BreakEven`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakEvenInput {
    /// Fixed costs to recover.
    pub fixed_costs: f64,
    /// Selling price per unit.
    pub price: f64,
    /// Variable cost per unit.
    pub variable_cost: f64,
}

impl Default for BreakEvenInput {
    fn default() -> Self {
        Self::new(5000.0, 50.0, 20.0)
    }
}

impl BreakEvenInput {
    /// Range of every field.
    pub const AMOUNT: Bounds = Bounds::MONEY;

    /// Creates a new input record.
    pub fn new(fixed_costs: f64, price: f64, variable_cost: f64) -> Self {
        Self {
            fixed_costs,
            price,
            variable_cost,
        }
    }

    /// Contribution margin per unit.
    pub fn margin(&self) -> f64 {
        self.price - self.variable_cost
    }
}

impl ClampInputs for BreakEvenInput {
    fn clamped(&self) -> Self {
        Self::new(
            Self::AMOUNT.clamp(self.fixed_costs),
            Self::AMOUNT.clamp(self.price),
            Self::AMOUNT.clamp(self.variable_cost),
        )
    }
}

/// Output of [`BreakEven`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenResult {
    /// Contribution margin per unit.
    pub margin: f64,
    /// Units to sell; `None` when the margin is not positive or the volume
    /// cannot be counted.
    pub units: Option<u64>,
    /// Revenue at the break-even volume, `units * price`; `None` whenever
    /// `units` is.
    pub revenue: Option<f64>,
}

/// Break-even calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakEven;

impl Calculator for BreakEven {
    type Input = BreakEvenInput;
    type Output = BreakEvenResult;

    fn id(&self) -> &'static str {
        "break-even"
    }

    fn calculate(&self, input: &BreakEvenInput) -> BreakEvenResult {
        let margin = input.margin();
        let undefined = BreakEvenResult {
            margin,
            units: None,
            revenue: None,
        };
        if margin <= 0.0 {
            return undefined;
        }

        let Some(units) = whole_units(input.fixed_costs / margin) else {
            log::debug!(
                "break-even volume {} / {margin} does not fit in a unit count",
                input.fixed_costs
            );
            return undefined;
        };
        BreakEvenResult {
            margin,
            units: Some(units),
            revenue: Some(units as f64 * input.price),
        }
    }
}

/// Rounds up to a whole unit count, or `None` past `u64::MAX`.
fn whole_units(volume: f64) -> Option<u64> {
    let units = volume.ceil();
    // u64::MAX as f64 is 2^64, itself out of range
    if units.is_finite() && units >= 0.0 && units < u64::MAX as f64 {
        Some(units as u64)
    } else {
        None
    }
}
