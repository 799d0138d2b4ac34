//! Return on investment.

use serde::{Deserialize, Serialize};

use fincalc_core::{Bounds, Calculator, ClampInputs};

/// Inputs for [`ReturnOnInvestment`]. Both values may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiInput {
    /// Amount invested.
    pub cost: f64,
    /// Value at exit.
    pub final_value: f64,
}

impl Default for RoiInput {
    fn default() -> Self {
        Self::new(10_000.0, 12_000.0)
    }
}

impl RoiInput {
    /// Range of both fields.
    pub const AMOUNT: Bounds = Bounds::new(-1e9, 1e9);

    /// Creates a new input record.
    pub fn new(cost: f64, final_value: f64) -> Self {
        Self { cost, final_value }
    }
}

impl ClampInputs for RoiInput {
    fn clamped(&self) -> Self {
        Self::new(Self::AMOUNT.clamp(self.cost), Self::AMOUNT.clamp(self.final_value))
    }
}

/// Output of [`ReturnOnInvestment`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    /// Final value minus cost.
    pub profit: f64,
    /// Profit as a percentage of cost; 0 when the cost is zero.
    pub roi_percent: f64,
}

/// ROI calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnOnInvestment;

impl Calculator for ReturnOnInvestment {
    type Input = RoiInput;
    type Output = RoiResult;

    fn id(&self) -> &'static str {
        "roi"
    }

    fn calculate(&self, input: &RoiInput) -> RoiResult {
        let profit = input.final_value - input.cost;
        let roi_percent = if input.cost != 0.0 {
            profit / input.cost * 100.0
        } else {
            0.0
        };
        RoiResult {
            profit,
            roi_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gain() {
        let result = ReturnOnInvestment.calculate(&RoiInput::default());
        assert_eq!(result.profit, 2000.0);
        assert_relative_eq!(result.roi_percent, 20.0, max_relative = 1e-12);
    }

    #[test]
    fn test_loss() {
        let result = ReturnOnInvestment.calculate(&RoiInput::new(5000.0, 3500.0));
        assert_eq!(result.profit, -1500.0);
        assert_relative_eq!(result.roi_percent, -30.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_cost() {
        let result = ReturnOnInvestment.calculate(&RoiInput::new(0.0, 750.0));
        assert_eq!(result.profit, 750.0);
        assert_eq!(result.roi_percent, 0.0);
    }

    #[test]
    fn test_negative_cost_sign_follows_formula() {
        let result = ReturnOnInvestment.calculate(&RoiInput::new(-100.0, 50.0));
        assert_eq!(result.profit, 150.0);
        assert_relative_eq!(result.roi_percent, -150.0, max_relative = 1e-12);
    }

    #[test]
    fn test_clamp() {
        let input = RoiInput::new(-5e9, 5e9).clamped();
        assert_eq!(input, RoiInput::new(-1e9, 1e9));
    }
}
