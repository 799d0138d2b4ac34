//! Emergency fund target: monthly expenses times months of coverage.

use serde::{Deserialize, Serialize};

use fincalc_core::{Bounds, Calculator, ClampInputs};

/// Inputs for [`EmergencyFund`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmergencyFundInput {
    /// Essential monthly expenses.
    pub monthly_expenses: f64,
    /// Months the fund should cover.
    pub months: f64,
}

impl Default for EmergencyFundInput {
    fn default() -> Self {
        Self::new(2500.0, 6.0)
    }
}

impl EmergencyFundInput {
    /// Range of `monthly_expenses`.
    pub const EXPENSES: Bounds = Bounds::MONEY;
    /// Range of `months`.
    pub const MONTHS: Bounds = Bounds::new(1.0, 24.0);

    /// Creates a new input record.
    pub fn new(monthly_expenses: f64, months: f64) -> Self {
        Self {
            monthly_expenses,
            months,
        }
    }
}

impl ClampInputs for EmergencyFundInput {
    fn clamped(&self) -> Self {
        Self::new(
            Self::EXPENSES.clamp(self.monthly_expenses),
            Self::MONTHS.clamp(self.months),
        )
    }
}

/// Output of [`EmergencyFund`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmergencyFundResult {
    /// Cash to hold in reserve.
    pub target: f64,
}

/// Emergency fund calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmergencyFund;

impl Calculator for EmergencyFund {
    type Input = EmergencyFundInput;
    type Output = EmergencyFundResult;

    fn id(&self) -> &'static str {
        "emergency-fund"
    }

    fn calculate(&self, input: &EmergencyFundInput) -> EmergencyFundResult {
        EmergencyFundResult {
            target: input.monthly_expenses * input.months,
        }
    }
}
