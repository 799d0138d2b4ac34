//! Debt payoff with a fixed monthly payment.
//!
//! Unlike the other calculators this one has no closed form worth using: the
//! balance is simulated month by month. Each month interest accrues on the
//! balance and the payment is subtracted. When the remaining balance drops
//! below one payment, the next month closes the debt with a smaller final
//! payment that also carries that month's interest.
//!
//! A debt whose payment does not exceed the interest accrued in a month never
//! amortizes. That case, and running past the month ceiling, yields `None`
//! for both outputs.

use serde::{Deserialize, Serialize};

use fincalc_core::{Bounds, Calculator, ClampInputs};
use fincalc_math::tvm::monthly_rate;

/// Default ceiling on simulated months (about 166 years).
pub const DEFAULT_MAX_MONTHS: u32 = 2000;

/// Inputs for [`DebtPayoff`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebtPayoffInput {
    /// Outstanding balance.
    pub balance: f64,
    /// Annual percentage rate, in percent.
    pub apr: f64,
    /// Fixed monthly payment.
    pub payment: f64,
}

impl Default for DebtPayoffInput {
    fn default() -> Self {
        Self::new(10_000.0, 19.99, 300.0)
    }
}

impl DebtPayoffInput {
    /// Range of `balance` and `payment`.
    pub const AMOUNT: Bounds = Bounds::MONEY;
    /// Range of `apr`.
    pub const APR: Bounds = Bounds::new(0.0, 100.0);

    /// Creates a new input record.
    pub fn new(balance: f64, apr: f64, payment: f64) -> Self {
        Self {
            balance,
            apr,
            payment,
        }
    }
}

impl ClampInputs for DebtPayoffInput {
    fn clamped(&self) -> Self {
        Self {
            balance: Self::AMOUNT.clamp(self.balance),
            apr: Self::APR.clamp(self.apr),
            payment: Self::AMOUNT.clamp(self.payment),
        }
    }
}

/// Output of [`DebtPayoff`].
///
/// Both fields are `None` when the debt is never paid off.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebtPayoffResult {
    /// Months until the balance reaches zero.
    pub months: Option<u32>,
    /// Interest paid over those months.
    pub total_interest: Option<f64>,
}

impl DebtPayoffResult {
    /// The "never paid off" outcome.
    pub const UNREACHABLE: DebtPayoffResult = DebtPayoffResult {
        months: None,
        total_interest: None,
    };

    /// Returns true if the debt is paid off in finite time.
    pub fn is_paid_off(&self) -> bool {
        self.months.is_some()
    }
}

/// Debt payoff calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebtPayoff {
    max_months: u32,
}

impl Default for DebtPayoff {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MONTHS)
    }
}

impl DebtPayoff {
    /// Creates a calculator that gives up after `max_months` simulated months.
    pub fn new(max_months: u32) -> Self {
        Self { max_months }
    }

    /// The month ceiling in use.
    pub fn max_months(&self) -> u32 {
        self.max_months
    }
}

impl Calculator for DebtPayoff {
    type Input = DebtPayoffInput;
    type Output = DebtPayoffResult;

    fn id(&self) -> &'static str {
        "debt-payoff"
    }

    fn calculate(&self, input: &DebtPayoffInput) -> DebtPayoffResult {
        let r = monthly_rate(input.apr);
        let payment = input.payment;

        let mut balance = input.balance;
        let mut months: u32 = 0;
        let mut total_interest = 0.0;

        while balance > 0.0 && months < self.max_months {
            let interest = balance * r;
            total_interest += interest;
            balance += interest - payment;
            months += 1;

            if balance > 0.0 && balance < payment {
                // closing month: smaller payment plus that month's interest
                months += 1;
                total_interest += balance * r;
                balance = 0.0;
                break;
            }

            if payment <= interest {
                log::trace!(
                    "payment {payment} does not cover monthly interest {interest}, debt never amortizes"
                );
                return DebtPayoffResult::UNREACHABLE;
            }
        }

        if balance > 0.0 {
            log::debug!(
                "debt payoff gave up after {} months with balance {balance}",
                self.max_months
            );
            return DebtPayoffResult::UNREACHABLE;
        }

        DebtPayoffResult {
            months: Some(months),
            total_interest: Some(total_interest),
        }
    }
}
