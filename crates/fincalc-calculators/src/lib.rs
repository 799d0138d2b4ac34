//! # fincalc Calculators
//!
//! Ten independent personal-finance calculators. Each one is a pure function
//! from a small input record to a small output record:
//!
//! | module | calculator | outputs |
//! |---|---|---|
//! | [`loan`] | [`LoanPayment`] | monthly payment, total interest, total cost |
//! | [`savings`] | [`SavingsGrowth`] | future value, contributions, interest |
//! | [`compound`] | [`CompoundInterest`] | final amount, interest |
//! | [`mortgage`] | [`MortgageAffordability`] | max monthly payment, max loan |
//! | [`retirement`] | [`RetirementProjection`] | nominal and real nest egg |
//! | [`debt_payoff`] | [`DebtPayoff`] | months to payoff, total interest |
//! | [`roi`] | [`ReturnOnInvestment`] | profit, ROI % |
//! | [`break_even`] | [`BreakEven`] | units, revenue |
//! | [`emergency_fund`] | [`EmergencyFund`] | target fund |
//! | [`inflation`] | [`InflationAdjuster`] | future value, present value |
//!
//! Results that have no finite answer (a debt that never amortizes, a
//! break-even with a non-positive margin) are `None`.
//!
//! The [`dispatch`] module wraps all ten behind a serde-tagged request type
//! for front ends that pick the calculator at runtime.
//!
//! ## Example
//!
//! ```rust
//! use fincalc_calculators::prelude::*;
//!
//! let result = BreakEven.calculate(&BreakEvenInput::new(5000.0, 50.0, 20.0));
//! assert_eq!(result.units, Some(167));
//! assert_eq!(result.revenue, Some(8350.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_errors_doc)]

pub mod break_even;
pub mod catalog;
pub mod compound;
pub mod debt_payoff;
pub mod dispatch;
pub mod emergency_fund;
pub mod inflation;
pub mod loan;
pub mod mortgage;
pub mod retirement;
pub mod roi;
pub mod savings;

pub use break_even::{BreakEven, BreakEvenInput, BreakEvenResult};
pub use catalog::CalculatorKind;
pub use compound::{CompoundInterest, CompoundInterestInput, CompoundInterestResult};
pub use debt_payoff::{DebtPayoff, DebtPayoffInput, DebtPayoffResult, DEFAULT_MAX_MONTHS};
pub use dispatch::{evaluate, CalculationRequest, CalculationResponse, EvaluationOptions};
pub use emergency_fund::{EmergencyFund, EmergencyFundInput, EmergencyFundResult};
pub use inflation::{InflationAdjuster, InflationInput, InflationResult};
pub use loan::{LoanInput, LoanPayment, LoanResult};
pub use mortgage::{MortgageAffordability, MortgageInput, MortgageResult};
pub use retirement::{RetirementInput, RetirementProjection, RetirementResult};
pub use roi::{ReturnOnInvestment, RoiInput, RoiResult};
pub use savings::{SavingsGrowth, SavingsInput, SavingsResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::break_even::{BreakEven, BreakEvenInput, BreakEvenResult};
    pub use crate::catalog::CalculatorKind;
    pub use crate::compound::{CompoundInterest, CompoundInterestInput, CompoundInterestResult};
    pub use crate::debt_payoff::{DebtPayoff, DebtPayoffInput, DebtPayoffResult};
    pub use crate::dispatch::{evaluate, CalculationRequest, CalculationResponse, EvaluationOptions};
    pub use crate::emergency_fund::{EmergencyFund, EmergencyFundInput, EmergencyFundResult};
    pub use crate::inflation::{InflationAdjuster, InflationInput, InflationResult};
    pub use crate::loan::{LoanInput, LoanPayment, LoanResult};
    pub use crate::mortgage::{MortgageAffordability, MortgageInput, MortgageResult};
    pub use crate::retirement::{RetirementInput, RetirementProjection, RetirementResult};
    pub use crate::roi::{ReturnOnInvestment, RoiInput, RoiResult};
    pub use crate::savings::{SavingsGrowth, SavingsInput, SavingsResult};
    pub use fincalc_core::{Calculator, ClampInputs};
}
