//! Runtime dispatch over the ten calculators.
//!
//! Front ends that choose the calculator at runtime (the CLI `eval` command,
//! the WebAssembly bindings) exchange [`CalculationRequest`] and
//! [`CalculationResponse`] values. Both serialize as adjacently tagged JSON:
//!
//! ```json
//! {"calculator": "loan-payment", "inputs": {"principal": 25000, "apr": 6.9, "years": 5}}
//! {"calculator": "loan-payment", "result": {"payment": 493.85, ...}}
//! ```
//!
//! Missing input fields take the calculator's default values.

use serde::{Deserialize, Serialize};

use fincalc_core::{Calculator, ClampInputs, FincalcResult};

use crate::break_even::{BreakEven, BreakEvenInput, BreakEvenResult};
use crate::catalog::CalculatorKind;
use crate::compound::{CompoundInterest, CompoundInterestInput, CompoundInterestResult};
use crate::debt_payoff::{DebtPayoff, DebtPayoffInput, DebtPayoffResult, DEFAULT_MAX_MONTHS};
use crate::emergency_fund::{EmergencyFund, EmergencyFundInput, EmergencyFundResult};
use crate::inflation::{InflationAdjuster, InflationInput, InflationResult};
use crate::loan::{LoanInput, LoanPayment, LoanResult};
use crate::mortgage::{MortgageAffordability, MortgageInput, MortgageResult};
use crate::retirement::{RetirementInput, RetirementProjection, RetirementResult};
use crate::roi::{ReturnOnInvestment, RoiInput, RoiResult};
use crate::savings::{SavingsGrowth, SavingsInput, SavingsResult};

/// A calculator together with its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", content = "inputs", rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum CalculationRequest {
    LoanPayment(LoanInput),
    SavingsGrowth(SavingsInput),
    CompoundInterest(CompoundInterestInput),
    MortgageAffordability(MortgageInput),
    Retirement(RetirementInput),
    DebtPayoff(DebtPayoffInput),
    Roi(RoiInput),
    BreakEven(BreakEvenInput),
    EmergencyFund(EmergencyFundInput),
    InflationAdjuster(InflationInput),
}

impl CalculationRequest {
    /// A request carrying the default inputs of `kind`.
    pub fn default_for(kind: CalculatorKind) -> Self {
        match kind {
            CalculatorKind::LoanPayment => Self::LoanPayment(LoanInput::default()),
            CalculatorKind::SavingsGrowth => Self::SavingsGrowth(SavingsInput::default()),
            CalculatorKind::CompoundInterest => {
                Self::CompoundInterest(CompoundInterestInput::default())
            }
            CalculatorKind::MortgageAffordability => {
                Self::MortgageAffordability(MortgageInput::default())
            }
            CalculatorKind::Retirement => Self::Retirement(RetirementInput::default()),
            CalculatorKind::DebtPayoff => Self::DebtPayoff(DebtPayoffInput::default()),
            CalculatorKind::Roi => Self::Roi(RoiInput::default()),
            CalculatorKind::BreakEven => Self::BreakEven(BreakEvenInput::default()),
            CalculatorKind::EmergencyFund => Self::EmergencyFund(EmergencyFundInput::default()),
            CalculatorKind::InflationAdjuster => {
                Self::InflationAdjuster(InflationInput::default())
            }
        }
    }

    /// Decodes a request from JSON.
    pub fn from_json(json: &str) -> FincalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The calculator this request targets.
    pub fn kind(&self) -> CalculatorKind {
        match self {
            Self::LoanPayment(_) => CalculatorKind::LoanPayment,
            Self::SavingsGrowth(_) => CalculatorKind::SavingsGrowth,
            Self::CompoundInterest(_) => CalculatorKind::CompoundInterest,
            Self::MortgageAffordability(_) => CalculatorKind::MortgageAffordability,
            Self::Retirement(_) => CalculatorKind::Retirement,
            Self::DebtPayoff(_) => CalculatorKind::DebtPayoff,
            Self::Roi(_) => CalculatorKind::Roi,
            Self::BreakEven(_) => CalculatorKind::BreakEven,
            Self::EmergencyFund(_) => CalculatorKind::EmergencyFund,
            Self::InflationAdjuster(_) => CalculatorKind::InflationAdjuster,
        }
    }

    /// Returns the request with its inputs clamped into range.
    #[must_use]
    pub fn clamped(&self) -> Self {
        match self {
            Self::LoanPayment(i) => Self::LoanPayment(i.clamped()),
            Self::SavingsGrowth(i) => Self::SavingsGrowth(i.clamped()),
            Self::CompoundInterest(i) => Self::CompoundInterest(i.clamped()),
            Self::MortgageAffordability(i) => Self::MortgageAffordability(i.clamped()),
            Self::Retirement(i) => Self::Retirement(i.clamped()),
            Self::DebtPayoff(i) => Self::DebtPayoff(i.clamped()),
            Self::Roi(i) => Self::Roi(i.clamped()),
            Self::BreakEven(i) => Self::BreakEven(i.clamped()),
            Self::EmergencyFund(i) => Self::EmergencyFund(i.clamped()),
            Self::InflationAdjuster(i) => Self::InflationAdjuster(i.clamped()),
        }
    }
}

/// The result of a [`CalculationRequest`], tagged with the same calculator id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", content = "result", rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum CalculationResponse {
    LoanPayment(LoanResult),
    SavingsGrowth(SavingsResult),
    CompoundInterest(CompoundInterestResult),
    MortgageAffordability(MortgageResult),
    Retirement(RetirementResult),
    DebtPayoff(DebtPayoffResult),
    Roi(RoiResult),
    BreakEven(BreakEvenResult),
    EmergencyFund(EmergencyFundResult),
    InflationAdjuster(InflationResult),
}

impl CalculationResponse {
    /// The calculator that produced this response.
    pub fn kind(&self) -> CalculatorKind {
        match self {
            Self::LoanPayment(_) => CalculatorKind::LoanPayment,
            Self::SavingsGrowth(_) => CalculatorKind::SavingsGrowth,
            Self::CompoundInterest(_) => CalculatorKind::CompoundInterest,
            Self::MortgageAffordability(_) => CalculatorKind::MortgageAffordability,
            Self::Retirement(_) => CalculatorKind::Retirement,
            Self::DebtPayoff(_) => CalculatorKind::DebtPayoff,
            Self::Roi(_) => CalculatorKind::Roi,
            Self::BreakEven(_) => CalculatorKind::BreakEven,
            Self::EmergencyFund(_) => CalculatorKind::EmergencyFund,
            Self::InflationAdjuster(_) => CalculatorKind::InflationAdjuster,
        }
    }
}

/// Knobs applied by [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationOptions {
    /// Clamp inputs into their ranges before calculating.
    pub clamp_inputs: bool,
    /// Month ceiling for the debt payoff simulation.
    pub max_payoff_months: u32,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            clamp_inputs: true,
            max_payoff_months: DEFAULT_MAX_MONTHS,
        }
    }
}

/// Runs the calculator named by `request`.
pub fn evaluate(request: &CalculationRequest, options: &EvaluationOptions) -> CalculationResponse {
    let request = if options.clamp_inputs {
        let clamped = request.clamped();
        if clamped != *request {
            log::debug!("clamped out-of-range inputs for {}", request.kind());
        }
        clamped
    } else {
        *request
    };

    log::debug!("evaluating {}", request.kind());

    match &request {
        CalculationRequest::LoanPayment(i) => {
            CalculationResponse::LoanPayment(LoanPayment.calculate(i))
        }
        CalculationRequest::SavingsGrowth(i) => {
            CalculationResponse::SavingsGrowth(SavingsGrowth.calculate(i))
        }
        CalculationRequest::CompoundInterest(i) => {
            CalculationResponse::CompoundInterest(CompoundInterest.calculate(i))
        }
        CalculationRequest::MortgageAffordability(i) => {
            CalculationResponse::MortgageAffordability(MortgageAffordability.calculate(i))
        }
        CalculationRequest::Retirement(i) => {
            CalculationResponse::Retirement(RetirementProjection.calculate(i))
        }
        CalculationRequest::DebtPayoff(i) => CalculationResponse::DebtPayoff(
            DebtPayoff::new(options.max_payoff_months).calculate(i),
        ),
        CalculationRequest::Roi(i) => CalculationResponse::Roi(ReturnOnInvestment.calculate(i)),
        CalculationRequest::BreakEven(i) => CalculationResponse::BreakEven(BreakEven.calculate(i)),
        CalculationRequest::EmergencyFund(i) => {
            CalculationResponse::EmergencyFund(EmergencyFund.calculate(i))
        }
        CalculationRequest::InflationAdjuster(i) => {
            CalculationResponse::InflationAdjuster(InflationAdjuster.calculate(i))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fincalc_core::FincalcError;

    #[test]
    fn test_decode_request() {
        let json = r#"{"calculator":"loan-payment","inputs":{"principal":25000,"apr":6.9,"years":5}}"#;
        let request = CalculationRequest::from_json(json).unwrap();
        assert_eq!(request, CalculationRequest::LoanPayment(LoanInput::new(25_000.0, 6.9, 5.0)));
        assert_eq!(request.kind(), CalculatorKind::LoanPayment);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let json = r#"{"calculator":"break-even","inputs":{"fixed_costs":3000}}"#;
        let request = CalculationRequest::from_json(json).unwrap();
        assert_eq!(
            request,
            CalculationRequest::BreakEven(BreakEvenInput::new(3000.0, 50.0, 20.0))
        );
    }

    #[test]
    fn test_unknown_calculator_is_serialization_error() {
        let err = CalculationRequest::from_json(r#"{"calculator":"tax","inputs":{}}"#).unwrap_err();
        assert!(matches!(err, FincalcError::Serialization { .. }));
    }

    #[test]
    fn test_every_kind_evaluates_to_same_kind() {
        let options = EvaluationOptions::default();
        for kind in CalculatorKind::all() {
            let response = evaluate(&CalculationRequest::default_for(*kind), &options);
            assert_eq!(response.kind(), *kind);
        }
    }

    #[test]
    fn test_clamping_is_optional() {
        let request = CalculationRequest::EmergencyFund(EmergencyFundInput::new(1000.0, 48.0));

        let clamped = evaluate(&request, &EvaluationOptions::default());
        assert_eq!(
            clamped,
            CalculationResponse::EmergencyFund(EmergencyFundResult { target: 24_000.0 })
        );

        let raw = evaluate(
            &request,
            &EvaluationOptions {
                clamp_inputs: false,
                ..EvaluationOptions::default()
            },
        );
        assert_eq!(
            raw,
            CalculationResponse::EmergencyFund(EmergencyFundResult { target: 48_000.0 })
        );
    }

    #[test]
    fn test_payoff_ceiling_is_honored() {
        let request = CalculationRequest::default_for(CalculatorKind::DebtPayoff);
        let options = EvaluationOptions {
            max_payoff_months: 24,
            ..EvaluationOptions::default()
        };
        assert_eq!(
            evaluate(&request, &options),
            CalculationResponse::DebtPayoff(DebtPayoffResult::UNREACHABLE)
        );
    }

    #[test]
    fn test_response_json_shape() {
        let response = evaluate(
            &CalculationRequest::default_for(CalculatorKind::Roi),
            &EvaluationOptions::default(),
        );
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["calculator"], "roi");
        assert_eq!(value["result"]["profit"], 2000.0);
        assert_relative_eq!(value["result"]["roi_percent"].as_f64().unwrap(), 20.0);
    }

    #[test]
    fn test_unreachable_serializes_as_null() {
        let request = CalculationRequest::DebtPayoff(DebtPayoffInput::new(10_000.0, 19.99, 100.0));
        let value = serde_json::to_value(evaluate(&request, &EvaluationOptions::default())).unwrap();
        assert!(value["result"]["months"].is_null());
        assert!(value["result"]["total_interest"].is_null());
    }
}
