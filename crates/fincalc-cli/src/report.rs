//! Running a calculation and rendering its result.

use serde_json::Value;

use fincalc_calculators::{evaluate, CalculationRequest, CalculationResponse, EvaluationOptions};
use fincalc_config::{DisplayConfig, FincalcConfig};
use fincalc_core::format_percent;

use crate::cli::OutputFormat;
use crate::output::{print_json, print_rows, KeyValue};

/// A request as evaluated, with its response.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    /// The request after clamping, if clamping is enabled.
    pub request: CalculationRequest,
    /// The calculator output.
    pub response: CalculationResponse,
}

impl Report {
    /// Clamps `request` if configured, then evaluates it.
    pub fn run(request: CalculationRequest, config: &FincalcConfig) -> Self {
        let options = config.evaluation_options();
        let request = if options.clamp_inputs {
            let clamped = request.clamped();
            if clamped != request {
                tracing::info!("{}: inputs clamped into range", request.kind());
            }
            clamped
        } else {
            request
        };

        let response = evaluate(
            &request,
            &EvaluationOptions {
                clamp_inputs: false,
                ..options
            },
        );
        tracing::debug!(?request, ?response, "evaluated");

        Self { request, response }
    }

    /// `{"calculator": ..., "inputs": {...}, "result": {...}}`.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        let mut value = serde_json::to_value(self.request)?;
        let response = serde_json::to_value(self.response)?;
        if let (Some(object), Some(result)) = (value.as_object_mut(), response.get("result")) {
            object.insert("result".to_string(), result.clone());
        }
        Ok(value)
    }

    /// Labelled, formatted result rows. The first row is the headline figure.
    pub fn rows(&self, display: &DisplayConfig) -> Vec<KeyValue> {
        let fmt = display.formatter();
        let money = |label: &str, v: f64| KeyValue::new(label, fmt.format(v));
        let maybe_money = |label: &str, v: Option<f64>| KeyValue::new(label, fmt.format_optional(v));
        let count = |label: &str, v: Option<String>| {
            KeyValue::new(label, v.unwrap_or_else(|| display.placeholder.clone()))
        };

        match &self.response {
            CalculationResponse::LoanPayment(r) => vec![
                money("Monthly payment", r.payment),
                money("Total interest", r.total_interest),
                money("Total cost", r.total_cost),
            ],
            CalculationResponse::SavingsGrowth(r) => vec![
                money("Future value", r.future_value),
                money("Total contributions", r.contributions),
                money("Total interest", r.interest),
            ],
            CalculationResponse::CompoundInterest(r) => vec![
                money("Final amount", r.amount),
                money("Total interest", r.interest),
            ],
            CalculationResponse::MortgageAffordability(r) => vec![
                money("Max monthly payment", r.max_payment),
                money("Estimated max loan", r.max_loan),
            ],
            CalculationResponse::Retirement(r) => vec![
                money("Projected (nominal)", r.nominal),
                money("Projected (today's money)", r.real),
                KeyValue::new("Years to retirement", r.years.to_string()),
            ],
            CalculationResponse::DebtPayoff(r) => vec![
                count("Months to payoff", r.months.map(|m| m.to_string())),
                maybe_money("Total interest", r.total_interest),
            ],
            CalculationResponse::Roi(r) => vec![
                KeyValue::new(
                    "ROI",
                    format_percent(r.roi_percent, display.percent_digits as usize),
                ),
                money("Profit", r.profit),
            ],
            CalculationResponse::BreakEven(r) => vec![
                count("Break-even units", r.units.map(|u| u.to_string())),
                maybe_money("Break-even revenue", r.revenue),
                money("Contribution margin", r.margin),
            ],
            CalculationResponse::EmergencyFund(r) => vec![money("Target fund", r.target)],
            CalculationResponse::InflationAdjuster(r) => vec![
                money("Future value", r.future_value),
                money("Present value", r.present_value),
            ],
        }
    }

    /// Prints the report in `format`.
    pub fn print(&self, display: &DisplayConfig, format: OutputFormat) -> anyhow::Result<()> {
        match format {
            OutputFormat::Json => print_json(&self.to_json()?),
            _ => print_rows(self.response.kind().title(), &self.rows(display), format),
        }
    }
}

/// Evaluates `request` and prints the result. Used by every calculator
/// subcommand.
pub fn run_and_print(
    request: CalculationRequest,
    config: &FincalcConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    Report::run(request, config).print(&config.display, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fincalc_calculators::{CalculatorKind, DebtPayoffInput, LoanInput};

    fn values(rows: &[KeyValue]) -> Vec<&str> {
        rows.iter().map(|r| r.value.as_str()).collect()
    }

    #[test]
    fn test_loan_rows() {
        let config = FincalcConfig::default();
        let report = Report::run(
            CalculationRequest::LoanPayment(LoanInput::default()),
            &config,
        );
        assert_eq!(
            values(&report.rows(&config.display)),
            ["$493.85", "$4,631.08", "$29,631.08"]
        );
    }

    #[test]
    fn test_unreachable_debt_uses_placeholder() {
        let config = FincalcConfig::default();
        let report = Report::run(
            CalculationRequest::DebtPayoff(DebtPayoffInput::new(10_000.0, 19.99, 100.0)),
            &config,
        );
        assert_eq!(values(&report.rows(&config.display)), ["-", "-"]);
    }

    #[test]
    fn test_clamping_follows_config() {
        let request = CalculationRequest::LoanPayment(LoanInput::new(1000.0, 250.0, 1.0));

        let clamped = Report::run(request, &FincalcConfig::default());
        assert_eq!(
            clamped.request,
            CalculationRequest::LoanPayment(LoanInput::new(1000.0, 100.0, 1.0))
        );

        let raw = Report::run(request, &FincalcConfig::default().with_clamp_inputs(false));
        assert_eq!(raw.request, request);
    }

    #[test]
    fn test_json_shape() {
        let report = Report::run(
            CalculationRequest::default_for(CalculatorKind::EmergencyFund),
            &FincalcConfig::default(),
        );
        let json = report.to_json().unwrap();
        assert_eq!(json["calculator"], "emergency-fund");
        assert_eq!(json["inputs"]["months"], 6.0);
        assert_eq!(json["result"]["target"], 15_000.0);
    }

    #[test]
    fn test_every_calculator_has_rows() {
        let config = FincalcConfig::default();
        for kind in CalculatorKind::all() {
            let report = Report::run(CalculationRequest::default_for(*kind), &config);
            assert!(!report.rows(&config.display).is_empty(), "{kind}");
        }
    }
}
