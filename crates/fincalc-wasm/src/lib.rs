//! WebAssembly bindings for the fincalc calculators.
//!
//! Every calculator takes a plain JS object with the calculator's input
//! fields (missing fields take the defaults, out-of-range values are clamped)
//! and returns a plain JS object. Undefined results come back as `null`.
//!
//! ```js
//! import init, { loan_payment, format_currency } from "fincalc-wasm";
//!
//! await init();
//! const r = loan_payment({ principal: 25000, apr: 6.9, years: 5 });
//! format_currency(r.payment, "USD"); // "$493.85"
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use fincalc_calculators::{
    evaluate as evaluate_request, BreakEven, CalculationRequest, CalculatorKind, CompoundInterest,
    DebtPayoff, EmergencyFund, EvaluationOptions, InflationAdjuster, LoanPayment,
    MortgageAffordability, RetirementProjection, ReturnOnInvestment, SavingsGrowth,
    DEFAULT_MAX_MONTHS,
};
use fincalc_core::{Calculator, ClampInputs, Currency, CurrencyFormatter, FincalcError};

// ============================================================================
// Initialization
// ============================================================================

/// Initialize the WASM module (sets up panic hook for better error messages).
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// ============================================================================
// Helpers
// ============================================================================

/// Catalog entry returned by [`list_calculators`].
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorInfo {
    /// Stable id, as used in `evaluate` requests.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// One-line description.
    pub description: &'static str,
}

/// The catalog in display order.
pub fn catalog() -> Vec<CalculatorInfo> {
    CalculatorKind::all()
        .iter()
        .map(|kind| CalculatorInfo {
            id: kind.id(),
            title: kind.title(),
            description: kind.description(),
        })
        .collect()
}

/// Formats `value` in the currency named by `code` (default USD).
pub fn format_amount(value: f64, code: Option<&str>) -> Result<String, FincalcError> {
    let currency = match code {
        Some(code) => code.parse::<Currency>()?,
        None => Currency::default(),
    };
    Ok(CurrencyFormatter::new(currency).format(value))
}

fn js_error(message: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&message.to_string()).into()
}

/// `None` becomes `null` rather than `undefined`.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(js_error)
}

fn from_js<T: DeserializeOwned + Default>(value: JsValue) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(js_error)
}

fn run<C>(calculator: &C, input: JsValue) -> Result<JsValue, JsValue>
where
    C: Calculator,
    C::Input: DeserializeOwned + Default + ClampInputs,
    C::Output: Serialize,
{
    let input: C::Input = from_js(input)?;
    to_js(&calculator.calculate(&input.clamped()))
}

// ============================================================================
// Calculators
// ============================================================================

/// Monthly payment, total interest and total cost of a loan.
#[wasm_bindgen]
pub fn loan_payment(input: JsValue) -> Result<JsValue, JsValue> {
    run(&LoanPayment, input)
}

/// Future value of savings with monthly contributions.
#[wasm_bindgen]
pub fn savings_growth(input: JsValue) -> Result<JsValue, JsValue> {
    run(&SavingsGrowth, input)
}

/// Lump-sum growth with periodic compounding.
#[wasm_bindgen]
pub fn compound_interest(input: JsValue) -> Result<JsValue, JsValue> {
    run(&CompoundInterest, input)
}

/// Maximum monthly payment and loan under the 28/36 rule.
#[wasm_bindgen]
pub fn mortgage_affordability(input: JsValue) -> Result<JsValue, JsValue> {
    run(&MortgageAffordability, input)
}

/// Nominal and inflation-adjusted nest egg at retirement.
#[wasm_bindgen]
pub fn retirement_projection(input: JsValue) -> Result<JsValue, JsValue> {
    run(&RetirementProjection, input)
}

/// Months and interest to pay off a debt; `null` when it never amortizes.
#[wasm_bindgen]
pub fn debt_payoff(input: JsValue, max_months: Option<u32>) -> Result<JsValue, JsValue> {
    let calculator = DebtPayoff::new(max_months.unwrap_or(DEFAULT_MAX_MONTHS).max(1));
    run(&calculator, input)
}

/// Profit and ROI percentage.
#[wasm_bindgen]
pub fn roi(input: JsValue) -> Result<JsValue, JsValue> {
    run(&ReturnOnInvestment, input)
}

/// Break-even units and revenue; `null` when the margin is not positive or
/// the volume is too large to count.
#[wasm_bindgen]
pub fn break_even(input: JsValue) -> Result<JsValue, JsValue> {
    run(&BreakEven, input)
}

/// Emergency fund target.
#[wasm_bindgen]
pub fn emergency_fund(input: JsValue) -> Result<JsValue, JsValue> {
    run(&EmergencyFund, input)
}

/// Future value and present value under constant inflation.
#[wasm_bindgen]
pub fn inflation_adjuster(input: JsValue) -> Result<JsValue, JsValue> {
    run(&InflationAdjuster, input)
}

// ============================================================================
// Dispatch and formatting
// ============================================================================

/// Evaluates `{calculator, inputs}` and returns `{calculator, result}`.
#[wasm_bindgen]
pub fn evaluate(
    request: JsValue,
    clamp_inputs: Option<bool>,
    max_payoff_months: Option<u32>,
) -> Result<JsValue, JsValue> {
    let request: CalculationRequest = serde_wasm_bindgen::from_value(request).map_err(js_error)?;
    let defaults = EvaluationOptions::default();
    let options = EvaluationOptions {
        clamp_inputs: clamp_inputs.unwrap_or(defaults.clamp_inputs),
        max_payoff_months: max_payoff_months
            .unwrap_or(defaults.max_payoff_months)
            .max(1),
    };
    to_js(&evaluate_request(&request, &options))
}

/// `[{id, title, description}, ...]` for every calculator.
#[wasm_bindgen]
pub fn list_calculators() -> Result<JsValue, JsValue> {
    to_js(&catalog())
}

/// Formats a currency amount (`"$1,234.50"`); non-finite values give `"-"`.
#[wasm_bindgen]
pub fn format_currency(value: f64, currency: Option<String>) -> Result<String, JsValue> {
    format_amount(value, currency.as_deref()).map_err(js_error)
}

/// Formats an already-scaled percentage (`20` → `"20.00%"`).
#[wasm_bindgen]
pub fn format_percent(value: f64, digits: Option<u32>) -> String {
    fincalc_core::format_percent(value, digits.unwrap_or(2) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog() {
        let entries = catalog();
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0].id, "loan-payment");
        assert_eq!(entries[5].title, "Debt payoff");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1234.5, None).unwrap(), "$1,234.50");
        assert_eq!(format_amount(1234.5, Some("gbp")).unwrap(), "£1,234.50");
        assert_eq!(format_amount(f64::NAN, Some("EUR")).unwrap(), "-");
        assert!(format_amount(1.0, Some("XYZ")).is_err());
    }
}
