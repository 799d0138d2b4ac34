//! The facade exposes every calculator under one import.

use approx::assert_relative_eq;
use fincalc::prelude::*;

#[test]
fn test_every_calculator_is_reachable() {
    let options = EvaluationOptions::default();
    for kind in CalculatorKind::all() {
        let response = evaluate(&CalculationRequest::default_for(*kind), &options);
        assert_eq!(response.kind(), *kind);
    }
}

#[test]
fn test_default_inputs() {
    let savings = SavingsGrowth.calculate(&SavingsInput::default());
    assert_eq!(format_currency(savings.future_value, Currency::USD), "$34,350.47");

    let mortgage = MortgageAffordability.calculate(&MortgageInput::default());
    assert_relative_eq!(mortgage.max_payment, 2240.0, max_relative = 1e-12);

    let retirement = RetirementProjection.calculate(&RetirementInput::default());
    assert_eq!(
        format_currency(retirement.real, Currency::USD),
        "$552,314.57"
    );

    let roi = ReturnOnInvestment.calculate(&RoiInput::default());
    assert_eq!(format_percent(roi.roi_percent, 2), "20.00%");

    let debt = DebtPayoff::default().calculate(&DebtPayoffInput::default());
    assert_eq!(debt.months, Some(50));
    assert_eq!(format_optional_currency(debt.total_interest, Currency::USD), "$4,714.12");
}

#[test]
fn test_module_paths() {
    assert_eq!(fincalc::math::tvm::months(2.5), 30.0);
    assert_eq!(fincalc::PLACEHOLDER, "-");
    assert_eq!(fincalc::calculators::DEFAULT_MAX_MONTHS, 2000);
}
