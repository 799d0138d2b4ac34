//! Browser-side tests. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use serde::Deserialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use fincalc_wasm::*;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Deserialize)]
struct Payoff {
    months: Option<u32>,
    total_interest: Option<f64>,
}

fn object(json: &str) -> JsValue {
    js_sys::JSON::parse(json).unwrap()
}

#[wasm_bindgen_test]
fn loan_payment_from_object() {
    let result = loan_payment(object(r#"{"principal":12000,"apr":0,"years":1}"#)).unwrap();
    let payment = js_sys::Reflect::get(&result, &"payment".into()).unwrap();
    assert_eq!(payment.as_f64(), Some(1000.0));
}

#[wasm_bindgen_test]
fn missing_input_uses_defaults() {
    let result: Payoff =
        serde_wasm_bindgen::from_value(debt_payoff(JsValue::UNDEFINED, None).unwrap()).unwrap();
    assert_eq!(result.months, Some(50));
}

#[wasm_bindgen_test]
fn unreachable_payoff_is_null() {
    let result = debt_payoff(object(r#"{"payment":100}"#), None).unwrap();
    let months = js_sys::Reflect::get(&result, &"months".into()).unwrap();
    assert!(months.is_null());

    let decoded: Payoff = serde_wasm_bindgen::from_value(result).unwrap();
    assert_eq!(decoded.total_interest, None);
}

#[wasm_bindgen_test]
fn evaluate_request() {
    let response = evaluate(
        object(r#"{"calculator":"emergency-fund","inputs":{"months":36}}"#),
        None,
        None,
    )
    .unwrap();
    let result = js_sys::Reflect::get(&response, &"result".into()).unwrap();
    let target = js_sys::Reflect::get(&result, &"target".into()).unwrap();
    assert_eq!(target.as_f64(), Some(60_000.0));

    assert!(evaluate(object(r#"{"calculator":"tax","inputs":{}}"#), None, None).is_err());
}

#[wasm_bindgen_test]
fn formatting() {
    assert_eq!(format_currency(1234.5, None).unwrap(), "$1,234.50");
    assert!(format_currency(1.0, Some("XYZ".to_string())).is_err());
    assert_eq!(format_percent(20.0, None), "20.00%");
}
