//! Property-based tests for clamping and currency formatting.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;

use fincalc_core::{format_currency, Bounds, Currency, CurrencyFormatter, PLACEHOLDER};

/// Parses `-$1,234.50` back into `-1234.5`.
fn parse_formatted(s: &str, currency: Currency) -> f64 {
    let negative = s.starts_with('-');
    let digits: String = s
        .trim_start_matches('-')
        .trim_start_matches(currency.symbol())
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let value: f64 = digits.parse().unwrap();
    if negative {
        -value
    } else {
        value
    }
}

fn bounds() -> impl Strategy<Value = Bounds> {
    (-1e6f64..1e6, 0.0f64..1e6).prop_map(|(min, width)| Bounds::new(min, min + width))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn clamp_lands_inside(b in bounds(), value in any::<f64>()) {
        let clamped = b.clamp(value);
        prop_assert!(b.contains(clamped));
        prop_assert_eq!(b.clamp(clamped), clamped);
    }

    #[test]
    fn clamp_keeps_values_in_range(b in bounds(), t in 0.0f64..=1.0) {
        let value = (b.min + (b.max - b.min) * t).min(b.max);
        prop_assert_eq!(b.clamp(value), value);
    }

    #[test]
    fn usd_reads_back_within_half_a_cent(value in -1e9f64..1e9) {
        let text = format_currency(value, Currency::USD);
        prop_assert!(text.contains('$'));
        prop_assert!(text.ends_with(|c: char| c.is_ascii_digit()));
        assert_abs_diff_eq!(parse_formatted(&text, Currency::USD), value, epsilon = 0.005 + 1e-6);
    }

    #[test]
    fn groups_have_three_digits(value in 0.0f64..1e12) {
        let text = format_currency(value, Currency::EUR);
        let int_part = text
            .trim_start_matches(Currency::EUR.symbol())
            .split('.')
            .next()
            .unwrap();
        let groups: Vec<_> = int_part.split(',').collect();
        prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
        for group in &groups[1..] {
            prop_assert_eq!(group.len(), 3);
        }
    }

    #[test]
    fn fraction_digits_are_respected(value in -1e6f64..1e6, digits in 0u32..=6) {
        let text = CurrencyFormatter::new(Currency::GBP)
            .with_fraction_digits(digits)
            .format(value);
        let fraction = text.split_once('.').map_or(0, |(_, f)| f.len());
        prop_assert_eq!(fraction, digits as usize);
    }
}

#[test]
fn non_finite_values_use_placeholder() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(format_currency(value, Currency::USD), PLACEHOLDER);
    }
}
