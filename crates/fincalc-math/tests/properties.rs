//! Property-based tests for the time-value-of-money identities.

use approx::assert_relative_eq;
use proptest::prelude::*;

use fincalc_math::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn payment_amortizes_present_value(
        pv in 1.0f64..1e7,
        apr in 0.0f64..30.0,
        years in 1u32..=40,
    ) {
        let r = monthly_rate(apr);
        let n = months(f64::from(years));
        let pmt = annuity_payment(pv, r, n);
        assert_relative_eq!(pmt * annuity_present_value_factor(r, n), pv, max_relative = 1e-9);
        // never less than repaying principal alone
        prop_assert!(pmt >= pv / n * (1.0 - 1e-12));
    }

    #[test]
    fn future_value_factor_covers_deposits(apr in 0.0f64..30.0, n in 1u32..=600) {
        let n = f64::from(n);
        let r = monthly_rate(apr);
        prop_assert!(annuity_future_value_factor(r, n) >= n * (1.0 - 1e-12));
        prop_assert!(annuity_present_value_factor(r, n) <= n * (1.0 + 1e-12));
    }

    #[test]
    fn factors_are_related_by_growth(apr in 0.1f64..30.0, n in 1u32..=600) {
        let n = f64::from(n);
        let r = monthly_rate(apr);
        assert_relative_eq!(
            annuity_future_value_factor(r, n),
            annuity_present_value_factor(r, n) * growth_factor(r, n),
            max_relative = 1e-9
        );
    }

    #[test]
    fn discount_undoes_compound(amount in 0.0f64..1e9, rate in 0.0f64..20.0, years in 0.0f64..60.0) {
        let there_and_back = discount(compound(amount, rate, years), rate, years);
        assert_relative_eq!(there_and_back, amount, max_relative = 1e-9, epsilon = 1e-9);
    }
}
