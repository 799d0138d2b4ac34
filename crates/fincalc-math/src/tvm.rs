//! Time value of money.
//!
//! Rates passed to the annuity functions are *periodic decimal* rates
//! (`0.005` for 0.5% per month). Use [`monthly_rate`] to convert a nominal
//! annual percentage such as an APR.
//!
//! # Formulas
//!
//! ```text
//! growth  G   = (1 + r)^n
//! FV factor   = (G - 1) / r          -> n      as r -> 0
//! PV factor   = (G - 1) / (r * G)    -> n      as r -> 0
//! payment     = PV * r * G / (G - 1) -> PV / n as r -> 0
//! ```

/// Months in a year; nominal annual rates are divided by this.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Converts a nominal annual percentage (e.g. `6.9`) to a monthly decimal rate.
///
/// ```
/// use fincalc_math::tvm::monthly_rate;
/// assert!((monthly_rate(12.0) - 0.01).abs() < 1e-15);
/// ```
#[inline]
pub fn monthly_rate(annual_percent: f64) -> f64 {
    annual_percent / 100.0 / MONTHS_PER_YEAR
}

/// Number of monthly periods in `years`.
#[inline]
pub fn months(years: f64) -> f64 {
    years * MONTHS_PER_YEAR
}

/// `(1 + rate)^periods`.
#[inline]
pub fn growth_factor(rate: f64, periods: f64) -> f64 {
    (1.0 + rate).powf(periods)
}

/// Future value of 1 paid at the end of each of `periods` periods.
pub fn annuity_future_value_factor(rate: f64, periods: f64) -> f64 {
    if rate == 0.0 {
        return periods;
    }
    (growth_factor(rate, periods) - 1.0) / rate
}

/// Present value of 1 paid at the end of each of `periods` periods.
pub fn annuity_present_value_factor(rate: f64, periods: f64) -> f64 {
    if rate == 0.0 {
        return periods;
    }
    let g = growth_factor(rate, periods);
    (g - 1.0) / (rate * g)
}

/// Level payment that amortizes `present_value` over `periods` periods.
///
/// `periods` must be positive.
pub fn annuity_payment(present_value: f64, rate: f64, periods: f64) -> f64 {
    if rate == 0.0 {
        return present_value / periods;
    }
    let g = growth_factor(rate, periods);
    present_value * rate * g / (g - 1.0)
}

/// Grows `amount` at `annual_percent` compounded once a year for `years`.
#[inline]
pub fn compound(amount: f64, annual_percent: f64, years: f64) -> f64 {
    amount * growth_factor(annual_percent / 100.0, years)
}

/// Discounts `amount` at `annual_percent` per year over `years`.
#[inline]
pub fn discount(amount: f64, annual_percent: f64, years: f64) -> f64 {
    amount / growth_factor(annual_percent / 100.0, years)
}
