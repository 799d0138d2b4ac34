//! Rendering of calculator outputs for display.
//!
//! Currency amounts are rounded half away from zero in decimal (not binary)
//! arithmetic, grouped by thousands and prefixed with the currency symbol,
//! with the sign in front of the symbol (`-$1,250.00`). Anything that is not
//! a finite number, or an undefined result, renders as a placeholder.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::types::Currency;

/// Text shown in place of an undefined or non-finite result.
pub const PLACEHOLDER: &str = "-";

/// Formats currency amounts for one display currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormatter {
    /// Currency whose symbol is used.
    pub currency: Currency,
    /// Digits after the decimal separator.
    pub fraction_digits: u32,
    /// Text used for non-finite or undefined values.
    pub placeholder: String,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

impl CurrencyFormatter {
    /// Creates a formatter with the currency's standard minor units.
    #[must_use]
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            fraction_digits: currency.decimal_places(),
            placeholder: PLACEHOLDER.to_string(),
        }
    }

    /// Overrides the number of fraction digits.
    #[must_use]
    pub fn with_fraction_digits(mut self, digits: u32) -> Self {
        self.fraction_digits = digits;
        self
    }

    /// Overrides the placeholder text.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Formats a value, or the placeholder if it is not finite.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return self.placeholder.clone();
        }

        let digits = rounded_abs(value, self.fraction_digits);
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, f),
            None => (digits.as_str(), ""),
        };

        let mut out = String::with_capacity(digits.len() + 8);
        if value < 0.0 && digits.bytes().any(|b| matches!(b, b'1'..=b'9')) {
            out.push('-');
        }
        out.push_str(self.currency.symbol());
        out.push_str(&group_thousands(int_part));
        if self.fraction_digits > 0 {
            out.push('.');
            out.push_str(frac_part);
            for _ in frac_part.len()..self.fraction_digits as usize {
                out.push('0');
            }
        }
        out
    }

    /// Formats an optional value; `None` renders as the placeholder.
    pub fn format_optional(&self, value: Option<f64>) -> String {
        value.map_or_else(|| self.placeholder.clone(), |v| self.format(v))
    }
}

/// Formats `value` in `currency` with its standard minor units.
pub fn format_currency(value: f64, currency: Currency) -> String {
    CurrencyFormatter::new(currency).format(value)
}

/// Formats an optional amount; `None` renders as [`PLACEHOLDER`].
pub fn format_optional_currency(value: Option<f64>, currency: Currency) -> String {
    CurrencyFormatter::new(currency).format_optional(value)
}

/// Formats a percentage that is already scaled by 100 (`20.0` → `"20.00%"`).
pub fn format_percent(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{:.*}%", digits, value)
}

/// Absolute value rounded to `dp` places, as plain digits.
fn rounded_abs(value: f64, dp: u32) -> String {
    match Decimal::from_f64(value.abs()) {
        Some(d) => d
            .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
            .to_string(),
        None => {
            log::trace!("amount {value} exceeds decimal range, formatting as f64");
            format!("{:.*}", dp as usize, value.abs())
        }
    }
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
