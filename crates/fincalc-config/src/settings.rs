//! Configuration types.

use serde::{Deserialize, Serialize};

use fincalc_calculators::{EvaluationOptions, DEFAULT_MAX_MONTHS};
use fincalc_core::{Currency, CurrencyFormatter, PLACEHOLDER};

use crate::error::{Validate, ValidationError};

/// Largest accepted `fraction_digits` / `percent_digits`.
pub const MAX_DISPLAY_DIGITS: u32 = 8;

/// Largest accepted debt payoff month ceiling (1000 years).
pub const MAX_PAYOFF_MONTHS: u32 = 12_000;

// =============================================================================
// DISPLAY
// =============================================================================

/// How results are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Display currency.
    #[serde(default)]
    pub currency: Currency,

    /// Text shown for undefined or non-finite results.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Digits after the decimal point for money. `None` uses the currency's
    /// minor units (2 for USD, 0 for JPY).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fraction_digits: Option<u32>,

    /// Digits after the decimal point for percentages.
    #[serde(default = "default_percent_digits")]
    pub percent_digits: u32,
}

fn default_placeholder() -> String {
    PLACEHOLDER.to_string()
}

fn default_percent_digits() -> u32 {
    2
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            placeholder: default_placeholder(),
            fraction_digits: None,
            percent_digits: default_percent_digits(),
        }
    }
}

impl DisplayConfig {
    /// Builds the currency formatter described by this section.
    pub fn formatter(&self) -> CurrencyFormatter {
        let formatter =
            CurrencyFormatter::new(self.currency).with_placeholder(self.placeholder.clone());
        match self.fraction_digits {
            Some(digits) => formatter.with_fraction_digits(digits),
            None => formatter,
        }
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if let Some(digits) = self.fraction_digits {
            if digits > MAX_DISPLAY_DIGITS {
                errors.push(ValidationError::with_rule(
                    "display.fraction_digits",
                    format!("{digits} exceeds maximum of {MAX_DISPLAY_DIGITS}"),
                    "max_digits",
                ));
            }
        }

        if self.percent_digits > MAX_DISPLAY_DIGITS {
            errors.push(ValidationError::with_rule(
                "display.percent_digits",
                format!(
                    "{} exceeds maximum of {MAX_DISPLAY_DIGITS}",
                    self.percent_digits
                ),
                "max_digits",
            ));
        }

        if self.placeholder.is_empty() {
            errors.push(ValidationError::new(
                "display.placeholder",
                "Placeholder cannot be empty",
            ));
        }

        errors
    }
}

// =============================================================================
// DEBT PAYOFF
// =============================================================================

/// Debt payoff simulation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtPayoffConfig {
    /// Months simulated before a debt is reported as never paid off.
    #[serde(default = "default_max_months")]
    pub max_months: u32,
}

fn default_max_months() -> u32 {
    DEFAULT_MAX_MONTHS
}

impl Default for DebtPayoffConfig {
    fn default() -> Self {
        Self {
            max_months: default_max_months(),
        }
    }
}

impl Validate for DebtPayoffConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.max_months == 0 || self.max_months > MAX_PAYOFF_MONTHS {
            errors.push(ValidationError::with_rule(
                "debt_payoff.max_months",
                format!("Must be between 1 and {MAX_PAYOFF_MONTHS}"),
                "valid_ceiling",
            ));
        }
        errors
    }
}

// =============================================================================
// ROOT
// =============================================================================

/// Complete fincalc configuration.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FincalcConfig {
    /// Clamp inputs to their calculator's ranges before evaluating.
    #[serde(default = "default_true")]
    pub clamp_inputs: bool,

    /// Result rendering.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Debt payoff simulation.
    #[serde(default)]
    pub debt_payoff: DebtPayoffConfig,
}

fn default_true() -> bool {
    true
}

impl Default for FincalcConfig {
    fn default() -> Self {
        Self {
            clamp_inputs: true,
            display: DisplayConfig::default(),
            debt_payoff: DebtPayoffConfig::default(),
        }
    }
}

impl FincalcConfig {
    /// Sets the display currency.
    #[must_use]
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.display.currency = currency;
        self
    }

    /// Sets the debt payoff month ceiling.
    #[must_use]
    pub fn with_max_payoff_months(mut self, months: u32) -> Self {
        self.debt_payoff.max_months = months;
        self
    }

    /// Enables or disables input clamping.
    #[must_use]
    pub fn with_clamp_inputs(mut self, clamp: bool) -> Self {
        self.clamp_inputs = clamp;
        self
    }

    /// Options for [`fincalc_calculators::evaluate`].
    pub fn evaluation_options(&self) -> EvaluationOptions {
        EvaluationOptions {
            clamp_inputs: self.clamp_inputs,
            max_payoff_months: self.debt_payoff.max_months,
        }
    }

    /// Currency formatter for the configured display settings.
    pub fn formatter(&self) -> CurrencyFormatter {
        self.display.formatter()
    }
}

impl Validate for FincalcConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = self.display.validate();
        errors.extend(self.debt_payoff.validate());
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FincalcConfig::default();
        assert!(config.clamp_inputs);
        assert_eq!(config.display.currency, Currency::USD);
        assert_eq!(config.display.placeholder, "-");
        assert_eq!(config.display.percent_digits, 2);
        assert_eq!(config.debt_payoff.max_months, 2000);
        assert!(config.is_valid());
    }

    #[test]
    fn test_evaluation_options() {
        let options = FincalcConfig::default()
            .with_max_payoff_months(600)
            .with_clamp_inputs(false)
            .evaluation_options();
        assert_eq!(options.max_payoff_months, 600);
        assert!(!options.clamp_inputs);
    }

    #[test]
    fn test_formatter() {
        let mut config = FincalcConfig::default().with_currency(Currency::EUR);
        assert_eq!(config.formatter().format(1234.5), "€1,234.50");

        config.display.fraction_digits = Some(0);
        config.display.placeholder = "n/a".to_string();
        let formatter = config.formatter();
        assert_eq!(formatter.format(1234.5), "€1,235");
        assert_eq!(formatter.format_optional(None), "n/a");
    }

    #[test]
    fn test_currency_minor_units_by_default() {
        let config = FincalcConfig::default().with_currency(Currency::JPY);
        assert_eq!(config.formatter().format(1234.4), "¥1,234");
    }

    #[test]
    fn test_validation_collects_every_error() {
        let mut config = FincalcConfig::default().with_max_payoff_months(0);
        config.display.fraction_digits = Some(20);
        config.display.placeholder.clear();

        let errors = config.validate();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "display.fraction_digits",
                "display.placeholder",
                "debt_payoff.max_months"
            ]
        );
    }
}
