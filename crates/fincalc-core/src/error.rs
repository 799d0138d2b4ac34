//! Error types for the fincalc library.
//!
//! Calculators themselves are total and never return errors. These errors
//! belong to the edges: decoding requests, naming calculators and currencies.

use thiserror::Error;

/// A specialized Result type for fincalc operations.
pub type FincalcResult<T> = Result<T, FincalcError>;

/// The main error type for fincalc operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FincalcError {
    /// No calculator is registered under the given identifier.
    #[error("Unknown calculator: {name}")]
    UnknownCalculator {
        /// The identifier that failed to resolve.
        name: String,
    },

    /// The currency code is not supported.
    #[error("Unknown currency: {code}")]
    UnknownCurrency {
        /// The rejected ISO code.
        code: String,
    },

    /// Encoding or decoding a request/response failed.
    #[error("Serialization error: {reason}")]
    Serialization {
        /// Description of the failure.
        reason: String,
    },
}

impl FincalcError {
    /// Creates an unknown calculator error.
    #[must_use]
    pub fn unknown_calculator(name: impl Into<String>) -> Self {
        Self::UnknownCalculator { name: name.into() }
    }

    /// Creates an unknown currency error.
    #[must_use]
    pub fn unknown_currency(code: impl Into<String>) -> Self {
        Self::UnknownCurrency { code: code.into() }
    }
}

impl From<serde_json::Error> for FincalcError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}
