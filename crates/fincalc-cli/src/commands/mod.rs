//! CLI command implementations.

pub mod break_even;
pub mod compound;
pub mod config;
pub mod debt;
pub mod emergency;
pub mod eval;
pub mod inflation;
pub mod list;
pub mod loan;
pub mod mortgage;
pub mod retirement;
pub mod roi;
pub mod savings;

// Re-export submodules for convenience
pub use break_even::BreakEvenArgs;
pub use compound::CompoundArgs;
pub use config::ConfigArgs;
pub use debt::DebtArgs;
pub use emergency::EmergencyArgs;
pub use eval::EvalArgs;
pub use inflation::InflationArgs;
pub use loan::LoanArgs;
pub use mortgage::MortgageArgs;
pub use retirement::RetirementArgs;
pub use roi::RoiArgs;
pub use savings::SavingsArgs;

use std::path::PathBuf;

use fincalc_config::FincalcConfig;
use fincalc_core::Currency;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Requested output format.
    pub format: OutputFormat,
    /// Effective configuration (file, environment, then flags).
    pub config: FincalcConfig,
    /// `--config`, if given.
    pub config_path: Option<PathBuf>,
}

/// Parses a display currency code.
pub fn parse_currency(code: &str) -> CliResult<Currency> {
    Currency::from_code(code).ok_or_else(|| {
        let supported: Vec<_> = Currency::ALL.iter().map(Currency::code).collect();
        CliError::InvalidCurrency(code.to_string(), supported.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("gbp").unwrap(), Currency::GBP);
        let err = parse_currency("BTC").unwrap_err();
        assert!(err.to_string().contains("USD, EUR"));
    }
}
