//! # fincalc Configuration
//!
//! Settings shared by the fincalc front ends: display currency and rounding,
//! input clamping, and the debt payoff month ceiling.
//!
//! # Example
//!
//! ```rust
//! use fincalc_config::{FincalcConfig, Validate};
//! use fincalc_core::Currency;
//!
//! let config = FincalcConfig::from_toml_str(
//!     r#"
//!     clamp_inputs = true
//!
//!     [display]
//!     currency = "EUR"
//!
//!     [debt_payoff]
//!     max_months = 600
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.display.currency, Currency::EUR);
//! assert_eq!(config.evaluation_options().max_payoff_months, 600);
//! assert_eq!(config.formatter().format(1234.5), "€1,234.50");
//! assert!(config.is_valid());
//! ```
//!
//! # Sources
//!
//! | source | example |
//! |---|---|
//! | defaults | [`FincalcConfig::default`] |
//! | file | `~/.config/fincalc/config.toml`, or any `.toml`/`.json` path |
//! | environment | `FINCALC_CURRENCY`, `FINCALC_MAX_PAYOFF_MONTHS`, `FINCALC_CLAMP_INPUTS` |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod loader;
mod settings;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use loader::{ConfigFormat, ENV_CLAMP_INPUTS, ENV_CURRENCY, ENV_MAX_PAYOFF_MONTHS, ENV_VARS};
pub use settings::{
    DebtPayoffConfig, DisplayConfig, FincalcConfig, MAX_DISPLAY_DIGITS, MAX_PAYOFF_MONTHS,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::settings::{DebtPayoffConfig, DisplayConfig, FincalcConfig};
}
