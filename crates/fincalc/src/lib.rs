//! # fincalc
//!
//! Ten personal-finance calculators behind one import:
//!
//! ```rust
//! use fincalc::prelude::*;
//!
//! let loan = LoanPayment.calculate(&LoanInput::new(25_000.0, 6.9, 5.0));
//! assert_eq!(format_currency(loan.payment, Currency::USD), "$493.85");
//!
//! let debt = DebtPayoff::default().calculate(&DebtPayoffInput::new(10_000.0, 19.99, 100.0));
//! assert_eq!(debt.months, None);
//! ```
//!
//! The pieces live in separate crates:
//!
//! - `fincalc-core`: error type, `Calculator`/`ClampInputs` traits, `Currency`,
//!   formatting (re-exported at the root)
//! - [`math`]: time-value-of-money helpers
//! - [`calculators`]: the calculators, catalog and JSON dispatch
//! - `config` (feature `config`): configuration loading

#![warn(missing_docs)]

pub use fincalc_calculators as calculators;
pub use fincalc_math as math;

#[cfg(feature = "config")]
pub use fincalc_config as config;

pub use fincalc_calculators::*;
pub use fincalc_core::{
    format_currency, format_optional_currency, format_percent, Bounds, Calculator, ClampInputs,
    Currency, CurrencyFormatter, FincalcError, FincalcResult, PLACEHOLDER,
};

/// Everything needed to run and display a calculation.
pub mod prelude {
    pub use fincalc_calculators::prelude::*;
    pub use fincalc_core::prelude::*;
}
