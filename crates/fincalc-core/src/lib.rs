//! # fincalc Core
//!
//! Core types, traits, and formatting shared by the fincalc calculators.
//!
//! This crate provides the foundational building blocks used throughout fincalc:
//!
//! - **Traits**: [`Calculator`] for pure input-to-output evaluation and
//!   [`ClampInputs`] for the caller-side range clamping
//! - **Types**: [`Bounds`] for closed clamping intervals and [`Currency`]
//! - **Formatting**: currency and percentage rendering with a placeholder for
//!   undefined results
//!
//! ## Design Philosophy
//!
//! - **Total Functions**: calculators never fail; degenerate results are `None`
//! - **Caller Clamps**: calculators trust their inputs, front ends clamp first
//! - **Plain Values**: every record is `Copy` and carries no lifecycle
//!
//! ## Example
//!
//! ```rust
//! use fincalc_core::prelude::*;
//!
//! let bounds = Bounds::new(0.0, 100.0);
//! assert_eq!(bounds.clamp(140.0), 100.0);
//!
//! assert_eq!(format_currency(1234.5, Currency::USD), "$1,234.50");
//! assert_eq!(format_currency(f64::NAN, Currency::USD), "-");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod format;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{FincalcError, FincalcResult};
    pub use crate::format::{
        format_currency, format_optional_currency, format_percent, CurrencyFormatter,
        PLACEHOLDER,
    };
    pub use crate::traits::{Calculator, ClampInputs};
    pub use crate::types::{Bounds, Currency};
}

// Re-export commonly used types at crate root
pub use error::{FincalcError, FincalcResult};
pub use format::{
    format_currency, format_optional_currency, format_percent, CurrencyFormatter, PLACEHOLDER,
};
pub use traits::{Calculator, ClampInputs};
pub use types::{Bounds, Currency};
