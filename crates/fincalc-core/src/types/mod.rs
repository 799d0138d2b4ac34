//! Domain types for fincalc.

mod bounds;
mod currency;

pub use bounds::{Bounds, MONEY_LIMIT};
pub use currency::Currency;
