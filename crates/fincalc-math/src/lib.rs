//! # fincalc Math
//!
//! Time-value-of-money primitives shared by the fincalc calculators.
//!
//! This crate provides:
//!
//! - **Rates**: nominal annual percentages to periodic decimal rates
//! - **Growth**: compounding and discounting of single sums
//! - **Annuities**: future/present value factors and level payments for
//!   ordinary annuities (payments at period end)
//!
//! ## Design Philosophy
//!
//! - **Closed Forms**: every function is a single formula evaluation
//! - **Zero-Rate Limits**: where a formula degenerates to `0/0` at a zero
//!   rate, the analytic limit is returned instead
//! - **Plain `f64`**: inputs are assumed finite and already clamped

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]

pub mod tvm;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::tvm::{
        annuity_future_value_factor, annuity_payment, annuity_present_value_factor, compound,
        discount, growth_factor, monthly_rate, months, MONTHS_PER_YEAR,
    };
}
