//! Core traits for the fincalc library.
//!
//! - [`Calculator`]: a pure mapping from an input record to an output record
//! - [`ClampInputs`]: clamps every field of an input record into its domain

/// A personal-finance calculator.
///
/// Implementations are pure: the same input always yields the same output,
/// nothing is cached and nothing is retained between calls. Degenerate
/// outcomes are expressed in the output type (typically `Option`), never as
/// errors or panics.
///
/// Inputs are assumed to be clamped already (see [`ClampInputs`]); passing
/// out-of-range values is a contract violation whose result is unspecified
/// but still panic-free.
pub trait Calculator: Send + Sync {
    /// The input record.
    type Input;

    /// The output record.
    type Output;

    /// Stable kebab-case identifier, e.g. `"loan-payment"`.
    fn id(&self) -> &'static str;

    /// Evaluates the calculator.
    fn calculate(&self, input: &Self::Input) -> Self::Output;
}

/// Clamps an input record to the ranges its calculator is defined on.
///
/// Front ends call this before [`Calculator::calculate`]; calculators never
/// clamp on their own.
pub trait ClampInputs: Sized {
    /// Returns a copy with every field clamped to its closed interval.
    fn clamped(&self) -> Self;

    /// Returns true if clamping would leave the record unchanged.
    fn is_within_bounds(&self) -> bool
    where
        Self: PartialEq,
    {
        self.clamped() == *self
    }
}
