//! Break-even command.

use anyhow::Result;
use clap::Args;

use fincalc_calculators::{BreakEvenInput, CalculationRequest};

use crate::commands::Context;
use crate::report::run_and_print;

/// Arguments for the break-even command.
#[derive(Args, Debug)]
pub struct BreakEvenArgs {
    /// Fixed costs to recover
    #[arg(long, default_value_t = 5000.0)]
    pub fixed: f64,

    /// Selling price per unit
    #[arg(long, default_value_t = 50.0)]
    pub price: f64,

    /// Variable cost per unit
    #[arg(long, default_value_t = 20.0)]
    pub variable: f64,
}

impl From<&BreakEvenArgs> for CalculationRequest {
    fn from(args: &BreakEvenArgs) -> Self {
        CalculationRequest::BreakEven(BreakEvenInput::new(args.fixed, args.price, args.variable))
    }
}

/// Execute the break-even command.
pub fn execute(args: BreakEvenArgs, ctx: &Context) -> Result<()> {
    run_and_print((&args).into(), &ctx.config, ctx.format)
}
