//! Compound interest command.

use anyhow::Result;
use clap::Args;

use fincalc_calculators::{CalculationRequest, CompoundInterestInput};

use crate::commands::Context;
use crate::report::run_and_print;

/// Arguments for the compound command.
#[derive(Args, Debug)]
pub struct CompoundArgs {
    /// Starting amount
    #[arg(long, default_value_t = 5000.0)]
    pub principal: f64,

    /// Nominal annual rate in percent
    #[arg(long, default_value_t = 7.0)]
    pub rate: f64,

    /// Compounding periods per year (1, 4, 12, 365, ...)
    #[arg(long, default_value_t = 12.0)]
    pub periods: f64,

    /// Horizon in years
    #[arg(long, default_value_t = 8.0)]
    pub years: f64,
}

impl From<&CompoundArgs> for CalculationRequest {
    fn from(args: &CompoundArgs) -> Self {
        CalculationRequest::CompoundInterest(CompoundInterestInput::new(
            args.principal,
            args.rate,
            args.periods,
            args.years,
        ))
    }
}

/// Execute the compound command.
pub fn execute(args: CompoundArgs, ctx: &Context) -> Result<()> {
    run_and_print((&args).into(), &ctx.config, ctx.format)
}
