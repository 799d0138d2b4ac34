//! Inflation adjuster command.

use anyhow::Result;
use clap::Args;

use fincalc_calculators::{CalculationRequest, InflationInput};

use crate::commands::Context;
use crate::report::run_and_print;

/// Arguments for the inflation command.
#[derive(Args, Debug)]
pub struct InflationArgs {
    /// Amount to convert
    #[arg(long, default_value_t = 10_000.0)]
    pub amount: f64,

    /// Annual inflation in percent
    #[arg(long, default_value_t = 3.0)]
    pub rate: f64,

    /// Years between today and the future date
    #[arg(long, default_value_t = 10.0)]
    pub years: f64,
}

impl From<&InflationArgs> for CalculationRequest {
    fn from(args: &InflationArgs) -> Self {
        CalculationRequest::InflationAdjuster(InflationInput::new(
            args.amount,
            args.rate,
            args.years,
        ))
    }
}

/// Execute the inflation command.
pub fn execute(args: InflationArgs, ctx: &Context) -> Result<()> {
    run_and_print((&args).into(), &ctx.config, ctx.format)
}
