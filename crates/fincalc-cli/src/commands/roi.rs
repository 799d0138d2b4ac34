//! ROI command.

use anyhow::Result;
use clap::Args;

use fincalc_calculators::{CalculationRequest, RoiInput};

use crate::commands::Context;
use crate::report::run_and_print;

/// Arguments for the roi command.
#[derive(Args, Debug)]
pub struct RoiArgs {
    /// Amount invested
    #[arg(long, default_value_t = 10_000.0, allow_negative_numbers = true)]
    pub cost: f64,

    /// Value at exit
    #[arg(long = "final", default_value_t = 12_000.0, allow_negative_numbers = true)]
    pub final_value: f64,
}

impl From<&RoiArgs> for CalculationRequest {
    fn from(args: &RoiArgs) -> Self {
        CalculationRequest::Roi(RoiInput::new(args.cost, args.final_value))
    }
}

/// Execute the roi command.
pub fn execute(args: RoiArgs, ctx: &Context) -> Result<()> {
    run_and_print((&args).into(), &ctx.config, ctx.format)
}
