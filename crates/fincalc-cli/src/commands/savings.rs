//! Savings growth command.

use anyhow::Result;
use clap::Args;

use fincalc_calculators::{CalculationRequest, SavingsInput};

use crate::commands::Context;
use crate::report::run_and_print;

/// Arguments for the savings command.
#[derive(Args, Debug)]
pub struct SavingsArgs {
    /// Starting balance
    #[arg(long, default_value_t = 2000.0)]
    pub initial: f64,

    /// Amount added at the end of every month
    #[arg(long, default_value_t = 200.0)]
    pub monthly: f64,

    /// Annual interest rate in percent
    #[arg(long, default_value_t = 5.0)]
    pub rate: f64,

    /// Duration in years
    #[arg(long, default_value_t = 10.0)]
    pub years: f64,
}

impl From<&SavingsArgs> for CalculationRequest {
    fn from(args: &SavingsArgs) -> Self {
        CalculationRequest::SavingsGrowth(SavingsInput::new(
            args.initial,
            args.monthly,
            args.rate,
            args.years,
        ))
    }
}

/// Execute the savings command.
pub fn execute(args: SavingsArgs, ctx: &Context) -> Result<()> {
    run_and_print((&args).into(), &ctx.config, ctx.format)
}
