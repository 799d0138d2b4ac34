//! Emergency fund command.

use anyhow::Result;
use clap::Args;

use fincalc_calculators::{CalculationRequest, EmergencyFundInput};

use crate::commands::Context;
use crate::report::run_and_print;

/// Arguments for the emergency command.
#[derive(Args, Debug)]
pub struct EmergencyArgs {
    /// Essential monthly expenses
    #[arg(long, default_value_t = 2500.0)]
    pub expenses: f64,

    /// Months of coverage
    #[arg(long, default_value_t = 6.0)]
    pub months: f64,
}

impl From<&EmergencyArgs> for CalculationRequest {
    fn from(args: &EmergencyArgs) -> Self {
        CalculationRequest::EmergencyFund(EmergencyFundInput::new(args.expenses, args.months))
    }
}

/// Execute the emergency command.
pub fn execute(args: EmergencyArgs, ctx: &Context) -> Result<()> {
    run_and_print((&args).into(), &ctx.config, ctx.format)
}
