//! Loan payment command.

use anyhow::Result;
use clap::Args;

use fincalc_calculators::{CalculationRequest, LoanInput};

use crate::commands::Context;
use crate::report::run_and_print;

/// Arguments for the loan command.
#[derive(Args, Debug)]
pub struct LoanArgs {
    /// Loan amount
    #[arg(long, default_value_t = 25_000.0)]
    pub principal: f64,

    /// Annual percentage rate (e.g. 6.9 for 6.9%)
    #[arg(long, default_value_t = 6.9)]
    pub apr: f64,

    /// Term in years
    #[arg(long, default_value_t = 5.0)]
    pub years: f64,
}

impl From<&LoanArgs> for CalculationRequest {
    fn from(args: &LoanArgs) -> Self {
        CalculationRequest::LoanPayment(LoanInput::new(args.principal, args.apr, args.years))
    }
}

/// Execute the loan command.
pub fn execute(args: LoanArgs, ctx: &Context) -> Result<()> {
    run_and_print((&args).into(), &ctx.config, ctx.format)
}
