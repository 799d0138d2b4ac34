//! Mortgage affordability command.

use anyhow::Result;
use clap::Args;

use fincalc_calculators::{CalculationRequest, MortgageInput};

use crate::commands::Context;
use crate::report::run_and_print;

/// Arguments for the mortgage command.
#[derive(Args, Debug)]
pub struct MortgageArgs {
    /// Gross monthly income
    #[arg(long, default_value_t = 8000.0)]
    pub income: f64,

    /// Other monthly debt payments
    #[arg(long, default_value_t = 500.0)]
    pub debts: f64,

    /// Mortgage APR in percent
    #[arg(long, default_value_t = 6.5)]
    pub apr: f64,

    /// Term in years
    #[arg(long, default_value_t = 30.0)]
    pub years: f64,
}

impl From<&MortgageArgs> for CalculationRequest {
    fn from(args: &MortgageArgs) -> Self {
        CalculationRequest::MortgageAffordability(MortgageInput::new(
            args.income,
            args.debts,
            args.apr,
            args.years,
        ))
    }
}

/// Execute the mortgage command.
pub fn execute(args: MortgageArgs, ctx: &Context) -> Result<()> {
    run_and_print((&args).into(), &ctx.config, ctx.format)
}
