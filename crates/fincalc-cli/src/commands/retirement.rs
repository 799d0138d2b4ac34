//! Retirement projection command.

use anyhow::Result;
use clap::Args;

use fincalc_calculators::{CalculationRequest, RetirementInput};

use crate::commands::Context;
use crate::report::run_and_print;

/// Arguments for the retirement command.
#[derive(Args, Debug)]
pub struct RetirementArgs {
    /// Age today
    #[arg(long, default_value_t = 30.0)]
    pub age: f64,

    /// Planned retirement age
    #[arg(long, default_value_t = 65.0)]
    pub retire_age: f64,

    /// Savings today
    #[arg(long, default_value_t = 20_000.0)]
    pub savings: f64,

    /// Amount added at the end of every month
    #[arg(long, default_value_t = 600.0)]
    pub monthly: f64,

    /// Expected annual return in percent
    #[arg(long = "return", default_value_t = 7.0)]
    pub annual_return: f64,

    /// Expected annual inflation in percent
    #[arg(long, default_value_t = 2.5)]
    pub inflation: f64,
}

impl From<&RetirementArgs> for CalculationRequest {
    fn from(args: &RetirementArgs) -> Self {
        CalculationRequest::Retirement(RetirementInput {
            current_age: args.age,
            retire_age: args.retire_age,
            current_savings: args.savings,
            monthly_contribution: args.monthly,
            annual_return: args.annual_return,
            inflation: args.inflation,
        })
    }
}

/// Execute the retirement command.
pub fn execute(args: RetirementArgs, ctx: &Context) -> Result<()> {
    run_and_print((&args).into(), &ctx.config, ctx.format)
}
