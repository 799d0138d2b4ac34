//! Debt payoff command.

use anyhow::Result;
use clap::Args;

use fincalc_calculators::{CalculationRequest, DebtPayoffInput};

use crate::commands::Context;
use crate::report::run_and_print;

/// Arguments for the debt command.
#[derive(Args, Debug)]
pub struct DebtArgs {
    /// Outstanding balance
    #[arg(long, default_value_t = 10_000.0)]
    pub balance: f64,

    /// Annual percentage rate in percent
    #[arg(long, default_value_t = 19.99)]
    pub apr: f64,

    /// Fixed monthly payment
    #[arg(long, default_value_t = 300.0)]
    pub payment: f64,

    /// Months simulated before giving up (overrides debt_payoff.max_months)
    #[arg(long)]
    pub max_months: Option<u32>,
}

impl From<&DebtArgs> for CalculationRequest {
    fn from(args: &DebtArgs) -> Self {
        CalculationRequest::DebtPayoff(DebtPayoffInput::new(args.balance, args.apr, args.payment))
    }
}

/// Execute the debt command.
pub fn execute(args: DebtArgs, ctx: &Context) -> Result<()> {
    let mut config = ctx.config.clone();
    if let Some(months) = args.max_months {
        config = config.with_max_payoff_months(months.max(1));
    }
    run_and_print((&args).into(), &config, ctx.format)
}
