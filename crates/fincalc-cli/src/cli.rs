//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{
    BreakEvenArgs, CompoundArgs, ConfigArgs, DebtArgs, EmergencyArgs, EvalArgs, InflationArgs,
    LoanArgs, MortgageArgs, RetirementArgs, RoiArgs, SavingsArgs,
};

/// fincalc - Personal finance calculators
#[derive(Parser)]
#[command(name = "fincalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file (.toml or .json). Defaults to the per-user file.
    #[arg(long, global = true, env = "FINCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Display currency (USD, EUR, GBP, ...), overriding the configuration
    #[arg(long, global = true)]
    pub currency: Option<String>,

    /// Evaluate inputs as given instead of clamping them into range
    #[arg(long, global = true)]
    pub no_clamp: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Monthly payment and totals for an installment loan
    Loan(LoanArgs),

    /// Savings growth with monthly contributions
    Savings(SavingsArgs),

    /// Lump-sum growth with periodic compounding
    Compound(CompoundArgs),

    /// Maximum mortgage from income and debts (28/36 rule)
    Mortgage(MortgageArgs),

    /// Project a nest egg at retirement
    Retirement(RetirementArgs),

    /// Months to pay off a debt with a fixed payment
    Debt(DebtArgs),

    /// Return on investment
    Roi(RoiArgs),

    /// Units and revenue needed to cover fixed costs
    BreakEven(BreakEvenArgs),

    /// Emergency fund target
    Emergency(EmergencyArgs),

    /// Convert between today's and future money
    Inflation(InflationArgs),

    /// List the available calculators
    List,

    /// Evaluate a JSON calculation request
    Eval(EvalArgs),

    /// Inspect and manage configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the headline value)
    Minimal,
}
