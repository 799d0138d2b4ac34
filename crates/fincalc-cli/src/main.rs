//! fincalc CLI - personal finance calculators on the command line.
//!
//! # Usage
//!
//! ```bash
//! # Monthly payment on a 25,000 loan at 6.9% over 5 years
//! fincalc loan --principal 25000 --apr 6.9 --years 5
//!
//! # How long a credit card takes to clear, as JSON
//! fincalc --format json debt --balance 10000 --apr 19.99 --payment 300
//!
//! # Evaluate a request document
//! fincalc eval '{"calculator": "break-even", "inputs": {"fixed_costs": 5000}}'
//!
//! # Write the per-user configuration file
//! fincalc config init
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;
mod report;

use cli::{Cli, Commands};
use commands::config::ConfigCommand;
use commands::Context;
use fincalc_config::FincalcConfig;

/// Logs go to stderr so that stdout carries only results. `RUST_LOG`
/// overrides the `-v` level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Builds the effective configuration: file, then environment, then flags.
fn load_config(cli: &Cli) -> Result<FincalcConfig> {
    let mut config = FincalcConfig::load(cli.config.as_deref())?;
    if let Some(code) = &cli.currency {
        config = config.with_currency(commands::parse_currency(code)?);
    }
    if cli.no_clamp {
        config = config.with_clamp_inputs(false);
    }
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

/// `config path|init|validate` inspect the file itself and must work even
/// when it does not load.
fn needs_config(command: &Commands) -> bool {
    !matches!(
        command,
        Commands::Config(args) if !matches!(args.command, ConfigCommand::Show)
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = if needs_config(&cli.command) {
        load_config(&cli)?
    } else {
        FincalcConfig::default()
    };

    let ctx = Context {
        format: cli.format,
        config,
        config_path: cli.config.clone(),
    };

    // Execute command
    match cli.command {
        Commands::Loan(args) => commands::loan::execute(args, &ctx)?,
        Commands::Savings(args) => commands::savings::execute(args, &ctx)?,
        Commands::Compound(args) => commands::compound::execute(args, &ctx)?,
        Commands::Mortgage(args) => commands::mortgage::execute(args, &ctx)?,
        Commands::Retirement(args) => commands::retirement::execute(args, &ctx)?,
        Commands::Debt(args) => commands::debt::execute(args, &ctx)?,
        Commands::Roi(args) => commands::roi::execute(args, &ctx)?,
        Commands::BreakEven(args) => commands::break_even::execute(args, &ctx)?,
        Commands::Emergency(args) => commands::emergency::execute(args, &ctx)?,
        Commands::Inflation(args) => commands::inflation::execute(args, &ctx)?,
        Commands::List => commands::list::execute(&ctx)?,
        Commands::Eval(args) => commands::eval::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}
