//! Config command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use fincalc_config::{FincalcConfig, ENV_VARS};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::error::CliError;
use crate::output::{print_header, print_info, print_json, print_output, print_success, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show the configuration file location
    Path,

    /// Write a configuration file with the default settings
    Init(InitArgs),

    /// Check that the configuration file is valid
    Validate,
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// The file the command operates on: `--config`, else the per-user default.
fn target_path(ctx: &Context) -> Result<PathBuf, CliError> {
    ctx.config_path
        .clone()
        .or_else(FincalcConfig::default_path)
        .ok_or(CliError::NoConfigPath)
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(ctx),
        ConfigCommand::Path => execute_path(ctx),
        ConfigCommand::Init(init) => execute_init(&init, ctx),
        ConfigCommand::Validate => execute_validate(ctx),
    }
}

fn settings_rows(config: &FincalcConfig) -> Vec<KeyValue> {
    let fraction_digits = match config.display.fraction_digits {
        Some(digits) => digits.to_string(),
        None => format!("{} (currency default)", config.display.currency.decimal_places()),
    };
    vec![
        KeyValue::new("clamp_inputs", config.clamp_inputs.to_string()),
        KeyValue::new("display.currency", config.display.currency.code()),
        KeyValue::new("display.placeholder", config.display.placeholder.clone()),
        KeyValue::new("display.fraction_digits", fraction_digits),
        KeyValue::new("display.percent_digits", config.display.percent_digits.to_string()),
        KeyValue::new("debt_payoff.max_months", config.debt_payoff.max_months.to_string()),
    ]
}

/// Show the effective configuration.
fn execute_show(ctx: &Context) -> Result<()> {
    let rows = settings_rows(&ctx.config);
    match ctx.format {
        OutputFormat::Table => {
            print_header("Current Configuration");
            print_output(&rows, ctx.format)
        }
        OutputFormat::Json => print_json(&ctx.config),
        OutputFormat::Csv => print_output(&rows, ctx.format),
        OutputFormat::Minimal => {
            for row in &rows {
                println!("{}={}", row.key, row.value);
            }
            Ok(())
        }
    }
}

/// Show the configuration file path.
fn execute_path(ctx: &Context) -> Result<()> {
    let path = target_path(ctx)?;
    match ctx.format {
        OutputFormat::Minimal | OutputFormat::Csv => println!("{}", path.display()),
        OutputFormat::Json => print_json(&serde_json::json!({
            "path": path,
            "exists": path.is_file(),
        }))?,
        OutputFormat::Table => {
            print_info(&format!("Config file: {}", path.display()));
            if path.is_file() {
                print_info("Status: exists");
            } else {
                print_info("Status: not created yet (using defaults)");
            }
            print_info(&format!("Environment overrides: {}", ENV_VARS.join(", ")));
        }
    }
    Ok(())
}

/// Write the default configuration.
fn execute_init(args: &InitArgs, ctx: &Context) -> Result<()> {
    let path = target_path(ctx)?;
    if path.exists() && !args.force {
        return Err(CliError::AlreadyExists(path).into());
    }
    FincalcConfig::default()
        .save(&path)
        .map_err(CliError::from)?;
    print_success(&format!("Wrote default configuration to {}", path.display()));
    Ok(())
}

/// Load the configuration file and report whether it is valid.
fn execute_validate(ctx: &Context) -> Result<()> {
    let path = target_path(ctx)?;
    if !path.is_file() {
        print_info(&format!(
            "{} does not exist; built-in defaults are valid",
            path.display()
        ));
        return Ok(());
    }
    FincalcConfig::from_file(&path).map_err(CliError::from)?;
    print_success(&format!("{} is valid", path.display()));
    Ok(())
}
