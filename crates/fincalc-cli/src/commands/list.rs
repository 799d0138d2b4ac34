//! List command implementation.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use fincalc_calculators::CalculatorKind;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_header, print_output};

/// One catalog entry.
#[derive(Debug, Serialize, Tabled)]
pub struct CalculatorRow {
    #[tabled(rename = "Id")]
    pub id: &'static str,
    #[tabled(rename = "Calculator")]
    pub title: &'static str,
    #[tabled(rename = "Description")]
    pub description: &'static str,
}

impl From<CalculatorKind> for CalculatorRow {
    fn from(kind: CalculatorKind) -> Self {
        Self {
            id: kind.id(),
            title: kind.title(),
            description: kind.description(),
        }
    }
}

/// Execute the list command.
pub fn execute(ctx: &Context) -> Result<()> {
    let rows: Vec<CalculatorRow> = CalculatorKind::all().iter().copied().map(Into::into).collect();

    match ctx.format {
        OutputFormat::Table => {
            print_header("Calculators");
            print_output(&rows, ctx.format)
        }
        OutputFormat::Minimal => {
            for row in &rows {
                println!("{}", row.id);
            }
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Csv => print_output(&rows, ctx.format),
    }
}
