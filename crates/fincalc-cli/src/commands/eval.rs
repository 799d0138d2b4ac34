//! Eval command implementation.
//!
//! Evaluates JSON requests of the form
//! `{"calculator": "loan-payment", "inputs": {...}}`, or an array of them.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde_json::Value;

use fincalc_calculators::CalculationRequest;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::error::CliError;
use crate::output::print_json;
use crate::report::Report;

/// Arguments for the eval command.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Inline JSON request
    #[arg(conflicts_with = "file")]
    pub request: Option<String>,

    /// Read the request from a file (`-` for stdin)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

impl EvalArgs {
    fn read_source(&self) -> Result<String, CliError> {
        match (&self.request, &self.file) {
            (Some(json), _) => Ok(json.clone()),
            (None, Some(path)) if path.as_os_str() == "-" => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
            (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
            (None, None) => Err(CliError::MissingRequest),
        }
    }
}

/// Decodes a single request or an array of requests.
pub fn parse_requests(source: &str) -> Result<Vec<CalculationRequest>, CliError> {
    let value: Value =
        serde_json::from_str(source).map_err(|e| CliError::InvalidRequest(e.to_string()))?;
    let items = match value {
        Value::Array(items) => items,
        single => vec![single],
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value(item)
                .map_err(|e| CliError::InvalidRequest(format!("request {i}: {e}")))
        })
        .collect()
}

/// Execute the eval command.
pub fn execute(args: EvalArgs, ctx: &Context) -> Result<()> {
    let source = args.read_source()?;
    let requests = parse_requests(&source)?;
    tracing::debug!(count = requests.len(), "evaluating requests");

    let reports: Vec<Report> = requests
        .into_iter()
        .map(|request| Report::run(request, &ctx.config))
        .collect();

    match ctx.format {
        OutputFormat::Json => {
            let values = reports
                .iter()
                .map(Report::to_json)
                .collect::<serde_json::Result<Vec<_>>>()?;
            match values.as_slice() {
                [single] => print_json(single),
                _ => print_json(&values),
            }
        }
        format => {
            for report in &reports {
                report.print(&ctx.config.display, format)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fincalc_calculators::CalculatorKind;

    #[test]
    fn test_parse_single_and_array() {
        let single = parse_requests(r#"{"calculator":"roi","inputs":{"cost":100,"final_value":150}}"#)
            .unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].kind(), CalculatorKind::Roi);

        let many = parse_requests(
            r#"[{"calculator":"roi","inputs":{}},{"calculator":"debt-payoff","inputs":{}}]"#,
        )
        .unwrap();
        let kinds: Vec<_> = many.iter().map(CalculationRequest::kind).collect();
        assert_eq!(kinds, [CalculatorKind::Roi, CalculatorKind::DebtPayoff]);
    }

    #[test]
    fn test_parse_errors_name_the_request() {
        let err = parse_requests(r#"[{"calculator":"roi","inputs":{}},{"calculator":"tax"}]"#)
            .unwrap_err();
        assert!(err.to_string().contains("request 1"));

        assert!(matches!(parse_requests("not json"), Err(CliError::InvalidRequest(_))));
    }
}
