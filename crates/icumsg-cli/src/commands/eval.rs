//! Implementation of the `icumsg eval` command.

use icumsg::{interpret_with, Diagnostic, DiagnosticCollector, Value, Values};
use serde::Serialize;

use crate::error::CliError;
use crate::output::diagnostic::TemplateDiagnostic;
use crate::output::{print_json, print_warning};

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Template string to evaluate
    #[arg(long, required = true)]
    pub template: String,

    /// Values in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult<'a> {
    pub result: &'a str,
    pub diagnostics: &'a [Diagnostic],
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter format '{s}': expected name=value"))?;
    Ok((key.to_string(), value.to_string()))
}

/// Interpret a command-line value: integers, then floats, then bools, and
/// anything else as a string.
fn parse_value(raw: String) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        Value::from(n)
    } else if let Ok(f) = raw.parse::<f64>() {
        Value::from(f)
    } else if let Ok(b) = raw.parse::<bool>() {
        Value::from(b)
    } else {
        Value::from(raw)
    }
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> Result<i32, CliError> {
    let values: Values = args
        .params
        .into_iter()
        .map(|(key, raw)| (key, parse_value(raw)))
        .collect();

    let mut collector = DiagnosticCollector::new();
    let result = interpret_with(&args.template, &values, &mut collector);
    let diagnostics = collector.into_diagnostics();
    tracing::debug!(count = diagnostics.len(), "rendered template");

    if args.json {
        print_json(&EvalResult {
            result: &result,
            diagnostics: &diagnostics,
        })?;
    } else {
        println!("{result}");
        for diagnostic in &diagnostics {
            match diagnostic {
                Diagnostic::InvalidTemplate { template, error } => {
                    let report = TemplateDiagnostic::from_parse_error("template", template, error);
                    eprintln!("{:?}", miette::Report::new(report));
                }
                other => print_warning(&other.to_string()),
            }
        }
    }

    let invalid = diagnostics
        .iter()
        .any(|d| matches!(d, Diagnostic::InvalidTemplate { .. }));
    Ok(if invalid {
        exitcode::DATAERR
    } else {
        exitcode::OK
    })
}
