//! Implementation of the `icumsg check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use icumsg::parse_str;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::error::CliError;
use crate::output::diagnostic::TemplateDiagnostic;
use crate::output::print_json;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Templates to check
    pub templates: Vec<String>,

    /// File with one template per line
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Where a checked template came from.
struct Source {
    name: String,
    template: String,
}

/// JSON output for one checked template.
#[derive(Serialize)]
pub struct CheckResult {
    pub source: String,
    pub template: String,
    pub valid: bool,
    pub error: Option<String>,
    /// 1-based line and column of the error within the template.
    pub position: Option<(usize, usize)>,
}

/// Collect templates from arguments and the optional file. Blank lines in
/// the file are skipped.
fn collect_sources(args: &CheckArgs) -> Result<Vec<Source>, CliError> {
    let mut sources: Vec<Source> = args
        .templates
        .iter()
        .enumerate()
        .map(|(index, template)| Source {
            name: format!("argument {}", index + 1),
            template: template.clone(),
        })
        .collect();

    if let Some(path) = &args.file {
        let content = read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.clone(),
            source,
        })?;
        sources.extend(
            content
                .lines()
                .enumerate()
                .filter(|(_, line)| !line.trim().is_empty())
                .map(|(index, line)| Source {
                    name: format!("{}:{}", path.display(), index + 1),
                    template: line.to_string(),
                }),
        );
    }
    Ok(sources)
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32, CliError> {
    let sources = collect_sources(&args)?;
    if sources.is_empty() {
        eprintln!("{} no templates given", "error:".red().bold());
        return Ok(exitcode::USAGE);
    }

    let mut results = Vec::new();
    let mut error_count = 0;
    for source in &sources {
        match parse_str(&source.template) {
            Ok(_) => {
                if !args.json {
                    println!("{} {}", "ok".green(), source.name);
                }
                results.push(CheckResult {
                    source: source.name.clone(),
                    template: source.template.clone(),
                    valid: true,
                    error: None,
                    position: None,
                });
            }
            Err(err) => {
                error_count += 1;
                if !args.json {
                    let report =
                        TemplateDiagnostic::from_parse_error(&source.name, &source.template, &err);
                    eprintln!("{:?}", miette::Report::new(report));
                }
                results.push(CheckResult {
                    source: source.name.clone(),
                    template: source.template.clone(),
                    valid: false,
                    error: Some(err.to_string()),
                    position: Some(err.line_column(&source.template)),
                });
            }
        }
    }

    if args.json {
        print_json(&results)?;
    } else if error_count > 0 {
        eprintln!(
            "{} {error_count} of {} templates failed to parse",
            "error:".red().bold(),
            sources.len()
        );
    }

    Ok(if error_count > 0 {
        exitcode::DATAERR
    } else {
        exitcode::OK
    })
}
