//! Implementation of the `icumsg generate` command.

use icumsg::parse_str;
use icumsg::syntax::{generate, GenerateOptions};

use crate::error::CliError;
use crate::output::diagnostic::TemplateDiagnostic;

/// Arguments for the generate command.
#[derive(Debug, clap::Args)]
pub struct GenerateArgs {
    /// Template string to compile
    #[arg(long, required = true)]
    pub template: String,

    /// Name of the generated function
    #[arg(long, default_value = "message", value_parser = parse_identifier)]
    pub name: String,

    /// Path of the runtime helper module in generated code
    #[arg(long, default_value = "::icumsg::runtime")]
    pub runtime_path: String,
}

/// Accept names usable as a Rust function name.
fn parse_identifier(s: &str) -> Result<String, String> {
    let mut chars = s.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c == '_' || c.is_ascii_alphabetic());
    if valid_start && chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) && s != "_" {
        Ok(s.to_string())
    } else {
        Err(format!("'{s}' is not a valid function name"))
    }
}

const SINK_TYPE: &str = "&mut dyn ::icumsg::DiagnosticSink";

/// Render a complete function definition for a template.
fn render_function(name: &str, template: &str, lines: &[String], reads_values: bool) -> String {
    let (values, sink) = if reads_values {
        ("values", "sink")
    } else {
        ("_values", "_sink")
    };
    let mut function = format!(
        "/// {}\npub fn {name}({values}: &::icumsg::Values, {sink}: {SINK_TYPE}) -> String {{\n",
        template.replace('\n', "\\n")
    );
    for line in lines {
        function.push_str(line);
        function.push('\n');
    }
    function.push('}');
    function
}

/// Run the generate command.
pub fn run_generate(args: GenerateArgs) -> Result<i32, CliError> {
    let node = match parse_str(&args.template) {
        Ok(node) => node,
        Err(err) => {
            let report = TemplateDiagnostic::from_parse_error("template", &args.template, &err);
            eprintln!("{:?}", miette::Report::new(report));
            return Ok(exitcode::DATAERR);
        }
    };

    let options = GenerateOptions::builder()
        .runtime_path(args.runtime_path)
        .initial_indent(1)
        .build();
    let lines = generate(&node, &options);
    let reads_values = !node.variables().is_empty();
    println!(
        "{}",
        render_function(&args.name, &args.template, &lines, reads_values)
    );
    Ok(exitcode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identifier() {
        assert!(parse_identifier("greeting").is_ok());
        assert!(parse_identifier("_private2").is_ok());
        assert!(parse_identifier("2fast").is_err());
        assert!(parse_identifier("has-dash").is_err());
        assert!(parse_identifier("_").is_err());
        assert!(parse_identifier("").is_err());
    }

    #[test]
    fn test_render_function() {
        let node = parse_str("Hello {name}").unwrap();
        let options = GenerateOptions::builder()
            .runtime_path("rt")
            .initial_indent(1)
            .build();
        let lines = generate(&node, &options);
        assert_eq!(
            render_function("hello", "Hello {name}", &lines, true),
            "/// Hello {name}\n\
             pub fn hello(values: &::icumsg::Values, sink: &mut dyn ::icumsg::DiagnosticSink) -> String {\n    \
             format!(\"Hello {}\", rt::text(values, sink, \"name\"))\n\
             }"
        );
    }

    #[test]
    fn test_render_function_without_values() {
        let node = parse_str("Hi").unwrap();
        let lines = generate(&node, &GenerateOptions::default());
        assert_eq!(
            render_function("hi", "Hi", &lines, false),
            "/// Hi\n\
             pub fn hi(_values: &::icumsg::Values, _sink: &mut dyn ::icumsg::DiagnosticSink) -> String {\n\
             String::from(\"Hi\")\n\
             }"
        );
    }
}
