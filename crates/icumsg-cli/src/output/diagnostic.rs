//! Miette diagnostic wrapper for template parse errors.

use icumsg::syntax::{lex, ParseError, ParseErrorKind};
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic pointing at the offending token of a
/// template.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(icumsg::syntax))]
pub struct TemplateDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl TemplateDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(name: &str, template: &str, err: &ParseError) -> Self {
        TemplateDiagnostic {
            src: NamedSource::new(name, template.to_string()),
            span: error_span(template, err),
            message: err.kind.to_string(),
            help: help_for(&err.kind),
        }
    }
}

/// Byte span of the offending token, or an empty span at the end of input.
fn error_span(template: &str, err: &ParseError) -> SourceSpan {
    let offset = err.byte_offset(template);
    let len = lex(template)
        .get(err.token_index)
        .map_or(0, |token| token.as_source().len());
    (offset, len).into()
}

fn help_for(kind: &ParseErrorKind) -> Option<String> {
    match kind {
        ParseErrorKind::UnmatchedClosingBrace => {
            Some("quote it as '}' to print a literal brace".to_string())
        }
        ParseErrorKind::UnclosedBrace => Some("add the missing '}'".to_string()),
        ParseErrorKind::UnclosedEscape => {
            Some("use '' for a literal apostrophe".to_string())
        }
        ParseErrorKind::InvalidOperator {
            suggestion: Some(suggestion),
            ..
        } => Some(format!("did you mean '{suggestion}'?")),
        ParseErrorKind::EmptyBranch { .. } => {
            Some("add at least an 'other{...}' option".to_string())
        }
        ParseErrorKind::InvalidOperator {
            suggestion: None, ..
        }
        | ParseErrorKind::UnexpectedToken { .. }
        | ParseErrorKind::NestingTooDeep { .. } => None,
    }
}
