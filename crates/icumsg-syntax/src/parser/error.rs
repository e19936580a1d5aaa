//! Parse error types.

use std::fmt::{Display, Formatter, Result as FmtResult};

use strsim::levenshtein;
use thiserror::Error;

use crate::lexer::Token;
use crate::parser::ast::BranchKind;

/// An error that aborted parsing of a template.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at character {offset}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Character offset of the offending token, or the input length for
    /// constructs left open at end of input.
    pub offset: usize,
    /// Index of the offending token, or the token count at end of input.
    pub token_index: usize,
}

/// What went wrong while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A `}` with no open construct to close.
    #[error("encountered '}}' without a prior '{{'")]
    UnmatchedClosingBrace,

    /// Input ended inside a `{...}` construct.
    #[error("encountered unclosed '{{'")]
    UnclosedBrace,

    /// Input ended inside a quoted run.
    #[error("encountered unclosed quote")]
    UnclosedEscape,

    /// The operator was neither `plural` nor `select`.
    #[error(
        "invalid operator '{operator}', expected 'plural' or 'select'{}",
        did_you_mean(.suggestion)
    )]
    InvalidOperator {
        operator: String,
        suggestion: Option<String>,
    },

    /// A token the current parser state does not accept.
    #[error("unexpected {token}, expected {state}")]
    UnexpectedToken { token: Token, state: ParserState },

    /// A branch closed without any options.
    #[error("branch '{name}' has no options")]
    EmptyBranch { name: String },

    /// Too many constructs open at once.
    #[error("nesting exceeds the maximum depth of {max_depth}")]
    NestingTooDeep { max_depth: usize },
}

/// Parser state reported in [`ParseErrorKind::UnexpectedToken`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// Plain text at the top level or inside option content.
    Text,
    /// Inside a quoted run.
    Escape,
    /// Right after `{`.
    VariableName,
    /// After the variable name.
    AfterVariableName,
    /// After `{name,`.
    OperatorName,
    /// After the operator name.
    AfterOperatorName,
    /// Expecting an option key or the closing `}`.
    OptionKey,
    /// After an option key.
    AfterOptionKey,
}

impl Display for ParserState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let description = match self {
            ParserState::Text => "text",
            ParserState::Escape => "quoted text",
            ParserState::VariableName => "a variable name",
            ParserState::AfterVariableName => "',' or '}' after the variable name",
            ParserState::OperatorName => "an operator name",
            ParserState::AfterOperatorName => "',' after the operator name",
            ParserState::OptionKey => "an option key or '}'",
            ParserState::AfterOptionKey => "'{' after the option key",
        };
        f.write_str(description)
    }
}

impl ParseErrorKind {
    /// Build an [`ParseErrorKind::InvalidOperator`] with a typo suggestion.
    pub fn invalid_operator(operator: &str) -> Self {
        let suggestion = BranchKind::OPERATORS
            .iter()
            .map(|candidate| (levenshtein(operator, candidate), *candidate))
            .filter(|(distance, _)| *distance <= 2)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, candidate)| candidate.to_string());
        ParseErrorKind::InvalidOperator {
            operator: operator.to_string(),
            suggestion,
        }
    }
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, offset: usize, token_index: usize) -> Self {
        ParseError {
            kind,
            offset,
            token_index,
        }
    }

    /// Convert the character offset into a 1-based line and column within
    /// the template the tokens were lexed from.
    pub fn line_column(&self, source: &str) -> (usize, usize) {
        let mut line = 1;
        let mut column = 1;
        for c in source.chars().take(self.offset) {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        (line, column)
    }

    /// Convert the character offset into a byte offset within `source`.
    pub fn byte_offset(&self, source: &str) -> usize {
        source
            .char_indices()
            .nth(self.offset)
            .map_or(source.len(), |(index, _)| index)
    }
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    suggestion
        .as_deref()
        .map(|s| format!(" (did you mean '{s}'?)"))
        .unwrap_or_default()
}
