//! Tokenizer for message templates.
//!
//! The lexer is total: every input produces a token list. It only classifies
//! characters; quoting and structure are resolved by the parser.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// The quote character that opens and closes literal runs.
pub const ESCAPE_CHAR: char = '\'';

/// A lexical token of a message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    LeftBrace,
    RightBrace,
    Comma,
    Hashtag,
    Escape,
    /// A run of one or more spaces.
    Whitespace(String),
    /// A run of characters with no structural meaning.
    Text(String),
}

impl Token {
    /// Number of source characters covered by this token.
    pub fn source_len(&self) -> usize {
        match self {
            Token::Whitespace(run) | Token::Text(run) => run.chars().count(),
            Token::LeftBrace
            | Token::RightBrace
            | Token::Comma
            | Token::Hashtag
            | Token::Escape => 1,
        }
    }

    /// The source text this token was produced from.
    pub fn as_source(&self) -> &str {
        match self {
            Token::LeftBrace => "{",
            Token::RightBrace => "}",
            Token::Comma => ",",
            Token::Hashtag => "#",
            Token::Escape => "'",
            Token::Whitespace(run) | Token::Text(run) => run,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Token::Whitespace(_) => write!(f, "whitespace"),
            Token::Text(run) => write!(f, "text \"{run}\""),
            structural => write!(f, "'{}'", structural.as_source()),
        }
    }
}

/// Convert a template string into tokens.
///
/// Adjacent text characters and adjacent spaces are merged into single runs,
/// so the result never contains two consecutive `Text` or `Whitespace` tokens.
///
/// # Example
///
/// ```
/// use icumsg_syntax::{Token, lex};
///
/// let tokens = lex("Hi {name}");
/// assert_eq!(tokens[0], Token::Text("Hi".to_string()));
/// assert_eq!(tokens[2], Token::LeftBrace);
/// ```
pub fn lex(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for c in input.chars() {
        match c {
            '{' => tokens.push(Token::LeftBrace),
            '}' => tokens.push(Token::RightBrace),
            ',' => tokens.push(Token::Comma),
            '#' => tokens.push(Token::Hashtag),
            ESCAPE_CHAR => tokens.push(Token::Escape),
            ' ' => push_whitespace(&mut tokens, c),
            _ => push_text(&mut tokens, c),
        }
    }
    tokens
}

fn push_whitespace(tokens: &mut Vec<Token>, c: char) {
    if let Some(Token::Whitespace(run)) = tokens.last_mut() {
        run.push(c);
    } else {
        tokens.push(Token::Whitespace(c.to_string()));
    }
}

fn push_text(tokens: &mut Vec<Token>, c: char) {
    if let Some(Token::Text(run)) = tokens.last_mut() {
        run.push(c);
    } else {
        tokens.push(Token::Text(c.to_string()));
    }
}
