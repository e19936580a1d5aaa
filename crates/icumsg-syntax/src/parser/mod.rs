//! Template parser.
//!
//! Turns the token stream produced by the lexer into an AST that can be used
//! for interpretation, code generation, or external tooling.

pub mod ast;
pub mod error;
mod template;

pub use ast::*;
pub use error::{ParseError, ParseErrorKind, ParserState};
pub use template::{DEFAULT_MAX_DEPTH, ParseOptions, parse, parse_str, parse_with};
