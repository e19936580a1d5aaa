//! Shared syntax layer for icumsg message templates.
//!
//! This crate holds everything that has to behave identically at compile time
//! (inside the `messages!` macro) and at run time (inside the interpreter):
//! tokenizing, parsing, plural-category selection and code generation.

pub mod codegen;
pub mod lexer;
pub mod parser;
pub mod plural;

pub use codegen::{GenerateOptions, generate};
pub use lexer::{ESCAPE_CHAR, Token, lex};
pub use parser::{
    Branch, BranchKind, BranchOption, Node, OTHER_KEY, ParseError, ParseErrorKind, ParseOptions,
    ParserState, parse, parse_str, parse_with, select_option,
};
pub use plural::plural_category;
