//! Token-stream parser for message templates.
//!
//! The parser is an explicit state machine over a stack of frames instead of
//! a recursive descent, so nesting depth is bounded by the stack and every
//! transition is a single `match` arm:
//!
//! - the root sequence and each option's content accumulate text and nodes
//! - an `Escape` frame copies tokens verbatim until the closing quote
//! - a `Replace` frame walks `{name, operator, key{...} ...}` stage by stage

use std::mem;

use bon::Builder;

use super::ast::{Branch, BranchKind, Node};
use super::error::{ParseError, ParseErrorKind, ParserState};
use crate::lexer::{ESCAPE_CHAR, Token, lex};

/// Default limit on simultaneously open frames.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Parser configuration.
///
/// # Example
///
/// ```
/// use icumsg_syntax::{ParseOptions, lex, parse_with};
///
/// let options = ParseOptions::builder().max_depth(4).build();
/// let deep = "{a, select, other{{b, select, other{{c, select, other{x}}}}}}";
/// assert!(parse_with(&lex(deep), &options).is_err());
/// ```
#[derive(Debug, Clone, Copy, Builder)]
pub struct ParseOptions {
    /// Maximum number of frames open at once. Each branch option costs two
    /// frames (the branch and its content), a quoted run costs one.
    #[builder(default = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions::builder().build()
    }
}

/// Parse a token stream with default options.
pub fn parse(tokens: &[Token]) -> Result<Node, ParseError> {
    parse_with(tokens, &ParseOptions::default())
}

/// Lex and parse a template string.
///
/// # Example
///
/// ```
/// use icumsg_syntax::{Node, parse_str};
///
/// let node = parse_str("Hello {name}").unwrap();
/// assert_eq!(
///     node,
///     Node::Sequence(vec![
///         Node::Literal("Hello ".to_string()),
///         Node::Placeholder("name".to_string()),
///     ])
/// );
/// ```
pub fn parse_str(template: &str) -> Result<Node, ParseError> {
    parse(&lex(template))
}

/// Parse a token stream into a single AST node.
///
/// Parsing either produces a complete tree or fails; no partial tree is ever
/// returned.
pub fn parse_with(tokens: &[Token], options: &ParseOptions) -> Result<Node, ParseError> {
    let mut parser = Parser::new(options.max_depth);
    let mut offset = 0;
    for (index, token) in tokens.iter().enumerate() {
        parser
            .step(token)
            .map_err(|kind| ParseError::new(kind, offset, index))?;
        offset += token.source_len();
    }
    parser
        .finish()
        .map_err(|kind| ParseError::new(kind, offset, tokens.len()))
}

/// A construct that is currently open.
enum Frame {
    /// Inside `'...'`.
    Escape(EscapeFrame),
    /// Inside `{...}` but outside any option content.
    Replace(ReplaceStage),
    /// Inside `key{...}`.
    Content(OptionContent),
}

#[derive(Default)]
struct EscapeFrame {
    /// Whether any token has been copied since the opening quote.
    consumed: bool,
}

/// Progress through `{name, operator, key{...} ...}`.
enum ReplaceStage {
    VariableName,
    AfterVariableName { name: String },
    OperatorName { name: String },
    AfterOperatorName { name: String, kind: BranchKind },
    Options { branch: Branch, pending_key: Option<String> },
}

struct OptionContent {
    key: String,
    sequence: SequenceBuilder,
}

/// Accumulates the parts of one sequence level.
#[derive(Default)]
struct SequenceBuilder {
    parts: Vec<Node>,
    text: String,
    /// Whether `#` produces a number field at this level.
    number_fields: bool,
}

struct Parser {
    root: SequenceBuilder,
    stack: Vec<Frame>,
    max_depth: usize,
}

impl ReplaceStage {
    fn state(&self) -> ParserState {
        match self {
            ReplaceStage::VariableName => ParserState::VariableName,
            ReplaceStage::AfterVariableName { .. } => ParserState::AfterVariableName,
            ReplaceStage::OperatorName { .. } => ParserState::OperatorName,
            ReplaceStage::AfterOperatorName { .. } => ParserState::AfterOperatorName,
            ReplaceStage::Options {
                pending_key: None, ..
            } => ParserState::OptionKey,
            ReplaceStage::Options {
                pending_key: Some(_),
                ..
            } => ParserState::AfterOptionKey,
        }
    }
}

impl SequenceBuilder {
    fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn push_node(&mut self, node: Node) {
        self.flush_text();
        self.parts.push(node);
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.parts.push(Node::Literal(mem::take(&mut self.text)));
        }
    }

    fn finish(mut self) -> Node {
        self.flush_text();
        Node::from_parts(self.parts)
    }
}

impl Parser {
    fn new(max_depth: usize) -> Self {
        Parser {
            root: SequenceBuilder::default(),
            stack: Vec::new(),
            max_depth,
        }
    }

    /// Feed one token to the frame on top of the stack.
    fn step(&mut self, token: &Token) -> Result<(), ParseErrorKind> {
        match self.stack.pop() {
            Some(Frame::Escape(escape)) => self.in_escape(escape, token),
            Some(Frame::Replace(stage)) => self.in_replace(stage, token),
            Some(Frame::Content(content)) => {
                self.stack.push(Frame::Content(content));
                self.in_sequence(token)
            }
            None => self.in_sequence(token),
        }
    }

    /// The sequence that text and finished nodes are currently written to.
    fn current_sequence(&mut self) -> &mut SequenceBuilder {
        self.stack
            .iter_mut()
            .rev()
            .find_map(|frame| match frame {
                Frame::Content(content) => Some(&mut content.sequence),
                Frame::Escape(_) | Frame::Replace(_) => None,
            })
            .unwrap_or(&mut self.root)
    }

    fn open(&mut self, frame: Frame) -> Result<(), ParseErrorKind> {
        if self.stack.len() >= self.max_depth {
            return Err(ParseErrorKind::NestingTooDeep {
                max_depth: self.max_depth,
            });
        }
        self.stack.push(frame);
        Ok(())
    }

    fn in_sequence(&mut self, token: &Token) -> Result<(), ParseErrorKind> {
        match token {
            Token::LeftBrace => self.open(Frame::Replace(ReplaceStage::VariableName)),
            Token::Escape => self.open(Frame::Escape(EscapeFrame::default())),
            Token::RightBrace => self.close_content(),
            Token::Hashtag => {
                let sequence = self.current_sequence();
                if sequence.number_fields {
                    sequence.push_node(Node::NumberField);
                } else {
                    sequence.push_text(token.as_source());
                }
                Ok(())
            }
            Token::Comma | Token::Whitespace(_) | Token::Text(_) => {
                self.current_sequence().push_text(token.as_source());
                Ok(())
            }
        }
    }

    /// Close the option content on top of the stack and record it in its
    /// branch.
    fn close_content(&mut self) -> Result<(), ParseErrorKind> {
        let Some(Frame::Content(OptionContent { key, sequence })) = self.stack.pop() else {
            return Err(ParseErrorKind::UnmatchedClosingBrace);
        };
        match self.stack.last_mut() {
            Some(Frame::Replace(ReplaceStage::Options { branch, .. })) => {
                branch.insert_option(key, sequence.finish());
                Ok(())
            }
            _ => Err(ParseErrorKind::UnmatchedClosingBrace),
        }
    }

    fn in_escape(&mut self, escape: EscapeFrame, token: &Token) -> Result<(), ParseErrorKind> {
        match (token, escape.consumed) {
            // '' is a literal quote
            (Token::Escape, false) => {
                let mut quote = [0; 4];
                self.current_sequence()
                    .push_text(ESCAPE_CHAR.encode_utf8(&mut quote));
            }
            (Token::Escape, true) => {}
            (other, _) => {
                self.current_sequence().push_text(other.as_source());
                self.stack
                    .push(Frame::Escape(EscapeFrame { consumed: true }));
            }
        }
        Ok(())
    }

    fn in_replace(&mut self, stage: ReplaceStage, token: &Token) -> Result<(), ParseErrorKind> {
        let next = match (stage, token) {
            (stage, Token::Whitespace(_)) => stage,
            (ReplaceStage::VariableName, Token::Text(name)) => {
                ReplaceStage::AfterVariableName { name: name.clone() }
            }
            (ReplaceStage::AfterVariableName { name }, Token::RightBrace) => {
                self.current_sequence().push_node(Node::Placeholder(name));
                return Ok(());
            }
            (ReplaceStage::AfterVariableName { name }, Token::Comma) => {
                ReplaceStage::OperatorName { name }
            }
            (ReplaceStage::OperatorName { name }, Token::Text(operator)) => {
                let kind = BranchKind::from_operator(operator)
                    .ok_or_else(|| ParseErrorKind::invalid_operator(operator))?;
                ReplaceStage::AfterOperatorName { name, kind }
            }
            (ReplaceStage::AfterOperatorName { name, kind }, Token::Comma) => {
                ReplaceStage::Options {
                    branch: Branch::new(name, kind),
                    pending_key: None,
                }
            }
            (
                ReplaceStage::Options {
                    branch,
                    pending_key: None,
                },
                Token::Text(key),
            ) => ReplaceStage::Options {
                branch,
                pending_key: Some(key.clone()),
            },
            (
                ReplaceStage::Options {
                    branch,
                    pending_key: Some(key),
                },
                Token::LeftBrace,
            ) => {
                let sequence = SequenceBuilder {
                    number_fields: branch.kind == BranchKind::Plural,
                    ..SequenceBuilder::default()
                };
                self.stack.push(Frame::Replace(ReplaceStage::Options {
                    branch,
                    pending_key: None,
                }));
                return self.open(Frame::Content(OptionContent { key, sequence }));
            }
            (
                ReplaceStage::Options {
                    branch,
                    pending_key: None,
                },
                Token::RightBrace,
            ) => {
                if branch.options.is_empty() {
                    return Err(ParseErrorKind::EmptyBranch { name: branch.name });
                }
                self.current_sequence().push_node(Node::Branch(branch));
                return Ok(());
            }
            (stage, token) => {
                return Err(ParseErrorKind::UnexpectedToken {
                    token: token.clone(),
                    state: stage.state(),
                });
            }
        };
        self.stack.push(Frame::Replace(next));
        Ok(())
    }

    /// Finish parsing at end of input.
    fn finish(self) -> Result<Node, ParseErrorKind> {
        match self.stack.last() {
            None => Ok(self.root.finish()),
            Some(Frame::Escape(_)) => Err(ParseErrorKind::UnclosedEscape),
            Some(Frame::Replace(_) | Frame::Content(_)) => Err(ParseErrorKind::UnclosedBrace),
        }
    }
}
