//! Internal AST types for the messages! macro.
//!
//! Templates are parsed while the macro input is parsed, so each message
//! carries both its template tree and the span of its string literal.

use icumsg_syntax::Node;
use proc_macro2::Span;
use syn::Ident;

/// Top-level macro input containing all locale blocks.
pub struct MacroInput {
    pub locales: Vec<LocaleBlock>,
}

/// A locale block: `en { ... }`
pub struct LocaleBlock {
    pub name: SpannedIdent,
    pub messages: Vec<MessageDefinition>,
}

/// A single message: `key = "template";`
pub struct MessageDefinition {
    pub name: SpannedIdent,
    pub template: Node,
    /// Span of the template string literal.
    pub span: Span,
}

/// Wrapper for identifiers that preserves span information.
#[derive(Clone)]
pub struct SpannedIdent {
    pub name: String,
    pub span: Span,
}

impl SpannedIdent {
    pub fn new(ident: &Ident) -> Self {
        Self {
            name: ident.to_string(),
            span: ident.span(),
        }
    }

    /// Get an identifier with the original span.
    pub fn ident(&self) -> Ident {
        Ident::new(&self.name, self.span)
    }
}
