//! Parse implementations for converting TokenStream to macro AST.

use icumsg_syntax::parse_str;
use syn::parse::{Parse, ParseStream};
use syn::{Ident, LitStr, Token};

use crate::input::{LocaleBlock, MacroInput, MessageDefinition, SpannedIdent};

impl Parse for MacroInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut locales = Vec::new();
        while !input.is_empty() {
            locales.push(input.parse()?);
        }
        Ok(MacroInput { locales })
    }
}

impl Parse for LocaleBlock {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name_ident: Ident = input.parse()?;
        let content;
        syn::braced!(content in input);
        let mut messages = Vec::new();
        while !content.is_empty() {
            messages.push(content.parse()?);
        }
        Ok(LocaleBlock {
            name: SpannedIdent::new(&name_ident),
            messages,
        })
    }
}

impl Parse for MessageDefinition {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name_ident: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        let literal: LitStr = input.parse()?;
        input.parse::<Token![;]>()?;

        let template = parse_str(&literal.value())
            .map_err(|e| syn::Error::new(literal.span(), format!("invalid template: {e}")))?;

        Ok(MessageDefinition {
            name: SpannedIdent::new(&name_ident),
            template,
            span: literal.span(),
        })
    }
}
