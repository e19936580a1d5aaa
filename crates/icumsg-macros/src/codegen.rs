//! Code generation for the messages! macro.
//!
//! Transforms validated MacroInput into Rust code that provides:
//! - A module per locale with one function per message
//! - catalog() registering every message in an `::icumsg::Catalog`

use icumsg_syntax::{GenerateOptions, generate};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::input::{LocaleBlock, MacroInput, MessageDefinition};

/// Main code generation entry point.
pub fn codegen(input: &MacroInput) -> syn::Result<TokenStream> {
    let modules = input
        .locales
        .iter()
        .map(generate_locale_module)
        .collect::<syn::Result<Vec<_>>>()?;
    let catalog = generate_catalog(input);

    Ok(quote! {
        #(#modules)*
        #catalog
    })
}

// =============================================================================
// Message Function Generation
// =============================================================================

fn generate_locale_module(locale: &LocaleBlock) -> syn::Result<TokenStream> {
    let mod_name = locale.name.ident();
    let doc = format!("Messages for the \"{}\" locale.", locale.name.name);
    let functions = locale
        .messages
        .iter()
        .map(|message| generate_function(&locale.name.name, message))
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        #[doc = #doc]
        pub mod #mod_name {
            #(#functions)*
        }
    })
}

/// Generate a single message function.
///
/// `pub fn key(values: &::icumsg::Values, sink: &mut dyn ::icumsg::DiagnosticSink) -> String`
fn generate_function(locale: &str, message: &MessageDefinition) -> syn::Result<TokenStream> {
    let fn_name = message.name.ident();
    let doc = format!("Renders the \"{}\" message for \"{locale}\".", message.name.name);
    let body = generate_body(message)?;
    let (values, sink) = if message.template.variables().is_empty() {
        (format_ident!("_values"), format_ident!("_sink"))
    } else {
        (format_ident!("values"), format_ident!("sink"))
    };

    Ok(quote! {
        #[doc = #doc]
        pub fn #fn_name(
            #values: &::icumsg::Values,
            #sink: &mut dyn ::icumsg::DiagnosticSink,
        ) -> ::std::string::String {
            #body
        }
    })
}

/// Turn the code generator's source lines into an expression.
fn generate_body(message: &MessageDefinition) -> syn::Result<syn::Expr> {
    let source = generate(&message.template, &GenerateOptions::default()).join("\n");
    syn::parse_str(&source).map_err(|e| {
        syn::Error::new(
            message.span,
            format!("failed to generate code for '{}': {e}", message.name.name),
        )
    })
}

// =============================================================================
// Catalog Generation
// =============================================================================

/// Generate `catalog()`. Messages without values are registered as text,
/// everything else as the generated function.
fn generate_catalog(input: &MacroInput) -> TokenStream {
    let inserts: Vec<TokenStream> = input
        .locales
        .iter()
        .flat_map(|locale| {
            locale
                .messages
                .iter()
                .map(move |message| generate_catalog_insert(locale, message))
        })
        .collect();

    if inserts.is_empty() {
        return quote! {
            /// Returns a catalog with every message defined in this block.
            pub fn catalog() -> ::icumsg::Catalog {
                ::icumsg::Catalog::new()
            }
        };
    }

    quote! {
        /// Returns a catalog with every message defined in this block.
        pub fn catalog() -> ::icumsg::Catalog {
            let mut catalog = ::icumsg::Catalog::new();
            #(#inserts)*
            catalog
        }
    }
}

fn generate_catalog_insert(locale: &LocaleBlock, message: &MessageDefinition) -> TokenStream {
    let locale_name = &locale.name.name;
    let key = &message.name.name;
    let entry = match message.template.literal_text() {
        Some(text) => quote! {
            ::icumsg::TranslationEntry::Text(::std::borrow::Cow::Borrowed(#text))
        },
        None => {
            let mod_name = locale.name.ident();
            let fn_name = message.name.ident();
            quote! {
                ::icumsg::TranslationEntry::Function(#mod_name::#fn_name)
            }
        }
    };
    quote! {
        catalog.insert(#locale_name, #key, #entry);
    }
}
