use proc_macro::TokenStream;

mod codegen;
mod input;
mod parse;
mod validate;

/// The messages! macro for compiling message templates ahead of time.
///
/// Each template is parsed at compile time and turned into a Rust function
/// that renders it with the same rules as `icumsg::interpret`. Templates
/// that fail to parse are compile errors pointing at the string literal.
///
/// # Generated Code
///
/// For each locale block, the macro generates:
/// - A module named after the locale
/// - Inside it, one function per message:
///   `pub fn key(values: &::icumsg::Values, sink: &mut dyn ::icumsg::DiagnosticSink) -> String`
///
/// Diagnostics raised while rendering (missing values, unmatched options)
/// are reported to `sink`.
///
/// Additionally generates:
/// - `catalog()` returning an `::icumsg::Catalog` with every message
///
/// # Example
///
/// ```ignore
/// messages! {
///     en {
///         apples = "You have {count, plural, =1{# apple} other{# apples}}";
///     }
///     de {
///         apples = "Du hast {count, plural, =1{# Apfel} other{# Äpfel}}";
///     }
/// }
///
/// // Generated: pub mod en { pub fn apples(values, sink) -> String }
/// // Generated: pub mod de { pub fn apples(values, sink) -> String }
/// // Generated: pub fn catalog() -> Catalog
/// ```
#[proc_macro]
pub fn messages(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as input::MacroInput);

    if let Err(e) = validate::validate(&input) {
        return e.to_compile_error().into();
    }

    match codegen::codegen(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
