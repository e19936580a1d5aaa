//! ICU-style message templates.
//!
//! Templates such as `"You have {count, plural, =1{# apple} other{# apples}}"`
//! can be rendered at run time with [`interpret`], or compiled ahead of time
//! into Rust functions with the [`messages!`] macro. Both paths share the
//! parser and selection rules in [`syntax`], so they produce identical output.

pub mod catalog;
pub mod interpreter;
pub mod runtime;
pub mod types;

pub use icumsg_syntax as syntax;
pub use icumsg_syntax::{Node, ParseError, ParseErrorKind, lex, parse, parse_str, plural_category};

pub use catalog::{Catalog, TranslationEntry, Translator};
pub use interpreter::{
    Diagnostic, DiagnosticCollector, DiagnosticKind, DiagnosticSink, LoadError, RenderContext,
    TracingSink, interpret, interpret_with, render, render_with,
};
pub use types::{Value, Values, format_number};

// Re-export the messages! macro
pub use icumsg_macros::messages;

/// Creates a [`Values`] map from key-value pairs.
///
/// Values are converted via `Into<Value>`, so integers, floats, strings and
/// bools can be passed directly.
///
/// # Example
///
/// ```
/// use icumsg::values;
///
/// let v = values! { "count" => 3, "name" => "Alice" };
/// assert_eq!(v.len(), 2);
/// assert_eq!(v["count"].as_number(), Some(3));
/// assert_eq!(v["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! values {
    {} => {
        $crate::Values::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Values::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
