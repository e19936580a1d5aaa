//! Helpers called by code generated from templates.
//!
//! The `messages!` macro expands each template into calls to these functions.
//! They apply exactly the selection rules of the interpreter, so compiled
//! and interpreted messages render identically. Diagnostics go to the sink
//! the generated function was called with.

use icumsg_syntax::{OTHER_KEY, plural_category, select_option};

pub use crate::interpreter::DiagnosticSink;
use crate::interpreter::Diagnostic;
use crate::types::{Value, Values, format_number};

/// The content of one branch option in generated code.
pub enum Arm<'a> {
    /// Content without values, available without rendering.
    Text(&'a str),
    /// Content rendered only when its option is chosen.
    Lazy(&'a dyn Fn(&mut dyn DiagnosticSink) -> String),
}

impl Arm<'_> {
    pub fn render(&self, sink: &mut dyn DiagnosticSink) -> String {
        match self {
            Arm::Text(text) => (*text).to_string(),
            Arm::Lazy(render) => render(sink),
        }
    }
}

/// Display a value, or `{name}` when it is missing.
pub fn text(values: &Values, sink: &mut dyn DiagnosticSink, name: &str) -> String {
    match values.get(name) {
        Some(value) => value.to_string(),
        None => {
            sink.report(Diagnostic::MissingValue {
                name: name.to_string(),
            });
            placeholder(name)
        }
    }
}

/// Display the number a plural branch selected on, or `{#}` when the value
/// is not numeric.
pub fn number(values: &Values, name: &str) -> String {
    values
        .get(name)
        .and_then(Value::plural_operand)
        .map_or_else(|| "{#}".to_string(), format_number)
}

/// Resolve a select branch.
///
/// # Example
///
/// ```
/// use icumsg::interpreter::TracingSink;
/// use icumsg::runtime::{Arm, resolve_select};
/// use icumsg::values;
///
/// let arms = [("male", Arm::Text("sir")), ("other", Arm::Text("friend"))];
/// let male = values! { "gender" => "male" };
/// assert_eq!(resolve_select(&male, &mut TracingSink, "gender", &arms), "sir");
/// let unknown = values! { "gender" => "x" };
/// assert_eq!(resolve_select(&unknown, &mut TracingSink, "gender", &arms), "friend");
/// ```
pub fn resolve_select(
    values: &Values,
    sink: &mut dyn DiagnosticSink,
    name: &str,
    arms: &[(&str, Arm<'_>)],
) -> String {
    let Some(value) = values.get(name) else {
        sink.report(Diagnostic::MissingValue {
            name: name.to_string(),
        });
        return match find_exact(arms, OTHER_KEY) {
            Some(arm) => arm.render(sink),
            None => placeholder(name),
        };
    };
    let key = value.to_string();
    match find_arm(arms, &key) {
        Some(arm) => arm.render(sink),
        None => missing_option(sink, name, key),
    }
}

/// Resolve a plural branch by the category of its numeric value.
pub fn resolve_plural(
    values: &Values,
    sink: &mut dyn DiagnosticSink,
    name: &str,
    arms: &[(&str, Arm<'_>)],
) -> String {
    let Some(value) = values.get(name) else {
        sink.report(Diagnostic::MissingValue {
            name: name.to_string(),
        });
        return placeholder(name);
    };
    let Some(n) = value.plural_operand() else {
        sink.report(Diagnostic::NotNumeric {
            name: name.to_string(),
            value: value.to_string(),
        });
        return placeholder(name);
    };
    let key = plural_category(n);
    match find_arm(arms, key) {
        Some(arm) => arm.render(sink),
        None => missing_option(sink, name, key.to_string()),
    }
}

fn find_arm<'a, 'b>(arms: &'a [(&'a str, Arm<'b>)], key: &str) -> Option<&'a Arm<'b>> {
    select_option(arms.iter().map(|(k, arm)| (*k, arm)), key)
}

fn find_exact<'a, 'b>(arms: &'a [(&'a str, Arm<'b>)], key: &str) -> Option<&'a Arm<'b>> {
    arms.iter().find(|(k, _)| *k == key).map(|(_, arm)| arm)
}

fn missing_option(sink: &mut dyn DiagnosticSink, name: &str, key: String) -> String {
    sink.report(Diagnostic::MissingOption {
        name: name.to_string(),
        key,
    });
    placeholder(name)
}

fn placeholder(name: &str) -> String {
    format!("{{{name}}}")
}
