//! Template evaluation.

use std::fmt::Write;

use icumsg_syntax::{Branch, BranchKind, Node, OTHER_KEY, parse_str, plural_category};

use crate::interpreter::context::RenderContext;
use crate::interpreter::error::Diagnostic;
use crate::interpreter::sink::{DiagnosticSink, TracingSink};
use crate::types::{Values, format_number};

/// Render a parsed template, logging diagnostics through [`TracingSink`].
pub fn render(node: &Node, values: &Values) -> String {
    render_with(node, values, &mut TracingSink)
}

/// Render a parsed template, reporting diagnostics to `sink`.
///
/// Rendering is total: problems with the supplied values are reported and
/// replaced by a `{name}` placeholder in the output.
pub fn render_with(node: &Node, values: &Values, sink: &mut dyn DiagnosticSink) -> String {
    let mut ctx = RenderContext::new(values, sink);
    let mut out = String::new();
    render_node(node, &mut ctx, &mut out);
    out
}

/// Parse and render a template string, logging diagnostics through
/// [`TracingSink`].
///
/// # Example
///
/// ```
/// use icumsg::{interpret, values};
///
/// let template = "You have {count, plural, =1{# apple} other{# apples}}";
/// assert_eq!(interpret(template, &values! { "count" => 1 }), "You have 1 apple");
/// assert_eq!(interpret(template, &values! { "count" => 7 }), "You have 7 apples");
/// ```
pub fn interpret(template: &str, values: &Values) -> String {
    interpret_with(template, values, &mut TracingSink)
}

/// Parse and render a template string, reporting diagnostics to `sink`.
///
/// A template that fails to parse is reported as
/// [`Diagnostic::InvalidTemplate`] and returned unchanged.
pub fn interpret_with(template: &str, values: &Values, sink: &mut dyn DiagnosticSink) -> String {
    match parse_str(template) {
        Ok(node) => render_with(&node, values, sink),
        Err(error) => {
            sink.report(Diagnostic::InvalidTemplate {
                template: template.to_string(),
                error,
            });
            template.to_string()
        }
    }
}

fn render_node(node: &Node, ctx: &mut RenderContext<'_>, out: &mut String) {
    match node {
        Node::Sequence(parts) => {
            for part in parts {
                render_node(part, ctx, out);
            }
        }
        Node::Literal(text) => out.push_str(text),
        Node::NumberField => match ctx.number() {
            Some(n) => out.push_str(&format_number(n)),
            None => out.push_str("{#}"),
        },
        Node::Placeholder(name) => match ctx.value(name) {
            Some(value) => {
                let _ = write!(out, "{value}");
            }
            None => {
                ctx.report(Diagnostic::MissingValue { name: name.clone() });
                push_placeholder(out, name);
            }
        },
        Node::Branch(branch) => match branch.kind {
            BranchKind::Select => render_select(branch, ctx, out),
            BranchKind::Plural => render_plural(branch, ctx, out),
        },
    }
}

fn render_select(branch: &Branch, ctx: &mut RenderContext<'_>, out: &mut String) {
    let Some(value) = ctx.value(&branch.name) else {
        ctx.report(Diagnostic::MissingValue {
            name: branch.name.clone(),
        });
        match branch.option(OTHER_KEY) {
            Some(content) => render_node(content, ctx, out),
            None => push_placeholder(out, &branch.name),
        }
        return;
    };
    let key = value.to_string();
    match branch.select(&key) {
        Some(content) => render_node(content, ctx, out),
        None => missing_option(branch, key, ctx, out),
    }
}

fn render_plural(branch: &Branch, ctx: &mut RenderContext<'_>, out: &mut String) {
    let Some(value) = ctx.value(&branch.name) else {
        ctx.report(Diagnostic::MissingValue {
            name: branch.name.clone(),
        });
        push_placeholder(out, &branch.name);
        return;
    };
    let Some(n) = value.plural_operand() else {
        ctx.report(Diagnostic::NotNumeric {
            name: branch.name.clone(),
            value: value.to_string(),
        });
        push_placeholder(out, &branch.name);
        return;
    };
    let key = plural_category(n);
    match branch.select(key) {
        Some(content) => ctx.with_number(n, |ctx| render_node(content, ctx, out)),
        None => missing_option(branch, key.to_string(), ctx, out),
    }
}

fn missing_option(branch: &Branch, key: String, ctx: &mut RenderContext<'_>, out: &mut String) {
    ctx.report(Diagnostic::MissingOption {
        name: branch.name.clone(),
        key,
    });
    push_placeholder(out, &branch.name);
}

fn push_placeholder(out: &mut String, name: &str) {
    out.push('{');
    out.push_str(name);
    out.push('}');
}
