//! Rust code generation for parsed templates.
//!
//! The generator walks the same tree the interpreter walks, but instead of
//! choosing branches it emits calls to the runtime helpers
//! (`resolve_select`, `resolve_plural`, `text`, `number`) that make the same
//! choices later, when the generated code runs. The output is a single
//! expression of type `String` that reads a `&Values` binding and reports
//! diagnostics to a `&mut dyn DiagnosticSink` binding:
//!
//! - a subtree without branches becomes one `format!` (or `String::from` when
//!   it is pure text)
//! - a branch becomes a resolver call with one `("key", Arm)` line per option
//! - a sequence containing branches becomes a block that appends each part
//!   to an output buffer

mod escape;

use bon::Builder;

pub use escape::{escape_format, escape_str};

use crate::parser::ast::{Branch, BranchKind, Node};

/// Code generator configuration.
///
/// # Example
///
/// ```
/// use icumsg_syntax::{GenerateOptions, generate, parse_str};
///
/// let node = parse_str("Hello {name}").unwrap();
/// let options = GenerateOptions::builder().runtime_path("rt").build();
/// assert_eq!(
///     generate(&node, &options),
///     vec![r#"format!("Hello {}", rt::text(values, sink, "name"))"#.to_string()]
/// );
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct GenerateOptions {
    /// Path of the module providing the runtime helpers.
    #[builder(default = "::icumsg::runtime".to_string())]
    pub runtime_path: String,

    /// Name of the `&Values` binding the generated code reads from.
    #[builder(default = "values".to_string())]
    pub values_ident: String,

    /// Name of the `&mut dyn DiagnosticSink` binding diagnostics go to.
    #[builder(default = "sink".to_string())]
    pub sink_ident: String,

    /// Name of the local output buffer used by sequences with branches.
    /// Must differ from `values_ident` and `sink_ident`.
    #[builder(default = "out".to_string())]
    pub buffer_ident: String,

    /// One level of indentation.
    #[builder(default = "    ".to_string())]
    pub indent: String,

    /// Indentation level of the first line.
    #[builder(default)]
    pub initial_indent: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions::builder().build()
    }
}

/// Generate source lines for one Rust expression reproducing `node`.
///
/// Every line is fully indented, starting at `options.initial_indent`.
pub fn generate(node: &Node, options: &GenerateOptions) -> Vec<String> {
    let generator = Generator { options };
    let mut lines = generator.expression(node, options.initial_indent, None);
    let indent = generator.indent(options.initial_indent);
    if let Some(first) = lines.first_mut() {
        first.insert_str(0, &indent);
    }
    lines
}

struct Generator<'a> {
    options: &'a GenerateOptions,
}

/// A piece of a branch-free subtree.
enum Piece {
    Text(String),
    /// Expression evaluating to something `Display`.
    Arg(String),
}

/// A branch-free subtree reduced to either plain text or a format call.
enum Flat {
    Literal(String),
    Format { format: String, args: Vec<String> },
}

impl Generator<'_> {
    fn indent(&self, level: usize) -> String {
        self.options.indent.repeat(level)
    }

    fn runtime(&self, item: &str) -> String {
        format!("{}::{item}", self.options.runtime_path)
    }

    /// Lines of an expression. The first line is not indented so callers can
    /// prefix it; the following lines are indented relative to `level`.
    fn expression<'n>(
        &self,
        node: &'n Node,
        level: usize,
        number: Option<&'n str>,
    ) -> Vec<String> {
        match node {
            Node::Branch(branch) => self.branch(branch, level, number),
            Node::Sequence(parts) if node.contains_branch() => self.block(parts, level, number),
            flat => vec![self.format_expression(self.flatten(&[flat], number))],
        }
    }

    fn block<'n>(&self, parts: &'n [Node], level: usize, number: Option<&'n str>) -> Vec<String> {
        let inner = self.indent(level + 1);
        let buffer = &self.options.buffer_ident;
        let mut lines = vec![
            "{".to_string(),
            format!("{inner}let mut {buffer} = String::new();"),
        ];
        let mut run: Vec<&Node> = Vec::new();
        for part in parts {
            if part.contains_branch() {
                self.push_run(&mut run, &mut lines, level + 1, number);
                let mut expression = self.expression(part, level + 1, number);
                wrap(&mut expression, &format!("{inner}{buffer}.push_str(&"), ");");
                lines.extend(expression);
            } else {
                run.push(part);
            }
        }
        self.push_run(&mut run, &mut lines, level + 1, number);
        lines.push(format!("{inner}{buffer}"));
        lines.push(format!("{}}}", self.indent(level)));
        lines
    }

    /// Append the pending branch-free parts to the buffer as one statement.
    fn push_run(
        &self,
        run: &mut Vec<&Node>,
        lines: &mut Vec<String>,
        level: usize,
        number: Option<&str>,
    ) {
        if run.is_empty() {
            return;
        }
        let indent = self.indent(level);
        let buffer = &self.options.buffer_ident;
        let statement = match self.flatten(run, number) {
            Flat::Literal(text) => format!("{indent}{buffer}.push_str(\"{}\");", escape_str(&text)),
            format => format!("{indent}{buffer}.push_str(&{});", self.format_expression(format)),
        };
        lines.push(statement);
        run.clear();
    }

    fn branch<'n>(&self, branch: &'n Branch, level: usize, number: Option<&'n str>) -> Vec<String> {
        let (resolver, option_number) = match branch.kind {
            BranchKind::Plural => ("resolve_plural", Some(branch.name.as_str())),
            BranchKind::Select => ("resolve_select", number),
        };
        let inner = self.indent(level + 1);
        let mut lines = vec![format!(
            "{}({}, {}, \"{}\", &[",
            self.runtime(resolver),
            self.options.values_ident,
            self.options.sink_ident,
            escape_str(&branch.name)
        )];
        for option in &branch.options {
            let mut arm = self.arm(&option.content, level + 1, option_number);
            wrap(&mut arm, &format!("{inner}(\"{}\", ", escape_str(&option.key)), "),");
            lines.extend(arm);
        }
        lines.push(format!("{}])", self.indent(level)));
        lines
    }

    /// An option value: plain text when possible, otherwise a thunk so only
    /// the chosen option is ever rendered.
    fn arm<'n>(&self, content: &'n Node, level: usize, number: Option<&'n str>) -> Vec<String> {
        let arm = self.runtime("Arm");
        if content.contains_branch() {
            let mut lines = self.expression(content, level, number);
            wrap(&mut lines, &self.lazy_prefix(content), ")");
            return lines;
        }
        match self.flatten(&[content], number) {
            Flat::Literal(text) => vec![format!("{arm}::Text(\"{}\")", escape_str(&text))],
            format => vec![format!(
                "{}{})",
                self.lazy_prefix(content),
                self.format_expression(format)
            )],
        }
    }

    /// `Arm::Lazy(&|sink: &mut dyn DiagnosticSink| `, with the parameter
    /// ignored when the content reads no values.
    fn lazy_prefix(&self, content: &Node) -> String {
        let parameter = if content.variables().is_empty() {
            "_"
        } else {
            self.options.sink_ident.as_str()
        };
        format!(
            "{}::Lazy(&|{parameter}: &mut dyn {}| ",
            self.runtime("Arm"),
            self.runtime("DiagnosticSink")
        )
    }

    fn flatten(&self, nodes: &[&Node], number: Option<&str>) -> Flat {
        let mut pieces = Vec::new();
        for node in nodes {
            self.collect_pieces(node, number, &mut pieces);
        }
        if pieces.iter().all(|piece| matches!(piece, Piece::Text(_))) {
            let text = pieces
                .into_iter()
                .filter_map(|piece| match piece {
                    Piece::Text(text) => Some(text),
                    Piece::Arg(_) => None,
                })
                .collect();
            return Flat::Literal(text);
        }
        let mut format = String::new();
        let mut args = Vec::new();
        for piece in pieces {
            match piece {
                Piece::Text(text) => format.push_str(&escape_format(&text)),
                Piece::Arg(arg) => {
                    format.push_str("{}");
                    args.push(arg);
                }
            }
        }
        Flat::Format { format, args }
    }

    fn collect_pieces(&self, node: &Node, number: Option<&str>, pieces: &mut Vec<Piece>) {
        match node {
            Node::Literal(text) => pieces.push(Piece::Text(text.clone())),
            Node::Placeholder(name) => pieces.push(Piece::Arg(self.text_call(name))),
            Node::NumberField => match number {
                Some(name) => pieces.push(Piece::Arg(self.number_call(name))),
                None => pieces.push(Piece::Text("{#}".to_string())),
            },
            Node::Sequence(parts) => {
                for part in parts {
                    self.collect_pieces(part, number, pieces);
                }
            }
            Node::Branch(branch) => {
                let lines = self.branch(branch, 0, number);
                let inline: Vec<&str> = lines.iter().map(String::as_str).map(str::trim).collect();
                pieces.push(Piece::Arg(inline.join(" ")));
            }
        }
    }

    fn text_call(&self, name: &str) -> String {
        format!(
            "{}({}, {}, \"{}\")",
            self.runtime("text"),
            self.options.values_ident,
            self.options.sink_ident,
            escape_str(name)
        )
    }

    fn number_call(&self, name: &str) -> String {
        format!(
            "{}({}, \"{}\")",
            self.runtime("number"),
            self.options.values_ident,
            escape_str(name)
        )
    }

    fn format_expression(&self, flat: Flat) -> String {
        match flat {
            Flat::Literal(text) => format!("String::from(\"{}\")", escape_str(&text)),
            Flat::Format { format, args } => format!("format!(\"{format}\", {})", args.join(", ")),
        }
    }
}

fn wrap(lines: &mut [String], prefix: &str, suffix: &str) {
    if let Some(first) = lines.first_mut() {
        first.insert_str(0, prefix);
    }
    if let Some(last) = lines.last_mut() {
        last.push_str(suffix);
    }
}
