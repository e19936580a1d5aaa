//! Escaping of literal text for Rust string literals.
//!
//! Template-level quoting has already been resolved by the parser; these
//! functions only make text safe to place between `"` in generated source.

use std::fmt::Write;

/// Escape text for a plain string literal.
pub fn escape_str(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        push_escaped(&mut escaped, c);
    }
    escaped
}

/// Escape text for the format string of `format!`, where braces are
/// interpolation triggers.
pub fn escape_format(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '{' => escaped.push_str("{{"),
            '}' => escaped.push_str("}}"),
            _ => push_escaped(&mut escaped, c),
        }
    }
    escaped
}

fn push_escaped(escaped: &mut String, c: char) {
    match c {
        '\\' => escaped.push_str("\\\\"),
        '"' => escaped.push_str("\\\""),
        '\n' => escaped.push_str("\\n"),
        '\r' => escaped.push_str("\\r"),
        '\t' => escaped.push_str("\\t"),
        c if c.is_control() => {
            let _ = write!(escaped, "\\u{{{:x}}}", u32::from(c));
        }
        c => escaped.push(c),
    }
}
