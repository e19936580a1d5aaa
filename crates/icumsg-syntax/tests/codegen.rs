//! Integration tests for Rust code generation.

use icumsg_syntax::codegen::{escape_format, escape_str};
use icumsg_syntax::{GenerateOptions, Node, generate, parse_str};

fn options() -> GenerateOptions {
    GenerateOptions::builder().runtime_path("rt").build()
}

fn lines(template: &str) -> Vec<String> {
    generate(&parse_str(template).unwrap(), &options())
}

// =============================================================================
// Flat templates
// =============================================================================

#[test]
fn test_pure_literal() {
    assert_eq!(lines("Hello, world!"), vec![r#"String::from("Hello, world!")"#]);
}

#[test]
fn test_empty_template() {
    assert_eq!(lines(""), vec![r#"String::from("")"#]);
}

#[test]
fn test_placeholder() {
    assert_eq!(
        lines("Hello {name}!"),
        vec![r#"format!("Hello {}!", rt::text(values, sink, "name"))"#]
    );
}

#[test]
fn test_literal_braces_are_doubled_in_format_strings() {
    assert_eq!(
        lines("'{'{name}'}'"),
        vec![r#"format!("{{{}}}", rt::text(values, sink, "name"))"#]
    );
    assert_eq!(lines("'{}'"), vec![r#"String::from("{}")"#]);
}

#[test]
fn test_quotes_and_newlines_are_escaped() {
    assert_eq!(
        lines("say \"hi\"\n{name}"),
        vec![r#"format!("say \"hi\"\n{}", rt::text(values, sink, "name"))"#]
    );
}

#[test]
fn test_number_field_without_plural() {
    let node = Node::Sequence(vec![Node::NumberField, Node::Literal(" left".into())]);
    assert_eq!(generate(&node, &options()), vec![r#"String::from("{#} left")"#]);
}

#[test]
fn test_default_options() {
    assert_eq!(
        generate(&parse_str("{name}").unwrap(), &GenerateOptions::default()),
        vec![r#"format!("{}", ::icumsg::runtime::text(values, sink, "name"))"#]
    );
}

#[test]
fn test_custom_values_ident() {
    let options = GenerateOptions::builder()
        .runtime_path("rt")
        .values_ident("args")
        .build();
    assert_eq!(
        generate(&parse_str("{name}").unwrap(), &options),
        vec![r#"format!("{}", rt::text(args, sink, "name"))"#]
    );
}

#[test]
fn test_custom_sink_ident() {
    let options = GenerateOptions::builder()
        .runtime_path("rt")
        .sink_ident("diagnostics")
        .build();
    let generated = generate(
        &parse_str("{g, select, a{{name}} other{#}}").unwrap(),
        &options,
    );
    assert_eq!(
        generated,
        vec![
            r#"rt::resolve_select(values, diagnostics, "g", &["#,
            r#"    ("a", rt::Arm::Lazy(&|diagnostics: &mut dyn rt::DiagnosticSink| format!("{}", rt::text(values, diagnostics, "name")))),"#,
            r##"    ("other", rt::Arm::Text("#")),"##,
            r#"])"#,
        ]
    );
}

// =============================================================================
// Branches
// =============================================================================

#[test]
fn test_select_with_text_arms() {
    assert_eq!(
        lines("{gender, select, male{sir} other{friend}}"),
        vec![
            r#"rt::resolve_select(values, sink, "gender", &["#,
            r#"    ("male", rt::Arm::Text("sir")),"#,
            r#"    ("other", rt::Arm::Text("friend")),"#,
            r#"])"#,
        ]
    );
}

#[test]
fn test_plural_in_sequence() {
    assert_eq!(
        lines("You have {count, plural, =1{# apple} other{# apples}}"),
        vec![
            r#"{"#,
            r#"    let mut out = String::new();"#,
            r#"    out.push_str("You have ");"#,
            r#"    out.push_str(&rt::resolve_plural(values, sink, "count", &["#,
            r#"        ("=1", rt::Arm::Lazy(&|_: &mut dyn rt::DiagnosticSink| format!("{} apple", rt::number(values, "count")))),"#,
            r#"        ("other", rt::Arm::Lazy(&|_: &mut dyn rt::DiagnosticSink| format!("{} apples", rt::number(values, "count")))),"#,
            r#"    ]));"#,
            r#"    out"#,
            r#"}"#,
        ]
    );
}

#[test]
fn test_flat_parts_after_branch_form_one_run() {
    assert_eq!(
        lines("{g, select, other{x}} and {name}!"),
        vec![
            r#"{"#,
            r#"    let mut out = String::new();"#,
            r#"    out.push_str(&rt::resolve_select(values, sink, "g", &["#,
            r#"        ("other", rt::Arm::Text("x")),"#,
            r#"    ]));"#,
            r#"    out.push_str(&format!(" and {}!", rt::text(values, sink, "name")));"#,
            r#"    out"#,
            r#"}"#,
        ]
    );
}

#[test]
fn test_nested_branch_arm() {
    assert_eq!(
        lines("{g, select, other{{n, plural, other{#}}}}"),
        vec![
            r#"rt::resolve_select(values, sink, "g", &["#,
            r#"    ("other", rt::Arm::Lazy(&|sink: &mut dyn rt::DiagnosticSink| rt::resolve_plural(values, sink, "n", &["#,
            r#"        ("other", rt::Arm::Lazy(&|_: &mut dyn rt::DiagnosticSink| format!("{}", rt::number(values, "n")))),"#,
            r#"    ]))),"#,
            r#"])"#,
        ]
    );
}

#[test]
fn test_number_field_uses_nearest_plural() {
    let generated = lines("{a, plural, other{{b, select, other{{c}}}}}").join("\n");
    assert!(generated.contains(r#"rt::resolve_select(values, sink, "b""#));
    assert!(generated.contains(r#"rt::text(values, sink, "c")"#));

    let generated = lines("{a, plural, other{{b, plural, other{#}}}}").join("\n");
    assert!(generated.contains(r#"rt::number(values, "b")"#));
    assert!(!generated.contains(r#"rt::number(values, "a")"#));
}

#[test]
fn test_sequence_arm_becomes_block() {
    assert_eq!(
        lines("{n, plural, other{# {g, select, other{x}}}}"),
        vec![
            r#"rt::resolve_plural(values, sink, "n", &["#,
            r#"    ("other", rt::Arm::Lazy(&|sink: &mut dyn rt::DiagnosticSink| {"#,
            r#"        let mut out = String::new();"#,
            r#"        out.push_str(&format!("{} ", rt::number(values, "n")));"#,
            r#"        out.push_str(&rt::resolve_select(values, sink, "g", &["#,
            r#"            ("other", rt::Arm::Text("x")),"#,
            r#"        ]));"#,
            r#"        out"#,
            r#"    })),"#,
            r#"])"#,
        ]
    );
}

#[test]
fn test_initial_indent() {
    let options = GenerateOptions::builder()
        .runtime_path("rt")
        .initial_indent(1)
        .build();
    assert_eq!(
        generate(&parse_str("{g, select, other{x}}").unwrap(), &options),
        vec![
            r#"    rt::resolve_select(values, sink, "g", &["#,
            r#"        ("other", rt::Arm::Text("x")),"#,
            r#"    ])"#,
        ]
    );
}

#[test]
fn test_option_keys_and_names_are_escaped() {
    let generated = lines(r#"{a"b, select, k\{x}}"#).join("\n");
    assert!(generated.contains(r#"rt::resolve_select(values, sink, "a\"b", &["#));
    assert!(generated.contains(r#"("k\\", rt::Arm::Text("x")),"#));
}

// =============================================================================
// Escaping helpers
// =============================================================================

#[test]
fn test_escape_str() {
    assert_eq!(escape_str(r#"a\b"c"#), r#"a\\b\"c"#);
    assert_eq!(escape_str("tab\there"), "tab\\there");
    assert_eq!(escape_str("{}"), "{}");
    assert_eq!(escape_str("\u{1b}"), "\\u{1b}");
}

#[test]
fn test_escape_format() {
    assert_eq!(escape_format("{x}"), "{{x}}");
    assert_eq!(escape_format("\"\n"), "\\\"\\n");
}
