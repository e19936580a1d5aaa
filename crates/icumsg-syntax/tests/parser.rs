//! Integration tests for the template parser.

use icumsg_syntax::{
    Branch, BranchKind, Node, ParseErrorKind, ParseOptions, ParserState, Token, lex, parse_str,
    parse_with,
};

fn literal(text: &str) -> Node {
    Node::Literal(text.into())
}

fn placeholder(name: &str) -> Node {
    Node::Placeholder(name.into())
}

fn branch(name: &str, kind: BranchKind, options: Vec<(&str, Node)>) -> Node {
    let mut branch = Branch::new(name, kind);
    for (key, content) in options {
        branch.insert_option(key, content);
    }
    Node::Branch(branch)
}

fn error_kind(template: &str) -> ParseErrorKind {
    parse_str(template).unwrap_err().kind
}

// =============================================================================
// Basic parsing
// =============================================================================

#[test]
fn test_empty_template() {
    assert_eq!(parse_str("").unwrap(), Node::Sequence(vec![]));
}

#[test]
fn test_pure_literal_collapses() {
    assert_eq!(parse_str("Hello, world!").unwrap(), literal("Hello, world!"));
}

#[test]
fn test_lone_placeholder_collapses() {
    assert_eq!(parse_str("{name}").unwrap(), placeholder("name"));
}

#[test]
fn test_placeholder_in_text() {
    assert_eq!(
        parse_str("Hello {name}!").unwrap(),
        Node::Sequence(vec![literal("Hello "), placeholder("name"), literal("!")])
    );
}

#[test]
fn test_whitespace_inside_braces_is_ignored() {
    assert_eq!(parse_str("{  name  }").unwrap(), placeholder("name"));
}

#[test]
fn test_hashtag_outside_plural_is_literal() {
    assert_eq!(parse_str("# items, #1").unwrap(), literal("# items, #1"));
}

// =============================================================================
// Escaping
// =============================================================================

#[test]
fn test_doubled_quotes() {
    assert_eq!(parse_str("'''''' '{}'").unwrap(), literal("''' {}"));
}

#[test]
fn test_quoted_braces() {
    assert_eq!(parse_str("'{}'").unwrap(), literal("{}"));
}

#[test]
fn test_quoted_runs_merge_with_text() {
    assert_eq!(
        parse_str("Today is '{'special'}' and you have {count, plural, =1{# cat} other{# cats}}")
            .unwrap(),
        Node::Sequence(vec![
            literal("Today is {special} and you have "),
            branch(
                "count",
                BranchKind::Plural,
                vec![
                    ("=1", Node::Sequence(vec![Node::NumberField, literal(" cat")])),
                    ("other", Node::Sequence(vec![Node::NumberField, literal(" cats")])),
                ]
            ),
        ])
    );
}

#[test]
fn test_quote_closes_after_content() {
    assert_eq!(parse_str("'it''s'").unwrap(), literal("its"));
}

#[test]
fn test_quoted_hashtag_in_plural_is_literal() {
    assert_eq!(
        parse_str("{n, plural, other{'#'}}").unwrap(),
        branch("n", BranchKind::Plural, vec![("other", literal("#"))])
    );
}

// =============================================================================
// Branches
// =============================================================================

#[test]
fn test_select_branch() {
    assert_eq!(
        parse_str("{gender, select, male{sir} other{friend}}").unwrap(),
        branch(
            "gender",
            BranchKind::Select,
            vec![("male", literal("sir")), ("other", literal("friend"))]
        )
    );
}

#[test]
fn test_option_content_keeps_whitespace() {
    assert_eq!(
        parse_str("{g, select, other{ hi }}").unwrap(),
        branch("g", BranchKind::Select, vec![("other", literal(" hi "))])
    );
}

#[test]
fn test_empty_option_content() {
    assert_eq!(
        parse_str("{g, select, other{}}").unwrap(),
        branch("g", BranchKind::Select, vec![("other", Node::Sequence(vec![]))])
    );
}

#[test]
fn test_plural_nested_in_select() {
    let node = parse_str(
        "{userType, select, member{Member, {count, plural, =1{# message} other{# messages}}} other{Guest}}",
    )
    .unwrap();
    assert_eq!(
        node,
        branch(
            "userType",
            BranchKind::Select,
            vec![
                (
                    "member",
                    Node::Sequence(vec![
                        literal("Member, "),
                        branch(
                            "count",
                            BranchKind::Plural,
                            vec![
                                (
                                    "=1",
                                    Node::Sequence(vec![Node::NumberField, literal(" message")])
                                ),
                                (
                                    "other",
                                    Node::Sequence(vec![Node::NumberField, literal(" messages")])
                                ),
                            ]
                        ),
                    ])
                ),
                ("other", literal("Guest")),
            ]
        )
    );
}

#[test]
fn test_hashtag_in_select_inside_plural_is_literal() {
    assert_eq!(
        parse_str("{n, plural, other{{g, select, other{#}}}}").unwrap(),
        branch(
            "n",
            BranchKind::Plural,
            vec![(
                "other",
                branch("g", BranchKind::Select, vec![("other", literal("#"))])
            )]
        )
    );
}

#[test]
fn test_duplicate_key_replaces_in_place() {
    let Node::Branch(branch) = parse_str("{g, select, a{1} other{x} a{2}}").unwrap() else {
        panic!("expected branch");
    };
    assert_eq!(branch.keys().collect::<Vec<_>>(), vec!["a", "other"]);
    assert_eq!(branch.option("a"), Some(&literal("2")));
}

#[test]
fn test_branch_select_falls_back_to_other() {
    let Node::Branch(branch) = parse_str("{g, select, male{sir} other{friend}}").unwrap() else {
        panic!("expected branch");
    };
    assert_eq!(branch.select("male"), Some(&literal("sir")));
    assert_eq!(branch.select("female"), Some(&literal("friend")));
}

#[test]
fn test_branch_without_other() {
    let Node::Branch(branch) = parse_str("{g, select, male{sir}}").unwrap() else {
        panic!("expected branch");
    };
    assert_eq!(branch.select("female"), None);
}

#[test]
fn test_variables() {
    let node = parse_str("{a} {b, select, x{{c}} other{{a}}} {d, plural, other{#}}").unwrap();
    assert_eq!(node.variables().into_iter().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
}

#[test]
fn test_literal_text() {
    assert_eq!(parse_str("plain").unwrap().literal_text(), Some("plain".into()));
    assert_eq!(parse_str("Hi {name}").unwrap().literal_text(), None);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_unclosed_brace() {
    let error = parse_str("Hello {name").unwrap_err();
    assert_eq!(error.kind, ParseErrorKind::UnclosedBrace);
    assert_eq!(error.offset, 11);
    assert_eq!(error.token_index, 4);
}

#[test]
fn test_unmatched_closing_brace() {
    let error = parse_str("Hello name}").unwrap_err();
    assert_eq!(error.kind, ParseErrorKind::UnmatchedClosingBrace);
    assert_eq!(error.offset, 10);
}

#[test]
fn test_unclosed_branch() {
    assert_eq!(
        error_kind("{n, plural, other{x}"),
        ParseErrorKind::UnclosedBrace
    );
    assert_eq!(
        error_kind("{n, plural, other{x"),
        ParseErrorKind::UnclosedBrace
    );
}

#[test]
fn test_unclosed_escape() {
    assert_eq!(error_kind("'unclosed"), ParseErrorKind::UnclosedEscape);
    assert_eq!(error_kind("don't"), ParseErrorKind::UnclosedEscape);
}

#[test]
fn test_empty_placeholder() {
    assert_eq!(
        error_kind("{}"),
        ParseErrorKind::UnexpectedToken {
            token: Token::RightBrace,
            state: ParserState::VariableName,
        }
    );
}

#[test]
fn test_missing_operator_comma() {
    assert_eq!(
        error_kind("{n plural}"),
        ParseErrorKind::UnexpectedToken {
            token: Token::Text("plural".into()),
            state: ParserState::AfterVariableName,
        }
    );
}

#[test]
fn test_option_without_content() {
    assert_eq!(
        error_kind("{n, select, other}"),
        ParseErrorKind::UnexpectedToken {
            token: Token::RightBrace,
            state: ParserState::AfterOptionKey,
        }
    );
}

#[test]
fn test_invalid_operator_suggestion() {
    let error = parse_str("{count, plurl, other{x}}").unwrap_err();
    assert_eq!(
        error.kind,
        ParseErrorKind::InvalidOperator {
            operator: "plurl".into(),
            suggestion: Some("plural".into()),
        }
    );
    assert_eq!(error.offset, 8);
    assert_eq!(
        error.to_string(),
        "invalid operator 'plurl', expected 'plural' or 'select' (did you mean 'plural'?) at character 8"
    );
}

#[test]
fn test_invalid_operator_without_suggestion() {
    assert_eq!(
        error_kind("{n, number}"),
        ParseErrorKind::InvalidOperator {
            operator: "number".into(),
            suggestion: None,
        }
    );
}

#[test]
fn test_empty_branch() {
    assert_eq!(
        error_kind("{n, select,}"),
        ParseErrorKind::EmptyBranch { name: "n".into() }
    );
}

#[test]
fn test_nesting_limit() {
    let options = ParseOptions::builder().max_depth(2).build();
    let error = parse_with(&lex("{a, select, other{{b}}}"), &options).unwrap_err();
    assert_eq!(error.kind, ParseErrorKind::NestingTooDeep { max_depth: 2 });
    assert!(parse_with(&lex("{a, select, other{b}}"), &options).is_ok());
}

#[test]
fn test_default_depth_accepts_reasonable_nesting() {
    let template = "{a, select, other{{b, select, other{{c, plural, other{#}}}}}}";
    assert!(parse_str(template).is_ok());
}

#[test]
fn test_error_line_column() {
    let source = "first line\nsecond }";
    let error = parse_str(source).unwrap_err();
    assert_eq!(error.line_column(source), (2, 8));
    assert_eq!(error.byte_offset(source), 18);
}

#[test]
fn test_byte_offset_with_multibyte_text() {
    let source = "héllo }";
    let error = parse_str(source).unwrap_err();
    assert_eq!(error.offset, 6);
    assert_eq!(error.byte_offset(source), 7);
}
