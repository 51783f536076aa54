//! Tests for `ParseError` formatting.

use crate::ByteSpan;
use crate::ParseError;
use crate::ParseErrorKind;
use crate::tests::utils::parse_query_err;
use crate::token::LexErrorKind;

/// Verifies 1-based line and column computation.
#[test]
fn line_col_is_one_based() {
    let source = "query {\n  user(id 1)\n}";
    let err = parse_query_err(source);
    assert_eq!(err.line_col(source), Some((2, 11)));
}

/// Verifies that columns count chars rather than bytes.
#[test]
fn line_col_counts_chars() {
    let source = "{ a(s: \"héllo\", 1) }";
    let err = parse_query_err(source);
    assert_eq!(err.span().map(|span| span.text(source)), Some("1"));
    assert_eq!(err.line_col(source), Some((1, 17)));
}

/// Verifies the single-line format.
#[test]
fn format_oneline() {
    let source = "{ user(id 1) }";
    let err = parse_query_err(source);
    assert_eq!(
        err.format_oneline(source),
        "<input>:1:11: error: expected `:` after argument name, found `1`",
    );

    let blank = ParseError::new("blank query", None, ParseErrorKind::BlankInput);
    assert_eq!(blank.format_oneline(""), "<input>: error: blank query");
}

/// Verifies the detailed format with a caret under the offending token.
#[test]
fn format_detailed() {
    let source = "{ user(id 1) }";
    let err = parse_query_err(source);
    let expected = "\
error: expected `:` after argument name, found `1`
  --> <input>:1:11
   |
 1 | { user(id 1) }
   |           ^
";
    assert_eq!(err.format_detailed(source), expected);
}

/// Verifies that both formats can name the input, e.g. by file path.
#[test]
fn format_with_origin() {
    let source = "{ user(id 1) }";
    let err = parse_query_err(source);
    assert_eq!(
        err.format_oneline_with_origin("queries/user.graphql", source),
        "queries/user.graphql:1:11: error: expected `:` after argument name, found `1`",
    );
    let detailed = err.format_detailed_with_origin("queries/user.graphql", source);
    assert!(detailed.contains("  --> queries/user.graphql:1:11\n"), "{detailed}");
}

/// Verifies that the caret spans the whole offending token.
#[test]
fn format_detailed_underlines_token() {
    let source = "{ a b c(x: 1, y: 2) }";
    let err = crate::QueryParser::new(source)
        .with_options(crate::ParserOptions::default().max_arguments(1))
        .parse_query()
        .unwrap_err();
    let detailed = err.format_detailed(source);
    assert!(detailed.ends_with("   |               ^\n"), "{detailed}");
}

/// Verifies that Display shows the message and the kind's own message is
/// the short form.
#[test]
fn display_and_kind_messages() {
    let err = ParseError::new(
        "unterminated string literal: `\"abc`",
        Some(ByteSpan::new(0, 4)),
        ParseErrorKind::LexerError(LexErrorKind::UnterminatedString),
    );
    assert_eq!(err.to_string(), "unterminated string literal: `\"abc`");
    assert_eq!(err.kind().to_string(), "lexer error: unterminated string literal");
    assert!(!err.kind().is_resource_limit());
}

/// Verifies the message built for lexer errors.
#[test]
fn lexer_error_message() {
    let source = "{ a(n: 01) }";
    let err = parse_query_err(source);
    assert_eq!(err.kind(), &ParseErrorKind::LexerError(LexErrorKind::InvalidNumber));
    assert_eq!(err.message(), "invalid number: `01`");
}
