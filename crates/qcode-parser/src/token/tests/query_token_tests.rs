//! Tests for `QueryToken`.

use crate::ByteSpan;
use crate::token::QueryToken;
use crate::token::QueryTokenKind;

/// Verifies text extraction and the error-message display form.
#[test]
fn text_and_display() {
    let source = "{ f(s: \"hi\", v: $id) }";
    let name = QueryToken::new(QueryTokenKind::Name, ByteSpan::new(2, 3));
    let string = QueryToken::new(QueryTokenKind::StringValue, ByteSpan::new(8, 10));
    let variable = QueryToken::new(QueryTokenKind::Variable, ByteSpan::new(17, 19));

    assert_eq!(name.text(source), "f");
    assert_eq!(name.display(source), "f");
    assert_eq!(string.text(source), "hi");
    assert_eq!(string.display(source), "\"hi\"");
    assert_eq!(variable.text(source), "id");
    assert_eq!(variable.display(source), "$id");
}

/// Verifies Eof construction and display.
#[test]
fn eof_token() {
    let eof = QueryToken::eof_at(7);
    assert_eq!(eof.kind, QueryTokenKind::Eof);
    assert_eq!(eof.span, ByteSpan::empty_at(7));
    assert_eq!(eof.display("anything"), "end of input");
}

/// Verifies that tokens with no text fall back to their kind description.
#[test]
fn display_without_text() {
    let token = QueryToken::new(QueryTokenKind::CurlyBraceClose, ByteSpan::empty_at(0));
    assert_eq!(token.display(""), "}");
}
