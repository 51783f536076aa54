//! Tests for `StrQueryTokenSource`.

use crate::ByteSpan;
use crate::token::LexErrorKind;
use crate::token::QueryToken;
use crate::token::QueryTokenKind;
use crate::token_source::StrQueryTokenSource;

/// Helper to collect all token kinds from a source string.
fn token_kinds(source: &str) -> Vec<QueryTokenKind> {
    StrQueryTokenSource::new(source).map(|t| t.kind).collect()
}

/// Helper to collect every token's text.
fn token_texts(source: &str) -> Vec<&str> {
    StrQueryTokenSource::new(source)
        .map(|t| t.text(source))
        .collect()
}

fn single_token(source: &str) -> QueryToken {
    let tokens: Vec<_> = StrQueryTokenSource::new(source).collect();
    assert_eq!(tokens.len(), 2, "expected one token plus Eof for {source:?}");
    tokens[0]
}

// =============================================================================
// Punctuators and ignored tokens
// =============================================================================

/// Verifies that every punctuator is lexed.
#[test]
fn punctuators() {
    assert_eq!(
        token_kinds("{ } ( ) [ ] : = @ ! ..."),
        vec![
            QueryTokenKind::CurlyBraceOpen,
            QueryTokenKind::CurlyBraceClose,
            QueryTokenKind::ParenOpen,
            QueryTokenKind::ParenClose,
            QueryTokenKind::SquareBracketOpen,
            QueryTokenKind::SquareBracketClose,
            QueryTokenKind::Colon,
            QueryTokenKind::Equals,
            QueryTokenKind::At,
            QueryTokenKind::Bang,
            QueryTokenKind::Ellipsis,
            QueryTokenKind::Eof,
        ],
    );
}

/// Verifies that whitespace, commas, comments and BOMs are skipped.
#[test]
fn ignored_tokens() {
    let source = "\u{FEFF}# comment, with { braces }\r\n ,a,,\tb # trailing";
    assert_eq!(token_texts(source), vec!["a", "b", ""]);
}

/// Verifies that the stream ends with exactly one Eof at the end of input.
#[test]
fn single_eof_at_end() {
    let mut lexer = StrQueryTokenSource::new("a  ");
    assert_eq!(lexer.next().map(|t| t.kind), Some(QueryTokenKind::Name));
    assert_eq!(lexer.next(), Some(QueryToken::eof_at(3)));
    assert_eq!(lexer.next(), None);
    assert_eq!(lexer.next(), None);
}

/// Verifies that lone dots are errors.
#[test]
fn lone_dots_are_errors() {
    assert_eq!(
        token_kinds(". .."),
        vec![
            QueryTokenKind::Error(LexErrorKind::UnexpectedDot),
            QueryTokenKind::Error(LexErrorKind::UnexpectedDot),
            QueryTokenKind::Eof,
        ],
    );
}

/// Verifies that unknown characters (including multi-byte ones) become a
/// single error token covering the whole character.
#[test]
fn unexpected_characters() {
    let source = "a ü b";
    let tokens: Vec<_> = StrQueryTokenSource::new(source).collect();
    assert_eq!(tokens[1].kind, QueryTokenKind::Error(LexErrorKind::UnexpectedCharacter));
    assert_eq!(tokens[1].text(source), "ü");
    assert_eq!(tokens[2].text(source), "b");
}

// =============================================================================
// Names and keywords
// =============================================================================

/// Verifies keyword and boolean recognition; everything else is a Name.
#[test]
fn names_and_keywords() {
    assert_eq!(
        token_kinds("query mutation subscription true false null Query _x9"),
        vec![
            QueryTokenKind::Query,
            QueryTokenKind::Mutation,
            QueryTokenKind::Subscription,
            QueryTokenKind::BooleanValue,
            QueryTokenKind::BooleanValue,
            QueryTokenKind::Name,
            QueryTokenKind::Name,
            QueryTokenKind::Name,
            QueryTokenKind::Eof,
        ],
    );
}

/// Verifies that a variable's span excludes the `$`.
#[test]
fn variables() {
    let token = single_token("$userId");
    assert_eq!(token.kind, QueryTokenKind::Variable);
    assert_eq!(token.span, ByteSpan::new(1, 7));

    assert_eq!(
        token_kinds("$ 1"),
        vec![
            QueryTokenKind::Error(LexErrorKind::MissingVariableName),
            QueryTokenKind::IntValue,
            QueryTokenKind::Eof,
        ],
    );
}

// =============================================================================
// Numbers
// =============================================================================

/// Verifies valid Int and Float literals.
#[test]
fn valid_numbers() {
    for source in ["0", "7", "-0", "-123", "9007199254740993"] {
        assert_eq!(single_token(source).kind, QueryTokenKind::IntValue, "{source}");
    }
    for source in ["0.5", "-1.25", "1e10", "1E-3", "6.02e+23"] {
        assert_eq!(single_token(source).kind, QueryTokenKind::FloatValue, "{source}");
    }
}

/// Verifies that malformed numbers are single error tokens.
#[test]
fn invalid_numbers() {
    for source in ["01", "-", "1e", "1.5.2", "123abc", "1.", "-x"] {
        let token = single_token(source);
        assert_eq!(
            token.kind,
            QueryTokenKind::Error(LexErrorKind::InvalidNumber),
            "{source}",
        );
        assert_eq!(token.text(source), source);
    }
}

/// Verifies that numbers are delimited by punctuators.
#[test]
fn numbers_between_punctuators() {
    assert_eq!(token_texts("[1,-2]"), vec!["[", "1", "-2", "]", ""]);
}

// =============================================================================
// Strings
// =============================================================================

/// Verifies that string spans cover the content without the quotes.
#[test]
fn string_span_is_content() {
    let source = "\"hello world\"";
    let token = single_token(source);
    assert_eq!(token.kind, QueryTokenKind::StringValue);
    assert_eq!(token.span, ByteSpan::new(1, 12));
    assert_eq!(token.text(source), "hello world");
}

/// Verifies that escaped quotes do not end the string and escapes stay
/// raw.
#[test]
fn string_escapes_stay_raw() {
    let source = r#""say \"hi\" \\ é""#;
    let token = single_token(source);
    assert_eq!(token.text(source), r#"say \"hi\" \\ é"#);
}

/// Verifies that the empty string lexes.
#[test]
fn empty_string() {
    let token = single_token("\"\"");
    assert_eq!(token.kind, QueryTokenKind::StringValue);
    assert!(token.span.is_empty());
}

/// Verifies unterminated strings, including ones cut by a newline.
#[test]
fn unterminated_strings() {
    for source in ["\"open", "\"line\nbreak\"", "\"cr\rbreak\"", "\"escape at end\\"] {
        let token = StrQueryTokenSource::new(source).next().unwrap();
        assert_eq!(
            token.kind,
            QueryTokenKind::Error(LexErrorKind::UnterminatedString),
            "{source:?}",
        );
        assert_eq!(token.span.start, 0);
    }
}

/// Verifies that block strings are rejected.
#[test]
fn block_strings_unsupported() {
    let token = StrQueryTokenSource::new("\"\"\"doc\"\"\"").next().unwrap();
    assert_eq!(token.kind, QueryTokenKind::Error(LexErrorKind::UnsupportedBlockString));
}

/// Verifies multi-byte content inside strings.
#[test]
fn unicode_string_content() {
    let source = "\"héllo 🌍\"";
    assert_eq!(single_token(source).text(source), "héllo 🌍");
}

/// Verifies that input longer than the span range is rejected before any
/// token is produced, and that the stream still ends with one `Eof`.
#[test]
fn oversized_input_rejected() {
    let tokens: Vec<_> = StrQueryTokenSource::new("{ a }").with_max_len(4).collect();
    assert_eq!(
        tokens,
        vec![
            QueryToken::new(
                QueryTokenKind::Error(LexErrorKind::InputTooLarge),
                ByteSpan::empty_at(0),
            ),
            QueryToken::eof_at(0),
        ],
    );

    let kinds: Vec<_> = StrQueryTokenSource::new("{ a }")
        .with_max_len(5)
        .map(|token| token.kind)
        .collect();
    assert_eq!(kinds.len(), 4);
    assert_eq!(kinds.last(), Some(&QueryTokenKind::Eof));
}
