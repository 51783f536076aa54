use crate::ParseError;
use crate::token::QueryToken;
use crate::token::QueryTokenKind;

/// Marker trait for [`QueryToken`] lexers (iterators that generate
/// [`QueryToken`]s).
///
/// The parser only needs an ordered stream of tokens whose spans index into
/// the source text, terminated by a [`QueryTokenKind::Eof`] token.
/// [`StrQueryTokenSource`](crate::token_source::StrQueryTokenSource) is the
/// default implementation; anything else producing the same vocabulary
/// (e.g. a lexer over pre-tokenized input) can be plugged in through
/// [`QueryParser::from_token_source()`](crate::QueryParser::from_token_source).
///
/// Lexers are responsible for:
/// - Skipping whitespace, commas and comments
/// - Emitting [`QueryTokenKind::Error`] for lexer errors
/// - Emitting a final [`QueryTokenKind::Eof`] token
pub trait QueryTokenSource: Iterator<Item = QueryToken> {}

impl<T> QueryTokenSource for T where T: Iterator<Item = QueryToken> {}

/// Drains `token_source` into `out`, guaranteeing that `out` ends with
/// exactly one `Eof` token.
///
/// Fails on the first [`QueryTokenKind::Error`] token. Tokens following an
/// `Eof` are ignored, and a source that stops without one gets a synthetic
/// `Eof` positioned at the end of the last token.
pub fn collect_tokens<TTokenSource: QueryTokenSource>(
    source: &str,
    token_source: TTokenSource,
    out: &mut Vec<QueryToken>,
) -> Result<(), ParseError> {
    out.clear();
    for token in token_source {
        match token.kind {
            QueryTokenKind::Error(reason) => {
                out.clear();
                return Err(ParseError::from_lexer_error(reason, token, source));
            },
            QueryTokenKind::Eof => {
                out.push(token);
                return Ok(());
            },
            _ => out.push(token),
        }
    }
    let end = out.last().map_or(0, |token| token.span.end);
    out.push(QueryToken::eof_at(end));
    Ok(())
}
