//! Various test utils.

use crate::ByteSpan;
use crate::OperationPool;
use crate::ParseError;
use crate::ParserOptions;
use crate::PooledOperation;
use crate::QueryParser;
use crate::ast::ValueNodes;
use crate::token::QueryToken;
use crate::token::QueryTokenKind;

/// Creates a mock token covering `[start, end)`.
pub fn mock_token(kind: QueryTokenKind, start: u32, end: u32) -> QueryToken {
    QueryToken::new(kind, ByteSpan::new(start, end))
}

/// Creates a mock Eof token at `offset`.
pub fn mock_eof_token(offset: u32) -> QueryToken {
    QueryToken::eof_at(offset)
}

/// A mock token source that produces tokens from a Vec.
pub struct MockTokenSource {
    tokens: std::vec::IntoIter<QueryToken>,
}

impl MockTokenSource {
    pub fn new(tokens: Vec<QueryToken>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = QueryToken;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

/// Parses a query (keyword optional) into a private pool, panicking on
/// error.
pub(super) fn parse_query_ok<'src, 'pool>(
    source: &'src str,
    pool: &'pool OperationPool,
) -> PooledOperation<'src, 'pool> {
    match QueryParser::new(source).with_pool(pool).parse_query() {
        Ok(op) => op,
        Err(err) => panic!("expected `{source}` to parse:\n{}", err.format_detailed(source)),
    }
}

/// Parses a query (keyword optional) and returns its error, panicking on
/// success.
pub(super) fn parse_query_err(source: &str) -> ParseError {
    parse_query_err_with(source, ParserOptions::default())
}

pub(super) fn parse_query_err_with(source: &str, options: ParserOptions) -> ParseError {
    let pool = OperationPool::new();
    match QueryParser::new(source)
        .with_options(options)
        .with_pool(&pool)
        .parse_query()
    {
        Ok(op) => panic!("expected `{source}` to fail, parsed {:?}", *op),
        Err(err) => err,
    }
}

/// Parses the first argument value of the first field of `{ f(a: <value>) }`.
pub(super) fn parse_argument_value(value: &str) -> (String, ValueNodes) {
    let source = format!("{{ f(a: {value}) }}");
    let pool = OperationPool::new();
    let arena = {
        let op = parse_query_ok(&source, &pool);
        op.fields[0].arguments[0].value.clone()
    };
    (source, arena)
}

/// `(response key, parent response key)` for each field, in id order.
pub(super) fn field_outline(op: &PooledOperation<'_, '_>) -> Vec<(String, Option<String>)> {
    op.fields
        .iter()
        .map(|field| {
            let parent = field
                .parent_id
                .map(|parent_id| op.fields[parent_id].response_key(op.source()).to_string());
            (field.response_key(op.source()).to_string(), parent)
        })
        .collect()
}
