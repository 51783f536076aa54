//! A low-allocation parser for GraphQL-style query documents.
//!
//! Documents are lexed into a terminated token vector, walked once by a
//! [`TokenCursor`], and built into a flat, index-linked [`ast::Operation`].
//! Operations are recycled through an [`OperationPool`] so that parsing a
//! document per request does not allocate a fresh tree every time.
//!
//! ```
//! let op = qcode_parser::parse_query("{ user(id: 1) { name } }").unwrap();
//! let user = &op.fields[0];
//! assert_eq!(op.text(user.name), "user");
//! assert_eq!(op.text(op.fields[user.children[0]].name), "name");
//! // Dropping `op` hands the Operation back to the global pool.
//! ```

pub mod ast;
mod byte_span;
mod operation_pool;
mod parse_error;
mod parse_error_kind;
mod parser_options;
mod pooled_operation;
mod query_parser;
mod string_parsing_error;
pub mod token;
mod token_cursor;
pub mod token_source;

pub use byte_span::ByteSpan;
pub use operation_pool::OperationPool;
pub use parse_error::ParseError;
pub use parse_error_kind::ParseErrorKind;
pub use parser_options::ParserOptions;
pub use pooled_operation::PooledOperation;
pub use query_parser::QueryParser;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use string_parsing_error::StringParsingError;
pub use token_cursor::TokenCursor;

/// Parses a full operation document (`query`, `mutation` or
/// `subscription` keyword required) using the global pool and default
/// options.
pub fn parse(source: &str) -> Result<PooledOperation<'_, 'static>, ParseError> {
    QueryParser::new(source).parse_operation()
}

/// Like [`parse()`], for raw bytes. Fails with
/// [`ParseErrorKind::InvalidUtf8`] unless `bytes` is valid UTF-8.
pub fn parse_bytes(bytes: &[u8]) -> Result<PooledOperation<'_, 'static>, ParseError> {
    QueryParser::from_bytes(bytes)?.parse_operation()
}

/// Parses a query document whose leading `query` keyword is optional, so
/// both `{ a }` and `query Name { a }` are accepted.
pub fn parse_query(source: &str) -> Result<PooledOperation<'_, 'static>, ParseError> {
    QueryParser::new(source).parse_query()
}

/// Parses an isolated literal value fragment (e.g. a variable default such
/// as `[1, 2]` or `{ id: $id }`) and returns its value-node arena.
pub fn parse_value(source: &str) -> Result<ast::ValueNodes, ParseError> {
    QueryParser::new(source).parse_value()
}

#[cfg(test)]
mod tests;
