//! This module provides the core token types produced by the lexer and
//! consumed by the parser.

mod lex_error_kind;
mod query_token;
mod query_token_kind;

pub use lex_error_kind::LexErrorKind;
pub use query_token::QueryToken;
pub use query_token_kind::QueryTokenKind;

#[cfg(test)]
mod tests;
