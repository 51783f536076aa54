//! Token source trait and the default `&str` lexer.

mod query_token_source;
mod str_query_token_source;

pub use query_token_source::QueryTokenSource;
pub use query_token_source::collect_tokens;
pub use str_query_token_source::StrQueryTokenSource;

#[cfg(test)]
mod tests;
