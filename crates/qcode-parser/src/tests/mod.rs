mod byte_span_tests;
mod parse_error_tests;
mod query_parser_limit_tests;
pub(crate) mod utils;
