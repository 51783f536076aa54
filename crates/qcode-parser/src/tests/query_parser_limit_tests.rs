//! Tests for the field, argument and nesting depth limits.

use crate::OperationPool;
use crate::ParseErrorKind;
use crate::ParserOptions;
use crate::QueryParser;
use crate::tests::utils::parse_query_err;
use crate::tests::utils::parse_query_err_with;
use crate::tests::utils::parse_query_ok;

fn fields_query(count: usize) -> String {
    let fields: Vec<String> = (0..count).map(|idx| format!("f{idx}")).collect();
    format!("{{ {} }}", fields.join(" "))
}

fn arguments_query(count: usize) -> String {
    let arguments: Vec<String> = (0..count).map(|idx| format!("a{idx}: {idx}")).collect();
    format!("{{ f({}) }}", arguments.join(", "))
}

/// `{ f { f { f } } }` for depth 3: `depth` selection sets, each holding
/// one field.
fn nested_selection_query(depth: usize) -> String {
    format!("{{ {}f{} }}", "f { ".repeat(depth - 1), " }".repeat(depth - 1))
}

// =============================================================================
// Field limit
// =============================================================================

/// Verifies that exactly 100 fields parse.
#[test]
fn hundred_fields_parse() {
    let pool = OperationPool::new();
    let source = fields_query(100);
    let op = parse_query_ok(&source, &pool);
    assert_eq!(op.fields.len(), 100);
}

/// Verifies that the 101st field fails and the error points at it.
#[test]
fn hundred_and_one_fields_fail() {
    let source = fields_query(101);
    let err = parse_query_err(&source);
    assert_eq!(err.kind(), &ParseErrorKind::FieldLimitExceeded { limit: 100 });
    assert_eq!(err.message(), "field limit reached (100)");
    assert_eq!(err.span().map(|span| span.text(&source)), Some("f100"));
    assert!(err.kind().is_resource_limit());
}

/// Verifies that nested fields count toward the same limit.
#[test]
fn nested_fields_count_toward_limit() {
    let options = ParserOptions::default().max_fields(3);
    let pool = OperationPool::new();
    let parsed = QueryParser::new("{ a { b c } }")
        .with_options(options)
        .with_pool(&pool)
        .parse_query();
    assert!(parsed.is_ok());
    drop(parsed);

    let err = parse_query_err_with("{ a { b c } d }", options);
    assert_eq!(err.kind(), &ParseErrorKind::FieldLimitExceeded { limit: 3 });
}

// =============================================================================
// Argument limit
// =============================================================================

/// Verifies that exactly 20 arguments parse.
#[test]
fn twenty_arguments_parse() {
    let pool = OperationPool::new();
    let source = arguments_query(20);
    let op = parse_query_ok(&source, &pool);
    assert_eq!(op.fields[0].arguments.len(), 20);
}

/// Verifies that the 21st argument fails.
#[test]
fn twenty_one_arguments_fail() {
    let source = arguments_query(21);
    let err = parse_query_err(&source);
    assert_eq!(err.kind(), &ParseErrorKind::ArgumentLimitExceeded { limit: 20 });
    assert_eq!(err.message(), "too many arguments (limit 20)");
    assert_eq!(err.span().map(|span| span.text(&source)), Some("a20"));
}

/// Verifies that the limit is per argument list, not per operation.
#[test]
fn argument_limit_is_per_list() {
    let pool = OperationPool::new();
    let one_list = arguments_query(20);
    let inner = &one_list[2..one_list.len() - 2];
    let source = format!("{{ {inner} g{} }}", &inner[1..]);
    let op = parse_query_ok(&source, &pool);
    assert_eq!(op.argument_count(), 40);
}

/// Verifies that operation arguments are limited too.
#[test]
fn operation_argument_limit() {
    let options = ParserOptions::default().max_arguments(1);
    let err = parse_query_err_with("query Q(a: 1, b: 2) { f }", options);
    assert_eq!(err.kind(), &ParseErrorKind::ArgumentLimitExceeded { limit: 1 });
}

// =============================================================================
// Depth limit
// =============================================================================

/// Verifies that selection sets nest up to max_depth.
#[test]
fn selection_depth_at_limit() {
    let pool = OperationPool::new();
    let source = nested_selection_query(64);
    let op = parse_query_ok(&source, &pool);
    assert_eq!(op.fields.len(), 64);
    assert_eq!(op.fields[63].parent_id, Some(62));
}

/// Verifies that one more level of selection set fails.
#[test]
fn selection_depth_over_limit() {
    let source = nested_selection_query(65);
    let err = parse_query_err(&source);
    assert_eq!(err.kind(), &ParseErrorKind::NestingDepthExceeded { limit: 64 });
    assert_eq!(err.message(), "maximum nesting depth exceeded (64)");
    assert_eq!(err.span().map(|span| span.text(&source)), Some("{"));
}

/// Verifies that lists and objects share the depth counter with
/// selection sets.
#[test]
fn values_share_depth_counter() {
    let options = ParserOptions::default().max_depth(3);
    let pool = OperationPool::new();
    // selection set (1) > list (2) > object (3)
    let parsed = QueryParser::new("{ f(a: [{ k: 1 }]) }")
        .with_options(options)
        .with_pool(&pool)
        .parse_query();
    assert!(parsed.is_ok());
    drop(parsed);

    let err = parse_query_err_with("{ f(a: [{ k: [1] }]) }", options);
    assert_eq!(err.kind(), &ParseErrorKind::NestingDepthExceeded { limit: 3 });
}

/// Verifies deep value nesting through the standalone value entry point.
#[test]
fn value_depth_limit() {
    let at_limit = format!("{}1{}", "[".repeat(64), "]".repeat(64));
    assert_eq!(crate::parse_value(&at_limit).unwrap().len(), 65);

    let over_limit = format!("{}1{}", "[".repeat(65), "]".repeat(65));
    let err = crate::parse_value(&over_limit).unwrap_err();
    assert_eq!(err.kind(), &ParseErrorKind::NestingDepthExceeded { limit: 64 });
}

/// Verifies that adversarially deep input fails cleanly instead of
/// exhausting the stack.
#[test]
fn very_deep_input_fails_cleanly() {
    let source = "[".repeat(100_000);
    let err = crate::parse_value(&source).unwrap_err();
    assert!(err.kind().is_resource_limit());
}
