use crate::ByteSpan;

/// Verifies that ByteSpan::new() stores its offsets and that len() is
/// end - start.
#[test]
fn byte_span_new_stores_offsets() {
    let span = ByteSpan::new(10, 25);
    assert_eq!(span.start, 10);
    assert_eq!(span.end, 25);
    assert_eq!(span.len(), 15);
    assert!(!span.is_empty());
}

/// Verifies that empty_at() produces a zero-width span.
#[test]
fn byte_span_empty_at() {
    let span = ByteSpan::empty_at(42);
    assert_eq!(span, ByteSpan::new(42, 42));
    assert_eq!(span.len(), 0);
    assert!(span.is_empty());
}

/// Verifies that text() slices the source.
#[test]
fn byte_span_text_slices_source() {
    let source = "{ user }";
    assert_eq!(ByteSpan::new(2, 6).text(source), "user");
    assert_eq!(ByteSpan::empty_at(3).text(source), "");
}

/// Verifies that text() returns "" instead of panicking for spans that do
/// not fit the source or split a multi-byte character.
#[test]
fn byte_span_text_out_of_range_is_empty() {
    assert_eq!(ByteSpan::new(4, 40).text("{ a }"), "");
    // "é" is two bytes.
    assert_eq!(ByteSpan::new(0, 1).text("é"), "");
}
