/// Compact byte-offset span. 8 bytes per node.
///
/// Represents a half-open interval `[start, end)` of byte offsets into the
/// source text a document was parsed from. Both offsets are 0-based.
///
/// AST nodes store spans rather than borrowed slices so that an
/// [`Operation`](crate::ast::Operation) holds no reference to its input and
/// can be recycled through an [`OperationPool`](crate::OperationPool).
/// `u32` offsets support documents up to 4 GiB.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[repr(C)]
pub struct ByteSpan {
    /// Byte offset of the first byte (inclusive).
    pub start: u32,
    /// Byte offset one past the last byte (exclusive).
    pub end: u32,
}

impl ByteSpan {
    /// Creates a new `ByteSpan` from start (inclusive) and end (exclusive)
    /// byte offsets.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Creates an empty span positioned at `offset`.
    pub fn empty_at(offset: u32) -> Self {
        Self { start: offset, end: offset }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if this span has zero length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the text this span covers within `source`.
    ///
    /// Spans produced by the lexer always fall on `char` boundaries of the
    /// text they were lexed from. Passing a different source (or a span
    /// that does not fit) yields an empty string rather than panicking.
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        source
            .get(self.start as usize..self.end as usize)
            .unwrap_or("")
    }
}
