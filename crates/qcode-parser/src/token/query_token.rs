use crate::ByteSpan;
use crate::token::QueryTokenKind;

/// A query token: a kind tag plus the byte range it covers in the source
/// text.
///
/// Tokens are `Copy`; all text is extracted lazily through [`ByteSpan`] so
/// lexing never allocates per token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QueryToken {
    /// The kind of token (including `Error` for lexer errors).
    pub kind: QueryTokenKind,

    /// The source byte range of this token.
    pub span: ByteSpan,
}

impl QueryToken {
    pub fn new(kind: QueryTokenKind, span: ByteSpan) -> Self {
        Self { kind, span }
    }

    /// Creates an `Eof` token with an empty span at `offset`.
    pub fn eof_at(offset: u32) -> Self {
        Self::new(QueryTokenKind::Eof, ByteSpan::empty_at(offset))
    }

    /// Returns the source text of this token.
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        self.span.text(source)
    }

    /// Describes this token for an error message: its source text for
    /// names, keywords and literals, or its kind for everything else.
    pub fn display(&self, source: &str) -> String {
        match self.kind {
            QueryTokenKind::Eof => "end of input".to_string(),
            QueryTokenKind::StringValue => format!("\"{}\"", self.text(source)),
            QueryTokenKind::Variable => format!("${}", self.text(source)),
            _ if self.span.is_empty() => self.kind.describe().to_string(),
            _ => self.text(source).to_string(),
        }
    }
}
