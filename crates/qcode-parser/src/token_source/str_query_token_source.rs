//! A [`QueryTokenSource`](crate::token_source::QueryTokenSource) that lexes
//! from a `&str` input.
//!
//! Lexing works on bytes: every token boundary the lexer produces falls on a
//! `char` boundary, so spans can always be used to slice the original `str`.
//! Nothing is allocated per token.
//!
//! # Usage
//!
//! ```rust
//! use qcode_parser::token::QueryTokenKind;
//! use qcode_parser::token_source::StrQueryTokenSource;
//!
//! let kinds: Vec<_> = StrQueryTokenSource::new("{ name }")
//!     .map(|token| token.kind)
//!     .collect();
//! assert_eq!(kinds, vec![
//!     QueryTokenKind::CurlyBraceOpen,
//!     QueryTokenKind::Name,
//!     QueryTokenKind::CurlyBraceClose,
//!     QueryTokenKind::Eof,
//! ]);
//! ```

use crate::ByteSpan;
use crate::token::LexErrorKind;
use crate::token::QueryToken;
use crate::token::QueryTokenKind;

/// Longest input whose byte offsets fit in a [`ByteSpan`].
const MAX_SOURCE_LEN: usize = u32::MAX as usize;

/// UTF-8 encoding of U+FEFF, which is ignored anywhere in a document.
const BYTE_ORDER_MARK: &[u8] = "\u{FEFF}".as_bytes();

/// A lexer over a `&str` input producing [`QueryToken`]s.
///
/// The iterator yields exactly one [`QueryTokenKind::Eof`] token (with an
/// empty span at the end of input) and then stops.
///
/// Spans are `u32` offsets, so an input longer than `u32::MAX` bytes is not
/// lexed at all: it yields one [`LexErrorKind::InputTooLarge`] error token
/// followed by an `Eof`, both with empty spans at offset 0.
pub struct StrQueryTokenSource<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    curr_byte_offset: usize,

    /// Inputs longer than this are rejected up front.
    max_len: usize,

    /// Whether the oversized-input error token has been emitted.
    rejected_oversized: bool,

    /// Whether the EOF token has been emitted.
    finished: bool,
}

impl<'src> StrQueryTokenSource<'src> {
    /// Creates a new token source from a string slice.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            max_len: MAX_SOURCE_LEN,
            rejected_oversized: false,
            finished: false,
        }
    }

    /// Lowers the length limit so oversized input can be exercised in tests.
    #[cfg(test)]
    pub(crate) fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn bytes(&self) -> &'src [u8] {
        self.source.as_bytes()
    }

    fn remaining(&self) -> &'src [u8] {
        &self.bytes()[self.curr_byte_offset..]
    }

    fn peek_byte(&self) -> Option<u8> {
        self.peek_byte_nth(0)
    }

    fn peek_byte_nth(&self, n: usize) -> Option<u8> {
        self.bytes().get(self.curr_byte_offset + n).copied()
    }

    /// Advances past one full `char` (1-4 bytes).
    fn consume_char(&mut self) {
        let ch_len = self.source[self.curr_byte_offset..]
            .chars()
            .next()
            .map_or(0, char::len_utf8);
        self.curr_byte_offset += ch_len;
    }

    fn make_span(&self, start: usize) -> ByteSpan {
        ByteSpan::new(start as u32, self.curr_byte_offset as u32)
    }

    fn make_token(&self, kind: QueryTokenKind, start: usize) -> QueryToken {
        QueryToken::new(kind, self.make_span(start))
    }

    fn make_punctuator(&mut self, kind: QueryTokenKind) -> QueryToken {
        let start = self.curr_byte_offset;
        self.curr_byte_offset += 1;
        self.make_token(kind, start)
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> QueryToken {
        self.skip_ignored();

        let start = self.curr_byte_offset;
        match self.peek_byte() {
            None => self.make_token(QueryTokenKind::Eof, start),

            Some(b'!') => self.make_punctuator(QueryTokenKind::Bang),
            Some(b'(') => self.make_punctuator(QueryTokenKind::ParenOpen),
            Some(b')') => self.make_punctuator(QueryTokenKind::ParenClose),
            Some(b':') => self.make_punctuator(QueryTokenKind::Colon),
            Some(b'=') => self.make_punctuator(QueryTokenKind::Equals),
            Some(b'@') => self.make_punctuator(QueryTokenKind::At),
            Some(b'[') => self.make_punctuator(QueryTokenKind::SquareBracketOpen),
            Some(b']') => self.make_punctuator(QueryTokenKind::SquareBracketClose),
            Some(b'{') => self.make_punctuator(QueryTokenKind::CurlyBraceOpen),
            Some(b'}') => self.make_punctuator(QueryTokenKind::CurlyBraceClose),

            Some(b'.') => self.lex_dot_or_ellipsis(start),
            Some(b'"') => self.lex_string(start),
            Some(b'$') => self.lex_variable(start),
            Some(b) if is_name_start(b) => self.lex_name(start),
            Some(b) if b == b'-' || b.is_ascii_digit() => self.lex_number(start),

            Some(_) => {
                self.consume_char();
                self.make_token(
                    QueryTokenKind::Error(LexErrorKind::UnexpectedCharacter),
                    start,
                )
            },
        }
    }

    // =========================================================================
    // Ignored tokens
    // =========================================================================

    /// Skips whitespace, commas, byte order marks and `#` comments.
    fn skip_ignored(&mut self) {
        loop {
            match self.peek_byte() {
                Some(b' ' | b'\t' | b'\n' | b'\r' | b',') => {
                    self.curr_byte_offset += 1;
                },
                Some(b'#') => {
                    let rest = &self.remaining()[1..];
                    let comment_len = memchr::memchr2(b'\n', b'\r', rest)
                        .unwrap_or(rest.len());
                    self.curr_byte_offset += 1 + comment_len;
                },
                Some(0xEF) if self.remaining().starts_with(BYTE_ORDER_MARK) => {
                    self.curr_byte_offset += BYTE_ORDER_MARK.len();
                },
                _ => break,
            }
        }
    }

    // =========================================================================
    // Dot / Ellipsis lexing
    // =========================================================================

    fn lex_dot_or_ellipsis(&mut self, start: usize) -> QueryToken {
        if self.remaining().starts_with(b"...") {
            self.curr_byte_offset += 3;
            return self.make_token(QueryTokenKind::Ellipsis, start);
        }
        while self.peek_byte() == Some(b'.') {
            self.curr_byte_offset += 1;
        }
        self.make_token(QueryTokenKind::Error(LexErrorKind::UnexpectedDot), start)
    }

    // =========================================================================
    // Name lexing
    // =========================================================================

    /// Lexes a name or keyword.
    ///
    /// Names match the pattern: `/[_A-Za-z][_0-9A-Za-z]*/`. The operation
    /// keywords and `true`/`false` get their own token kinds.
    fn lex_name(&mut self, start: usize) -> QueryToken {
        self.curr_byte_offset += 1;
        while self.peek_byte().is_some_and(is_name_continue) {
            self.curr_byte_offset += 1;
        }

        let kind = match &self.source[start..self.curr_byte_offset] {
            "query" => QueryTokenKind::Query,
            "mutation" => QueryTokenKind::Mutation,
            "subscription" => QueryTokenKind::Subscription,
            "true" | "false" => QueryTokenKind::BooleanValue,
            _ => QueryTokenKind::Name,
        };
        self.make_token(kind, start)
    }

    /// Lexes `$name`. The resulting span excludes the `$`.
    fn lex_variable(&mut self, start: usize) -> QueryToken {
        self.curr_byte_offset += 1;
        if !self.peek_byte().is_some_and(is_name_start) {
            return self.make_token(
                QueryTokenKind::Error(LexErrorKind::MissingVariableName),
                start,
            );
        }
        let name_start = self.curr_byte_offset;
        while self.peek_byte().is_some_and(is_name_continue) {
            self.curr_byte_offset += 1;
        }
        self.make_token(QueryTokenKind::Variable, name_start)
    }

    // =========================================================================
    // Number lexing
    // =========================================================================

    /// Lexes an integer or float literal.
    ///
    /// Handles:
    /// - Optional negative sign: `-`
    /// - Integer part: `0` or `[1-9][0-9]*`
    /// - Optional decimal part: `.[0-9]+`
    /// - Optional exponent: `[eE][+-]?[0-9]+`
    fn lex_number(&mut self, start: usize) -> QueryToken {
        let mut is_float = false;

        if self.peek_byte() == Some(b'-') {
            self.curr_byte_offset += 1;
        }

        match self.peek_byte() {
            Some(b'0') => {
                self.curr_byte_offset += 1;
                if self.peek_byte().is_some_and(|b| b.is_ascii_digit()) {
                    return self.lex_number_error(start);
                }
            },
            Some(b) if b.is_ascii_digit() => self.skip_digits(),
            _ => return self.lex_number_error(start),
        }

        if self.peek_byte() == Some(b'.')
            && self.peek_byte_nth(1).is_some_and(|b| b.is_ascii_digit())
        {
            is_float = true;
            self.curr_byte_offset += 1;
            self.skip_digits();
        }

        if let Some(b'e' | b'E') = self.peek_byte() {
            is_float = true;
            self.curr_byte_offset += 1;
            if let Some(b'+' | b'-') = self.peek_byte() {
                self.curr_byte_offset += 1;
            }
            if !self.peek_byte().is_some_and(|b| b.is_ascii_digit()) {
                return self.lex_number_error(start);
            }
            self.skip_digits();
        }

        // `123abc` and `1.5.2` are not two tokens.
        if self
            .peek_byte()
            .is_some_and(|b| b == b'.' || is_name_start(b))
        {
            return self.lex_number_error(start);
        }

        let kind = if is_float {
            QueryTokenKind::FloatValue
        } else {
            QueryTokenKind::IntValue
        };
        self.make_token(kind, start)
    }

    fn skip_digits(&mut self) {
        while self.peek_byte().is_some_and(|b| b.is_ascii_digit()) {
            self.curr_byte_offset += 1;
        }
    }

    /// Consumes the rest of a malformed number so that the error token spans
    /// all of it.
    fn lex_number_error(&mut self, start: usize) -> QueryToken {
        while self.peek_byte().is_some_and(|b| {
            b.is_ascii_alphanumeric() || matches!(b, b'.' | b'+' | b'-' | b'_')
        }) {
            self.curr_byte_offset += 1;
        }
        self.make_token(QueryTokenKind::Error(LexErrorKind::InvalidNumber), start)
    }

    // =========================================================================
    // String lexing
    // =========================================================================

    /// Lexes a single-line string literal.
    ///
    /// The returned token's span covers the content between the quotes.
    /// Escape sequences are skipped over but not validated here; see
    /// [`ValueNode::string_value()`](crate::ast::ValueNode::string_value).
    fn lex_string(&mut self, start: usize) -> QueryToken {
        if self.remaining().starts_with(b"\"\"\"") {
            self.curr_byte_offset += 3;
            return self.make_token(
                QueryTokenKind::Error(LexErrorKind::UnsupportedBlockString),
                start,
            );
        }

        self.curr_byte_offset += 1;
        let content_start = self.curr_byte_offset;
        loop {
            let rest = self.remaining();
            let Some(idx) = memchr::memchr3(b'"', b'\\', b'\n', rest) else {
                self.curr_byte_offset = self.source.len();
                return self.unterminated_string(start);
            };
            if memchr::memchr(b'\r', &rest[..idx]).is_some() {
                self.curr_byte_offset += idx;
                return self.unterminated_string(start);
            }
            self.curr_byte_offset += idx;
            match rest[idx] {
                b'"' => {
                    let content = ByteSpan::new(
                        content_start as u32,
                        self.curr_byte_offset as u32,
                    );
                    self.curr_byte_offset += 1;
                    return QueryToken::new(QueryTokenKind::StringValue, content);
                },
                b'\\' => {
                    self.curr_byte_offset += 1;
                    match self.peek_byte() {
                        None | Some(b'\n' | b'\r') => {
                            return self.unterminated_string(start);
                        },
                        Some(_) => self.consume_char(),
                    }
                },
                _ => return self.unterminated_string(start),
            }
        }
    }

    fn unterminated_string(&self, start: usize) -> QueryToken {
        self.make_token(
            QueryTokenKind::Error(LexErrorKind::UnterminatedString),
            start,
        )
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

impl Iterator for StrQueryTokenSource<'_> {
    type Item = QueryToken;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if self.source.len() > self.max_len {
            if self.rejected_oversized {
                self.finished = true;
                return Some(QueryToken::eof_at(0));
            }
            self.rejected_oversized = true;
            return Some(QueryToken::new(
                QueryTokenKind::Error(LexErrorKind::InputTooLarge),
                ByteSpan::empty_at(0),
            ));
        }

        let token = self.next_token();
        if token.kind == QueryTokenKind::Eof {
            self.finished = true;
        }
        Some(token)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Returns `true` if `b` can start a name.
fn is_name_start(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphabetic()
}

/// Returns `true` if `b` can continue a name.
fn is_name_continue(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}
