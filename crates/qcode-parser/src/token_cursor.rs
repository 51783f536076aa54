//! Single-pass reader over a terminated token vector.

use crate::token::QueryToken;
use crate::token::QueryTokenKind;

/// Sequential, single-pass reader over a token slice that ends with a
/// [`QueryTokenKind::Eof`] token.
///
/// The cursor never fails: consuming past the end returns a synthetic `Eof`
/// token and sets a sticky [`is_exhausted()`](Self::is_exhausted) flag, so
/// running out of input surfaces as an ordinary grammar mismatch against
/// `Eof`. [`try_next()`](Self::try_next) is the explicit-failure form.
///
/// A cursor is owned by exactly one parse and is not shared.
#[derive(Debug)]
pub struct TokenCursor<'tokens> {
    tokens: &'tokens [QueryToken],

    /// Number of tokens consumed so far. The most recently consumed token
    /// is at `consumed - 1`.
    consumed: usize,

    /// Set once a consumption runs past the terminal token.
    exhausted: bool,
}

impl<'tokens> TokenCursor<'tokens> {
    pub fn new(tokens: &'tokens [QueryToken]) -> Self {
        Self {
            tokens,
            consumed: 0,
            exhausted: false,
        }
    }

    /// Returns `true` if the next unconsumed token's kind is one of `kinds`.
    ///
    /// Always `false` at end of stream; the position never changes.
    pub fn peek(&self, kinds: &[QueryTokenKind]) -> bool {
        // The terminal check must come before indexing.
        if self.at_end() {
            return false;
        }
        self.tokens
            .get(self.consumed)
            .is_some_and(|token| kinds.contains(&token.kind))
    }

    /// Returns the next unconsumed token without consuming it, or the
    /// synthetic terminal token when nothing remains.
    pub fn peek_token(&self) -> QueryToken {
        self.tokens
            .get(self.consumed)
            .copied()
            .unwrap_or_else(|| self.synthetic_eof())
    }

    /// Advances and returns the next token.
    ///
    /// Past the end of the slice this sets the sticky exhausted flag and
    /// returns a synthetic `Eof` token.
    pub fn next(&mut self) -> QueryToken {
        match self.try_next() {
            Some(token) => token,
            None => {
                self.exhausted = true;
                self.synthetic_eof()
            },
        }
    }

    /// Advances and returns the next token, or `None` if every token
    /// (including the terminal `Eof`) has already been consumed.
    pub fn try_next(&mut self) -> Option<QueryToken> {
        let token = self.tokens.get(self.consumed).copied()?;
        self.consumed += 1;
        Some(token)
    }

    /// Consumes a token whose presence was already confirmed via
    /// [`peek()`](Self::peek).
    pub fn skip(&mut self) {
        self.next();
    }

    /// The most recently consumed token, or `None` before the first
    /// consumption.
    pub fn current(&self) -> Option<&QueryToken> {
        self.consumed
            .checked_sub(1)
            .and_then(|idx| self.tokens.get(idx))
    }

    /// Returns `true` if the next unconsumed token is the terminal marker
    /// (or nothing is left at all).
    pub fn at_end(&self) -> bool {
        self.tokens
            .get(self.consumed)
            .is_none_or(|token| token.kind == QueryTokenKind::Eof)
    }

    /// Returns `true` once a consumption has run past the end of the
    /// token slice.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Number of tokens consumed so far.
    pub fn position(&self) -> usize {
        self.consumed
    }

    fn synthetic_eof(&self) -> QueryToken {
        let end = self.tokens.last().map_or(0, |token| token.span.end);
        QueryToken::eof_at(end)
    }
}
