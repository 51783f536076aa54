/// Why the lexer rejected a piece of input.
///
/// Carried by [`QueryTokenKind::Error`](crate::token::QueryTokenKind::Error)
/// so that error tokens stay `Copy`; the offending text is recovered from
/// the token's span when the error is reported.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, thiserror::Error)]
pub enum LexErrorKind {
    /// A character that cannot start any token.
    #[error("unexpected character")]
    UnexpectedCharacter,

    /// One or two dots that do not form a `...` spread.
    #[error("unexpected `.` (use `...` for spread operator)")]
    UnexpectedDot,

    /// A string literal with no closing quote on the same line.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A `"""` block string. Only single-line strings are supported.
    #[error("block strings are not supported")]
    UnsupportedBlockString,

    /// A malformed number such as `01`, `1e` or a lone `-`.
    #[error("invalid number")]
    InvalidNumber,

    /// A `$` that is not followed by a name.
    #[error("expected a variable name after `$`")]
    MissingVariableName,

    /// An input too long for its byte offsets to fit in a
    /// [`ByteSpan`](crate::ByteSpan).
    #[error("input exceeds {} bytes", u32::MAX)]
    InputTooLarge,
}
