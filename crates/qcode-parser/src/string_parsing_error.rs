/// Error returned when unescaping a string literal fails.
///
/// This error can occur during
/// [`ValueNode::string_value()`](crate::ast::ValueNode::string_value) when
/// processing escape sequences.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StringParsingError {
    /// An invalid escape sequence was encountered (e.g. `\q`).
    #[error("Invalid escape sequence: `{0}`")]
    InvalidEscapeSequence(String),

    /// An invalid Unicode escape sequence was encountered (e.g. `\u{ZZZZ}`).
    #[error("Invalid unicode escape: `{0}`")]
    InvalidUnicodeEscape(String),

    /// The node is not a string literal.
    #[error("Value is not a string literal")]
    NotAString,
}
