use crate::ast::OperationKind;
use crate::token::LexErrorKind;

/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// The human-readable description, including the offending token's text,
/// lives in `ParseError.message`.
///
/// The `#[error(...)]` messages are concise/programmatic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// The input was empty. Reported before tokenization.
    #[error("blank input")]
    BlankInput,

    /// The input bytes were not valid UTF-8.
    #[error("input is not valid UTF-8")]
    InvalidUtf8,

    /// The input is longer than a [`ByteSpan`](crate::ByteSpan) can address.
    #[error("input exceeds {limit} bytes")]
    InputTooLarge {
        limit: usize,
    },

    /// The lexer rejected part of the input.
    ///
    /// # Example
    /// ```text
    /// { user(name: "unterminated) }
    ///              ^^^^^^^^^^^^^^^^ unterminated string literal
    /// ```
    #[error("lexer error: {0}")]
    LexerError(LexErrorKind),

    /// Expected specific token(s) but found something else.
    ///
    /// # Example
    /// ```text
    /// { user(id 1) }
    ///           ^ expected `:`, found `1`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        /// What was expected (e.g. `[":"]` or `["value"]`).
        expected: Vec<String>,
        /// Description of what was found.
        found: String,
    },

    /// The document ended before the grammar was satisfied.
    ///
    /// # Example
    /// ```text
    /// { user(id:
    ///           ^ expected value, found end of input
    /// ```
    #[error("unexpected end of input")]
    UnexpectedEof {
        /// What was expected when the end of input was reached.
        expected: Vec<String>,
    },

    /// A list literal with no elements (`[]`).
    #[error("list cannot be empty")]
    EmptyList,

    /// A list literal whose elements are of different kinds. Only reported
    /// when [`ParserOptions::require_homogeneous_lists`](crate::ParserOptions::require_homogeneous_lists)
    /// is set.
    #[error("all values in a list must be of the same kind")]
    HeterogeneousList,

    /// The operation kind is recognized but not supported by the operation
    /// parser.
    #[error("unsupported operation: `{kind}`")]
    UnsupportedOperation {
        kind: OperationKind,
    },

    /// More fields than [`ParserOptions::max_fields`](crate::ParserOptions::max_fields).
    #[error("field limit reached ({limit})")]
    FieldLimitExceeded {
        limit: usize,
    },

    /// More arguments in one list than
    /// [`ParserOptions::max_arguments`](crate::ParserOptions::max_arguments).
    #[error("too many arguments (limit {limit})")]
    ArgumentLimitExceeded {
        limit: usize,
    },

    /// Selection sets, lists and objects nested deeper than
    /// [`ParserOptions::max_depth`](crate::ParserOptions::max_depth).
    #[error("maximum nesting depth exceeded ({limit})")]
    NestingDepthExceeded {
        limit: usize,
    },
}

impl ParseErrorKind {
    /// Returns `true` for the errors that guard against oversized input
    /// (input size, field, argument and depth limits).
    pub fn is_resource_limit(&self) -> bool {
        matches!(
            self,
            ParseErrorKind::InputTooLarge { .. }
                | ParseErrorKind::FieldLimitExceeded { .. }
                | ParseErrorKind::ArgumentLimitExceeded { .. }
                | ParseErrorKind::NestingDepthExceeded { .. }
        )
    }
}
