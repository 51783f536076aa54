use crate::ByteSpan;
use crate::ParseErrorKind;
use crate::token::LexErrorKind;
use crate::token::QueryToken;
use crate::token::QueryTokenKind;

/// A parse error with location information.
///
/// Parsing stops at the first error, so a failed parse produces exactly one
/// `ParseError` and no AST.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    /// Human-readable primary error message.
    ///
    /// Examples: "expected `:` after argument name, found `1`",
    /// "list cannot be empty"
    message: String,

    /// Where the error was detected, when it can be tied to the input.
    ///
    /// - For "unexpected token" errors: the unexpected token's span
    /// - For end-of-input errors: an empty span at the end of input
    /// - For blank / non-UTF-8 input: `None`
    span: Option<ByteSpan>,

    /// Categorized error kind for programmatic handling.
    kind: ParseErrorKind,
}

impl ParseError {
    /// Creates a new parse error.
    pub fn new(
        message: impl Into<String>,
        span: Option<ByteSpan>,
        kind: ParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
        }
    }

    pub(crate) fn blank_input() -> Self {
        Self::new("blank query", None, ParseErrorKind::BlankInput)
    }

    pub(crate) fn input_too_large(len: usize) -> Self {
        let limit = u32::MAX as usize;
        Self::new(
            format!("input is {len} bytes, more than the {limit} byte limit"),
            None,
            ParseErrorKind::InputTooLarge { limit },
        )
    }

    pub(crate) fn invalid_utf8(err: std::str::Utf8Error) -> Self {
        let offset = err.valid_up_to() as u32;
        Self::new(
            format!("input is not valid UTF-8 ({err})"),
            Some(ByteSpan::empty_at(offset)),
            ParseErrorKind::InvalidUtf8,
        )
    }

    /// Creates a parse error from a lexer error token.
    pub(crate) fn from_lexer_error(
        reason: LexErrorKind,
        token: QueryToken,
        source: &str,
    ) -> Self {
        Self::new(
            format!("{reason}: `{}`", token.text(source)),
            Some(token.span),
            ParseErrorKind::LexerError(reason),
        )
    }

    /// Creates the error for a token that does not fit the grammar.
    ///
    /// `expected` describes what the grammar wanted (e.g. "`:` after
    /// argument name"); `expected_token` is the short form recorded in the
    /// error kind (e.g. ":"). An `Eof` token produces
    /// [`ParseErrorKind::UnexpectedEof`].
    pub(crate) fn unexpected(
        expected: &str,
        expected_token: &str,
        found: QueryToken,
        source: &str,
    ) -> Self {
        if found.kind == QueryTokenKind::Eof {
            return Self::new(
                format!("expected {expected}, found end of input"),
                Some(found.span),
                ParseErrorKind::UnexpectedEof {
                    expected: vec![expected_token.to_string()],
                },
            );
        }
        let found_display = found.display(source);
        Self::new(
            format!("expected {expected}, found `{found_display}`"),
            Some(found.span),
            ParseErrorKind::UnexpectedToken {
                expected: vec![expected_token.to_string()],
                found: found_display,
            },
        )
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the span where the error was detected, if any.
    pub fn span(&self) -> Option<ByteSpan> {
        self.span
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Returns the 1-based `(line, column)` of the error within `source`.
    ///
    /// Columns count `char`s, not bytes.
    pub fn line_col(&self, source: &str) -> Option<(usize, usize)> {
        let span = self.span?;
        let offset = (span.start as usize).min(source.len());
        let before = source.get(..offset)?;
        let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
        let line = before.matches('\n').count() + 1;
        let column = before[line_start..].chars().count() + 1;
        Some((line, column))
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// <input>:1:11: error: expected `:` after argument name, found `1`
    /// ```
    pub fn format_oneline(&self, source: &str) -> String {
        self.format_oneline_with_origin("<input>", source)
    }

    /// Like [`format_oneline()`](Self::format_oneline), naming the input
    /// `origin` (e.g. a file path) instead of `<input>`.
    pub fn format_oneline_with_origin(&self, origin: &str, source: &str) -> String {
        match self.line_col(source) {
            Some((line, column)) => {
                format!("{origin}:{line}:{column}: error: {}", self.message)
            },
            None => format!("{origin}: error: {}", self.message),
        }
    }

    /// Formats this error as a diagnostic with a source snippet.
    ///
    /// Produces output like:
    /// ```text
    /// error: expected `:` after argument name, found `1`
    ///   --> <input>:1:11
    ///    |
    ///  1 | { user(id 1) }
    ///    |           ^
    /// ```
    pub fn format_detailed(&self, source: &str) -> String {
        self.format_detailed_with_origin("<input>", source)
    }

    /// Like [`format_detailed()`](Self::format_detailed), naming the input
    /// `origin` instead of `<input>`.
    pub fn format_detailed_with_origin(&self, origin: &str, source: &str) -> String {
        let mut output = format!("error: {}\n", self.message);

        let (Some(span), Some((line, column))) = (self.span, self.line_col(source)) else {
            return output;
        };
        output.push_str(&format!("  --> {origin}:{line}:{column}\n"));

        let Some(line_content) = source.lines().nth(line - 1) else {
            return output;
        };
        let width = line.to_string().len().max(2);
        let underline_len = span
            .text(source)
            .lines()
            .next()
            .map_or(1, |text| text.chars().count().max(1));

        output.push_str(&format!("{:>width$} |\n", ""));
        output.push_str(&format!("{line:>width$} | {line_content}\n"));
        output.push_str(&format!(
            "{:>width$} | {:>padding$}{}\n",
            "",
            "",
            "^".repeat(underline_len),
            padding = column - 1,
        ));
        output
    }
}
