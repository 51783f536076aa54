use crate::token::LexErrorKind;

/// The kind of a query token.
///
/// Kinds carry no payload: the text of names and literals is recovered from
/// the owning [`QueryToken`](crate::token::QueryToken)'s span, which keeps
/// tokens `Copy` and the token vector a flat array.
///
/// # Negative Numeric Literals
///
/// Negative numbers like `-123` are lexed as single tokens (e.g. an
/// `IntValue` spanning `-123`), not as separate minus and number tokens.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum QueryTokenKind {
    // =========================================================================
    // Operation keywords
    // =========================================================================
    /// `query`
    Query,
    /// `mutation`
    Mutation,
    /// `subscription`
    Subscription,

    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Names and literals
    // =========================================================================
    /// A name/identifier.
    Name,
    /// An integer literal, including an optional negative sign.
    IntValue,
    /// A float literal, including an optional negative sign.
    FloatValue,
    /// A string literal. The token's span covers the content between the
    /// quotes; escape sequences are left raw.
    StringValue,
    /// `true` or `false`.
    BooleanValue,
    /// A `$name` variable reference. The token's span covers only `name`.
    Variable,

    // =========================================================================
    // Terminal and error
    // =========================================================================
    /// End of input. Every token stream ends with exactly one `Eof`.
    Eof,
    /// A lexer error. The token's span covers the offending text.
    Error(LexErrorKind),
}

impl QueryTokenKind {
    /// Returns `true` for the `query`, `mutation` and `subscription`
    /// keywords.
    pub fn is_operation_keyword(&self) -> bool {
        matches!(
            self,
            QueryTokenKind::Query
                | QueryTokenKind::Mutation
                | QueryTokenKind::Subscription
        )
    }

    /// Returns `true` if this kind can stand in for a name.
    ///
    /// Operation keywords are valid names in field, argument and object
    /// member position (`{ query }` selects a field called `query`).
    pub fn is_name_like(&self) -> bool {
        matches!(self, QueryTokenKind::Name) || self.is_operation_keyword()
    }

    /// Returns the string representation of this token if it is a
    /// punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            QueryTokenKind::At => Some("@"),
            QueryTokenKind::Bang => Some("!"),
            QueryTokenKind::Colon => Some(":"),
            QueryTokenKind::CurlyBraceClose => Some("}"),
            QueryTokenKind::CurlyBraceOpen => Some("{"),
            QueryTokenKind::Ellipsis => Some("..."),
            QueryTokenKind::Equals => Some("="),
            QueryTokenKind::ParenClose => Some(")"),
            QueryTokenKind::ParenOpen => Some("("),
            QueryTokenKind::SquareBracketClose => Some("]"),
            QueryTokenKind::SquareBracketOpen => Some("["),

            QueryTokenKind::Query
            | QueryTokenKind::Mutation
            | QueryTokenKind::Subscription
            | QueryTokenKind::Name
            | QueryTokenKind::IntValue
            | QueryTokenKind::FloatValue
            | QueryTokenKind::StringValue
            | QueryTokenKind::BooleanValue
            | QueryTokenKind::Variable
            | QueryTokenKind::Eof
            | QueryTokenKind::Error(_) => None,
        }
    }

    /// Returns a short human-readable description used in error messages
    /// when the token's own text is not available.
    pub fn describe(&self) -> &'static str {
        match self {
            QueryTokenKind::Query => "query",
            QueryTokenKind::Mutation => "mutation",
            QueryTokenKind::Subscription => "subscription",
            QueryTokenKind::Name => "name",
            QueryTokenKind::IntValue => "integer",
            QueryTokenKind::FloatValue => "float",
            QueryTokenKind::StringValue => "string",
            QueryTokenKind::BooleanValue => "boolean",
            QueryTokenKind::Variable => "variable",
            QueryTokenKind::Eof => "end of input",
            QueryTokenKind::Error(_) => "invalid token",
            punctuator => punctuator.as_punctuator_str().unwrap_or("punctuator"),
        }
    }
}
