//! Recursive-descent parser producing pooled [`Operation`]s.

use crate::ByteSpan;
use crate::OperationPool;
use crate::ParseError;
use crate::ParseErrorKind;
use crate::ParserOptions;
use crate::PooledOperation;
use crate::TokenCursor;
use crate::ast::Argument;
use crate::ast::Field;
use crate::ast::Fields;
use crate::ast::Operation;
use crate::ast::OperationKind;
use crate::ast::ValueKind;
use crate::ast::ValueNode;
use crate::ast::ValueNodes;
use crate::token::QueryToken;
use crate::token::QueryTokenKind;
use crate::token_source::QueryTokenSource;
use crate::token_source::StrQueryTokenSource;
use crate::token_source::collect_tokens;
use smallvec::SmallVec;

/// A parser for one query document (or one literal value fragment).
///
/// A `QueryParser` is consumed by the parse it performs. Results are
/// checked out of an [`OperationPool`] (the global pool unless
/// [`with_pool()`](Self::with_pool) says otherwise) and wrapped in a
/// [`PooledOperation`] that returns them on drop.
///
/// # Grammar
///
/// ```text
/// Document      := OperationKeyword Name? Arguments? SelectionSet?
/// SelectionSet  := "{" Field* "}"        (final "}" optional at end of input)
/// Field         := (Name ":")? Name Arguments? SelectionSet?
/// Arguments     := "(" (Name ":" Value)* ")"
/// Value         := Int | Float | String | Bool | Name | Variable
///                | "[" Value+ "]" | "{" (Name ":" Value)* "}"
/// ```
///
/// Keywords are accepted wherever a field, argument or member name is
/// expected.
///
/// # Example
///
/// ```
/// use qcode_parser::ParserOptions;
/// use qcode_parser::QueryParser;
///
/// let op = QueryParser::new("query Q { a { b } c }")
///     .with_options(ParserOptions::default().max_depth(4))
///     .parse_operation()
///     .unwrap();
/// assert_eq!(op.name_text(), Some("Q"));
/// assert_eq!(op.fields.len(), 3);
/// assert_eq!(op.top_level_fields().count(), 2);
/// ```
pub struct QueryParser<
    'src,
    'pool,
    TTokenSource: QueryTokenSource = StrQueryTokenSource<'src>,
> {
    source: &'src str,
    token_source: TTokenSource,
    options: ParserOptions,
    pool: &'pool OperationPool,
}

impl<'src> QueryParser<'src, 'static> {
    /// Creates a parser over `source` with the default lexer, default
    /// options and the global pool.
    pub fn new(source: &'src str) -> Self {
        Self::from_token_source(source, StrQueryTokenSource::new(source))
    }

    /// Creates a parser over raw bytes, which must be valid UTF-8.
    pub fn from_bytes(bytes: &'src [u8]) -> Result<Self, ParseError> {
        let source = std::str::from_utf8(bytes).map_err(ParseError::invalid_utf8)?;
        Ok(Self::new(source))
    }
}

impl<'src, TTokenSource: QueryTokenSource> QueryParser<'src, 'static, TTokenSource> {
    /// Creates a parser that reads tokens from `token_source`. Token spans
    /// must index into `source`.
    pub fn from_token_source(source: &'src str, token_source: TTokenSource) -> Self {
        Self {
            source,
            token_source,
            options: ParserOptions::default(),
            pool: OperationPool::global(),
        }
    }
}

impl<'src, 'pool, TTokenSource: QueryTokenSource> QueryParser<'src, 'pool, TTokenSource> {
    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    /// Checks operations out of `pool` instead of the global pool.
    pub fn with_pool<'p>(self, pool: &'p OperationPool) -> QueryParser<'src, 'p, TTokenSource> {
        QueryParser {
            source: self.source,
            token_source: self.token_source,
            options: self.options,
            pool,
        }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses a document that starts with `query`, `mutation` or
    /// `subscription`.
    ///
    /// Only queries are supported; the other operation kinds fail with
    /// [`ParseErrorKind::UnsupportedOperation`].
    pub fn parse_operation(self) -> Result<PooledOperation<'src, 'pool>, ParseError> {
        let source = self.source;
        let pool = self.pool;
        let options = self.options;
        let tokens = lex(source, self.token_source)?;
        let mut state = ParseState::new(source, &tokens, options);

        let keyword = state.cursor.peek_token();
        let Some(kind) = OperationKind::from_token_kind(keyword.kind) else {
            return Err(state.fail(ParseError::unexpected(
                "a query, mutation or subscription",
                "query | mutation | subscription",
                keyword,
                source,
            )));
        };
        state.cursor.skip();
        state.parse_operation_body(kind, pool)
    }

    /// Parses a query document whose `query` keyword is optional, so
    /// `{ a }` and `query Name { a }` are both accepted.
    pub fn parse_query(self) -> Result<PooledOperation<'src, 'pool>, ParseError> {
        let source = self.source;
        let pool = self.pool;
        let options = self.options;
        let tokens = lex(source, self.token_source)?;
        let mut state = ParseState::new(source, &tokens, options);

        if state.cursor.peek(&[QueryTokenKind::Query]) {
            state.cursor.skip();
        }
        state.parse_operation_body(OperationKind::Query, pool)
    }

    /// Parses an isolated literal value (e.g. a variable default such as
    /// `[1, 2]`) and returns its arena. The root is at index 0.
    pub fn parse_value(self) -> Result<ValueNodes, ParseError> {
        let source = self.source;
        let options = self.options;
        let tokens = lex(source, self.token_source)?;
        let mut state = ParseState::new(source, &tokens, options);

        let mut arena = ValueNodes::new();
        let result = state
            .parse_value_into(&mut arena, None)
            .and_then(|_| state.expect_end());
        match result {
            Ok(()) => Ok(arena),
            Err(err) => Err(state.fail(err)),
        }
    }
}

/// Lexes `source` into a terminated token vector.
///
/// Input that is empty, or that holds nothing but whitespace, commas and
/// comments, is blank.
fn lex<TTokenSource: QueryTokenSource>(
    source: &str,
    token_source: TTokenSource,
) -> Result<Vec<QueryToken>, ParseError> {
    if source.is_empty() {
        return Err(ParseError::blank_input());
    }
    if source.len() > u32::MAX as usize {
        return Err(ParseError::input_too_large(source.len()));
    }

    let mut tokens = Vec::new();
    collect_tokens(source, token_source, &mut tokens).inspect_err(|err| {
        log::trace!("Lexing failed: {}", err.format_oneline(source));
    })?;
    if tokens.len() <= 1 {
        return Err(ParseError::blank_input());
    }
    Ok(tokens)
}

// =============================================================================
// Grammar
// =============================================================================

/// State of one parse: the cursor over the lexed tokens and the current
/// nesting depth.
struct ParseState<'src, 'tokens> {
    source: &'src str,
    cursor: TokenCursor<'tokens>,
    options: ParserOptions,

    /// Shared nesting depth of selection sets, lists and objects.
    depth: usize,
}

impl<'src, 'tokens> ParseState<'src, 'tokens> {
    fn new(source: &'src str, tokens: &'tokens [QueryToken], options: ParserOptions) -> Self {
        Self {
            source,
            cursor: TokenCursor::new(tokens),
            options,
            depth: 0,
        }
    }

    fn fail(&self, err: ParseError) -> ParseError {
        log::trace!(
            "Parse failed after {} tokens: {}",
            self.cursor.position(),
            err.format_oneline(self.source),
        );
        err
    }

    fn unexpected(&self, expected: &str, expected_token: &str, found: QueryToken) -> ParseError {
        ParseError::unexpected(expected, expected_token, found, self.source)
    }

    /// Consumes the next token, requiring it to be name-like.
    fn expect_name(&mut self, expected: &str) -> Result<QueryToken, ParseError> {
        let token = self.cursor.next();
        if token.kind.is_name_like() {
            Ok(token)
        } else {
            Err(self.unexpected(expected, "name", token))
        }
    }

    fn expect_colon(&mut self, after: &str) -> Result<(), ParseError> {
        let token = self.cursor.next();
        if token.kind == QueryTokenKind::Colon {
            Ok(())
        } else {
            Err(self.unexpected(&format!("`:` after {after}"), ":", token))
        }
    }

    /// Requires that every token but the terminal one has been consumed.
    fn expect_end(&self) -> Result<(), ParseError> {
        if self.cursor.at_end() {
            return Ok(());
        }
        Err(self.unexpected("end of input", "EOF", self.cursor.peek_token()))
    }

    /// Enters one nesting level; `opener` is the token that opened it.
    fn enter_depth(&mut self, opener: QueryToken) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            let limit = self.options.max_depth;
            return Err(ParseError::new(
                format!("maximum nesting depth exceeded ({limit})"),
                Some(opener.span),
                ParseErrorKind::NestingDepthExceeded { limit },
            ));
        }
        Ok(())
    }

    fn exit_depth(&mut self) {
        self.depth -= 1;
    }

    // =========================================================================
    // Operations
    // =========================================================================

    fn parse_operation_body<'pool>(
        &mut self,
        kind: OperationKind,
        pool: &'pool OperationPool,
    ) -> Result<PooledOperation<'src, 'pool>, ParseError> {
        if kind != OperationKind::Query {
            let span = self.cursor.current().map(|token| token.span);
            return Err(self.fail(ParseError::new(
                format!("unsupported operation: `{kind}`"),
                span,
                ParseErrorKind::UnsupportedOperation { kind },
            )));
        }

        let mut op = pool.acquire();
        op.kind = Some(kind);
        match self.parse_operation_contents(&mut op) {
            Ok(()) => Ok(PooledOperation::new(op, pool, self.source)),
            Err(err) => {
                pool.release(op);
                Err(self.fail(err))
            },
        }
    }

    fn parse_operation_contents(&mut self, op: &mut Operation) -> Result<(), ParseError> {
        if self.cursor.peek(&[QueryTokenKind::Name]) {
            op.name = Some(self.cursor.next().span);
        }
        if self.cursor.peek(&[QueryTokenKind::ParenOpen]) {
            self.cursor.skip();
            self.parse_arguments(&mut op.arguments)?;
        }
        if self.cursor.peek(&[QueryTokenKind::CurlyBraceOpen]) {
            let opener = self.cursor.next();
            self.parse_fields(opener, &mut op.fields)?;
        }
        self.expect_end()
    }

    // =========================================================================
    // Fields
    // =========================================================================

    /// Builds the flattened field list for the selection set opened by
    /// `opener` and every selection set nested in it.
    ///
    /// `scopes` holds the chain of open selection sets. The bottom entry is
    /// the operation's own selection set (`None`); entries above it are the
    /// ids of fields whose selection sets are open.
    fn parse_fields(&mut self, opener: QueryToken, fields: &mut Fields) -> Result<(), ParseError> {
        self.enter_depth(opener)?;
        let mut scopes: SmallVec<[Option<usize>; 8]> = SmallVec::new();
        scopes.push(None);

        loop {
            if self.cursor.peek(&[QueryTokenKind::CurlyBraceClose]) {
                self.cursor.skip();
                scopes.pop();
                self.exit_depth();
                if scopes.is_empty() {
                    return Ok(());
                }
                continue;
            }

            if self.cursor.at_end() && scopes.len() == 1 {
                // The operation's closing `}` may be left off.
                self.exit_depth();
                return Ok(());
            }

            let token = self.cursor.peek_token();
            if !token.kind.is_name_like() {
                return Err(self.unexpected("an alias or field name", "name", token));
            }
            if fields.len() >= self.options.max_fields {
                let limit = self.options.max_fields;
                return Err(ParseError::new(
                    format!("field limit reached ({limit})"),
                    Some(token.span),
                    ParseErrorKind::FieldLimitExceeded { limit },
                ));
            }

            let id = fields.len();
            let parent_id = scopes.last().copied().flatten();
            let mut field = Field::new(id, parent_id, token.span);
            self.parse_field(&mut field)?;
            fields.push(field);
            if let Some(parent) = parent_id.and_then(|parent_id| fields.get_mut(parent_id)) {
                parent.children.push(id);
            }

            if self.cursor.peek(&[QueryTokenKind::CurlyBraceOpen]) {
                let opener = self.cursor.next();
                self.enter_depth(opener)?;
                scopes.push(Some(id));
            }
        }
    }

    /// Parses a field's alias, name and arguments.
    fn parse_field(&mut self, field: &mut Field) -> Result<(), ParseError> {
        let first = self.cursor.next();
        if self.cursor.peek(&[QueryTokenKind::Colon]) {
            self.cursor.skip();
            let name = self.expect_name("an aliased field name")?;
            field.alias = Some(first.span);
            field.name = name.span;
        } else {
            field.name = first.span;
        }

        if self.cursor.peek(&[QueryTokenKind::ParenOpen]) {
            self.cursor.skip();
            self.parse_arguments(&mut field.arguments)?;
        }
        Ok(())
    }

    // =========================================================================
    // Arguments
    // =========================================================================

    /// Parses `name: value` pairs up to and including the closing `)`.
    fn parse_arguments<A: smallvec::Array<Item = Argument>>(
        &mut self,
        arguments: &mut SmallVec<A>,
    ) -> Result<(), ParseError> {
        loop {
            if self.cursor.peek(&[QueryTokenKind::ParenClose]) {
                self.cursor.skip();
                return Ok(());
            }

            let name = self.expect_name("an argument name or `)`")?;
            if arguments.len() >= self.options.max_arguments {
                let limit = self.options.max_arguments;
                return Err(ParseError::new(
                    format!("too many arguments (limit {limit})"),
                    Some(name.span),
                    ParseErrorKind::ArgumentLimitExceeded { limit },
                ));
            }
            self.expect_colon("argument name")?;

            let mut argument = Argument::new(name.span);
            self.parse_value_into(&mut argument.value, None)?;
            arguments.push(argument);
        }
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Parses one value into `arena` as a child of `parent` and returns the
    /// id of the value's root node.
    fn parse_value_into(
        &mut self,
        arena: &mut ValueNodes,
        parent: Option<usize>,
    ) -> Result<usize, ParseError> {
        if self.cursor.peek(&[QueryTokenKind::SquareBracketOpen]) {
            return self.parse_list(arena, parent);
        }
        if self.cursor.peek(&[QueryTokenKind::CurlyBraceOpen]) {
            return self.parse_object(arena, parent);
        }

        let token = self.cursor.next();
        let kind = match token.kind {
            QueryTokenKind::IntValue => ValueKind::Int,
            QueryTokenKind::FloatValue => ValueKind::Float,
            QueryTokenKind::StringValue => ValueKind::String,
            QueryTokenKind::BooleanValue => ValueKind::Bool,
            QueryTokenKind::Variable => ValueKind::Variable,
            kind if kind.is_name_like() => ValueKind::String,
            _ => return Err(self.unexpected("a value", "value", token)),
        };
        Ok(push_node(arena, parent, kind, Some(token.span)))
    }

    fn parse_list(
        &mut self,
        arena: &mut ValueNodes,
        parent: Option<usize>,
    ) -> Result<usize, ParseError> {
        let opener = self.cursor.next();
        self.enter_depth(opener)?;
        let id = push_node(arena, parent, ValueKind::List, None);
        let mut first_kind = None;

        loop {
            if self.cursor.peek(&[QueryTokenKind::SquareBracketClose]) {
                let closer = self.cursor.next();
                if first_kind.is_none() {
                    return Err(ParseError::new(
                        "list cannot be empty",
                        Some(ByteSpan::new(opener.span.start, closer.span.end)),
                        ParseErrorKind::EmptyList,
                    ));
                }
                self.exit_depth();
                return Ok(id);
            }
            if self.cursor.at_end() {
                return Err(self.unexpected("a value or `]`", "]", self.cursor.peek_token()));
            }

            let element_start = self.cursor.peek_token().span.start;
            let child = self.parse_value_into(arena, Some(id))?;
            let Some(child_kind) = arena.get(child).map(|node| node.kind) else {
                continue;
            };
            match first_kind {
                None => first_kind = Some(child_kind),
                Some(expected) if self.options.require_homogeneous_lists && expected != child_kind => {
                    let element_end = self.cursor.current().map_or(element_start, |token| token.span.end);
                    return Err(ParseError::new(
                        format!("list element of kind {child_kind} in a list of {expected}"),
                        Some(ByteSpan::new(element_start, element_end)),
                        ParseErrorKind::HeterogeneousList,
                    ));
                },
                Some(_) => {},
            }
        }
    }

    fn parse_object(
        &mut self,
        arena: &mut ValueNodes,
        parent: Option<usize>,
    ) -> Result<usize, ParseError> {
        let opener = self.cursor.next();
        self.enter_depth(opener)?;
        let id = push_node(arena, parent, ValueKind::Object, None);

        loop {
            if self.cursor.peek(&[QueryTokenKind::CurlyBraceClose]) {
                self.cursor.skip();
                self.exit_depth();
                return Ok(id);
            }

            let key = self.expect_name("an object member name or `}`")?;
            self.expect_colon("object member name")?;
            let child = self.parse_value_into(arena, Some(id))?;
            if let Some(node) = arena.get_mut(child) {
                node.member_name = Some(key.span);
            }
        }
    }
}

/// Appends a node to `arena`, linking it as the last child of `parent`.
fn push_node(
    arena: &mut ValueNodes,
    parent: Option<usize>,
    kind: ValueKind,
    value: Option<ByteSpan>,
) -> usize {
    let id = arena.len();
    let mut node = ValueNode::new(id, parent, kind);
    node.value = value;
    arena.push(node);
    if let Some(parent) = parent.and_then(|parent_id| arena.get_mut(parent_id)) {
        parent.children.push(id);
    }
    id
}
