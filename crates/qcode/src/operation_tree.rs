use qcode_parser::ast::Argument;
use qcode_parser::ast::Field;
use qcode_parser::ast::Operation;
use qcode_parser::ast::ValueKind;
use qcode_parser::ast::ValueNodes;
use qcode_parser::token::QueryTokenKind;
use qcode_parser::token_source::StrQueryTokenSource;
use qcode_parser::ByteSpan;
use std::fmt;

const INDENT: &str = "  ";

/// Renders a parsed [`Operation`] as an indented field tree:
///
/// ```text
/// query Profile($id: Variable)
///   user(id: $id)
///     name
///     avatar: picture(size: 64)
/// ```
pub(crate) struct OperationTree<'a> {
    op: &'a Operation,
    source: &'a str,

    /// Start offsets of every string literal's content, in source order.
    quoted_starts: Vec<u32>,
}

impl<'a> OperationTree<'a> {
    pub(crate) fn new(op: &'a Operation, source: &'a str) -> Self {
        let quoted_starts = StrQueryTokenSource::new(source)
            .filter(|token| token.kind == QueryTokenKind::StringValue)
            .map(|token| token.span.start)
            .collect();
        Self { op, source, quoted_starts }
    }

    fn write_field(&self, f: &mut fmt::Formatter<'_>, field: &Field, depth: usize) -> fmt::Result {
        write!(f, "\n{}", INDENT.repeat(depth))?;
        if let Some(alias) = field.alias {
            write!(f, "{}: ", alias.text(self.source))?;
        }
        f.write_str(field.name.text(self.source))?;
        self.write_arguments(f, &field.arguments)?;
        for child in self.op.children_of(field.id) {
            self.write_field(f, child, depth + 1)?;
        }
        Ok(())
    }

    fn write_arguments(&self, f: &mut fmt::Formatter<'_>, arguments: &[Argument]) -> fmt::Result {
        if arguments.is_empty() {
            return Ok(());
        }
        f.write_str("(")?;
        for (idx, argument) in arguments.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: ", argument.name(self.source))?;
            self.write_value(f, &argument.value, 0)?;
        }
        f.write_str(")")
    }

    fn write_value(&self, f: &mut fmt::Formatter<'_>, nodes: &ValueNodes, id: usize) -> fmt::Result {
        let Some(node) = nodes.get(id) else {
            return Ok(());
        };
        let (open, close) = match node.kind {
            ValueKind::List => ("[", "]"),
            ValueKind::Object => ("{ ", " }"),
            ValueKind::Variable => return write!(f, "${}", node.text(self.source)),
            ValueKind::String if self.is_quoted(node.value) => {
                return write!(f, "\"{}\"", node.text(self.source));
            },
            ValueKind::Bool | ValueKind::Float | ValueKind::Int | ValueKind::String => {
                return f.write_str(node.text(self.source));
            },
        };
        f.write_str(open)?;
        for (idx, child_id) in node.children.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            if let Some(member) = nodes.get(*child_id).and_then(|c| c.member_name(self.source)) {
                write!(f, "{member}: ")?;
            }
            self.write_value(f, nodes, *child_id)?;
        }
        f.write_str(close)
    }

    /// String nodes also hold `null` and enum-like names, which were never
    /// quoted in the source. A quoted node's span starts exactly where a
    /// string literal token's content does.
    fn is_quoted(&self, span: Option<ByteSpan>) -> bool {
        span.is_some_and(|span| self.quoted_starts.binary_search(&span.start).is_ok())
    }
}

impl fmt::Display for OperationTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op.kind {
            Some(kind) => f.write_str(kind.as_str())?,
            None => f.write_str("(empty)")?,
        }
        if let Some(name) = self.op.name {
            write!(f, " {}", name.text(self.source))?;
        }
        self.write_arguments(f, &self.op.arguments)?;
        for field in self.op.top_level_fields() {
            self.write_field(f, field, 1)?;
        }
        Ok(())
    }
}
