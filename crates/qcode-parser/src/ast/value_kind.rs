/// The syntactic kind of a [`ValueNode`](crate::ast::ValueNode).
///
/// Kinds are purely syntactic: a bare name such as `null` or an enum value
/// is a [`ValueKind::String`], and no schema is consulted.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueKind {
    Bool,
    Float,
    Int,
    List,
    Object,
    String,
    Variable,
}

impl ValueKind {
    /// Returns `true` for kinds that own child nodes.
    pub fn is_composite(&self) -> bool {
        matches!(self, ValueKind::List | ValueKind::Object)
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ValueKind::Bool => "Bool",
            ValueKind::Float => "Float",
            ValueKind::Int => "Int",
            ValueKind::List => "List",
            ValueKind::Object => "Object",
            ValueKind::String => "String",
            ValueKind::Variable => "Variable",
        })
    }
}
