use crate::ByteSpan;
use crate::ast::Argument;
use crate::ast::Arguments;
use smallvec::SmallVec;

/// The flattened field list of an [`Operation`](crate::ast::Operation).
pub type Fields = SmallVec<[Field; 10]>;

/// Child field ids of a [`Field`].
pub type FieldIds = SmallVec<[usize; 4]>;

/// One entry of a selection set.
///
/// Fields are stored flat in their operation's [`Fields`] list. `id` is the
/// field's position in that list, assigned in source order, so every child
/// id is greater than its parent's.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Field {
    pub id: usize,

    /// The enclosing field, or `None` for a field of the operation's own
    /// selection set.
    pub parent_id: Option<usize>,

    pub name: ByteSpan,
    pub alias: Option<ByteSpan>,
    pub arguments: Arguments,
    pub children: FieldIds,
}

impl Field {
    pub fn new(id: usize, parent_id: Option<usize>, name: ByteSpan) -> Self {
        Self {
            id,
            parent_id,
            name,
            ..Default::default()
        }
    }

    /// The name this field's result is reported under: the alias if
    /// present, otherwise the field name.
    pub fn response_key<'src>(&self, source: &'src str) -> &'src str {
        self.alias.unwrap_or(self.name).text(source)
    }

    /// Looks up an argument by name.
    pub fn argument(&self, name: &str, source: &str) -> Option<&Argument> {
        self.arguments
            .iter()
            .find(|argument| argument.name.text(source) == name)
    }
}
