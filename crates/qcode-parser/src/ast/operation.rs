use crate::ByteSpan;
use crate::ast::Argument;
use crate::ast::Field;
use crate::ast::Fields;
use crate::ast::OperationKind;
use smallvec::SmallVec;

/// One parsed document.
///
/// An `Operation` stores only spans and indices, never borrowed text, so
/// it outlives the parse that filled it and is recycled through an
/// [`OperationPool`](crate::OperationPool). Read text back through the
/// [`PooledOperation`](crate::PooledOperation) that wraps it, or with
/// [`ByteSpan::text()`] and the original source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Operation {
    /// `None` only while the operation sits cleared in a pool.
    pub kind: Option<OperationKind>,
    pub name: Option<ByteSpan>,
    pub arguments: SmallVec<[Argument; 4]>,
    pub fields: Fields,
}

impl Operation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every piece of parsed content.
    ///
    /// Clearing drops the argument, field and value records themselves, so
    /// no span into a previously parsed input survives in any inline or
    /// heap slot. Capacity is kept.
    pub fn reset(&mut self) {
        self.kind = None;
        self.name = None;
        self.arguments.clear();
        self.fields.clear();
    }

    /// Returns `true` if nothing has been parsed into this operation.
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.name.is_none()
            && self.arguments.is_empty()
            && self.fields.is_empty()
    }

    pub fn field(&self, id: usize) -> Option<&Field> {
        self.fields.get(id)
    }

    /// Fields of the operation's own selection set, in source order.
    pub fn top_level_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.parent_id.is_none())
    }

    /// The direct children of field `id`, in source order.
    pub fn children_of(&self, id: usize) -> impl Iterator<Item = &Field> {
        self.fields
            .get(id)
            .into_iter()
            .flat_map(|field| field.children.iter())
            .filter_map(|child_id| self.fields.get(*child_id))
    }

    /// Number of arguments across the operation and all of its fields.
    pub fn argument_count(&self) -> usize {
        self.arguments.len()
            + self
                .fields
                .iter()
                .map(|field| field.arguments.len())
                .sum::<usize>()
    }
}
