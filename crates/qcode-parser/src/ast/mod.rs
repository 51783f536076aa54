//! Flattened, index-linked AST for parsed query documents.
//!
//! Trees are stored as append-only arenas: an [`Operation`]'s fields live in
//! one list and an [`Argument`]'s value tree in another. Nodes refer to each
//! other by their index (`id`) in the owning list, never by reference, and
//! all text is stored as [`ByteSpan`](crate::ByteSpan)s into the parsed
//! source. An `Operation` therefore borrows nothing and can be recycled
//! through an [`OperationPool`](crate::OperationPool).
//!
//! Small inline buffers ([`SmallVec`](crate::SmallVec)) keep typical
//! documents off the heap; larger ones spill over transparently.

mod argument;
mod field;
mod operation;
mod operation_kind;
mod value_kind;
mod value_node;

pub use argument::Argument;
pub use argument::Arguments;
pub use field::Field;
pub use field::FieldIds;
pub use field::Fields;
pub use operation::Operation;
pub use operation_kind::OperationKind;
pub use value_kind::ValueKind;
pub use value_node::ValueNode;
pub use value_node::ValueNodes;
