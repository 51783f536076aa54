use crate::ByteSpan;
use crate::ast::ValueNode;
use crate::ast::ValueNodes;
use smallvec::SmallVec;

/// Arguments attached to a [`Field`](crate::ast::Field). Most fields take at
/// most a couple, so two are stored inline.
pub type Arguments = SmallVec<[Argument; 2]>;

/// A `name: value` pair attached to an operation or a field.
///
/// `value` is the argument's own arena; its root node is at index 0.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Argument {
    pub name: ByteSpan,
    pub value: ValueNodes,
}

impl Argument {
    pub fn new(name: ByteSpan) -> Self {
        Self {
            name,
            value: ValueNodes::new(),
        }
    }

    /// The root of the value tree.
    pub fn root(&self) -> Option<&ValueNode> {
        self.value.first()
    }

    pub fn name<'src>(&self, source: &'src str) -> &'src str {
        self.name.text(source)
    }
}
