use std::ops::Deref;
use std::ops::DerefMut;

use crate::ByteSpan;
use crate::OperationPool;
use crate::ast::Operation;

/// A parsed [`Operation`] checked out of an [`OperationPool`], together
/// with the source text its spans point into.
///
/// Dropping the guard resets the operation and hands it back to its pool.
/// Use [`detach()`](Self::detach) to keep the operation instead.
#[derive(Debug)]
pub struct PooledOperation<'src, 'pool> {
    /// Always `Some` until the guard is dropped or detached.
    op: Option<Box<Operation>>,
    pool: &'pool OperationPool,
    source: &'src str,
}

impl<'src, 'pool> PooledOperation<'src, 'pool> {
    pub(crate) fn new(
        op: Box<Operation>,
        pool: &'pool OperationPool,
        source: &'src str,
    ) -> Self {
        Self {
            op: Some(op),
            pool,
            source,
        }
    }

    /// The text this operation was parsed from.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Resolves a span of this operation against its source text.
    pub fn text(&self, span: ByteSpan) -> &'src str {
        span.text(self.source)
    }

    /// The operation's name, if it has one.
    pub fn name_text(&self) -> Option<&'src str> {
        self.name.map(|span| self.text(span))
    }

    /// Returns the operation to its pool now.
    pub fn release(self) {
        drop(self);
    }

    /// Takes the operation out of pool management.
    pub fn detach(mut self) -> Box<Operation> {
        self.op.take().unwrap_or_default()
    }
}

impl Deref for PooledOperation<'_, '_> {
    type Target = Operation;

    fn deref(&self) -> &Operation {
        match &self.op {
            Some(op) => op,
            None => unreachable!("PooledOperation used after release"),
        }
    }
}

impl DerefMut for PooledOperation<'_, '_> {
    fn deref_mut(&mut self) -> &mut Operation {
        match &mut self.op {
            Some(op) => op,
            None => unreachable!("PooledOperation used after release"),
        }
    }
}

impl Drop for PooledOperation<'_, '_> {
    fn drop(&mut self) {
        if let Some(op) = self.op.take() {
            self.pool.release(op);
        }
    }
}
