use std::sync::LazyLock;

use crate::ast::Operation;
use parking_lot::Mutex;

static GLOBAL_POOL: LazyLock<OperationPool> = LazyLock::new(OperationPool::new);

/// A concurrency-safe free list of reusable [`Operation`]s.
///
/// Every instance is reset both when it is released and again when it is
/// acquired, so an operation handed out never carries content from an
/// earlier parse. Idle instances beyond `max_idle` are dropped instead of
/// kept.
///
/// ```
/// use qcode_parser::OperationPool;
///
/// let pool = OperationPool::with_max_idle(4);
/// let op = pool.acquire();
/// assert!(op.is_empty());
/// pool.release(op);
/// assert_eq!(pool.idle_count(), 1);
/// ```
#[derive(Debug)]
pub struct OperationPool {
    idle: Mutex<Vec<Box<Operation>>>,
    max_idle: usize,
}

impl OperationPool {
    pub const DEFAULT_MAX_IDLE: usize = 256;

    /// The process-wide pool used by the crate-level `parse*` functions.
    pub fn global() -> &'static OperationPool {
        &GLOBAL_POOL
    }

    pub fn new() -> Self {
        Self::with_max_idle(Self::DEFAULT_MAX_IDLE)
    }

    pub fn with_max_idle(max_idle: usize) -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
            max_idle,
        }
    }

    /// Takes an idle operation, or allocates one if none is idle.
    pub fn acquire(&self) -> Box<Operation> {
        let reused = self.idle.lock().pop();
        match reused {
            Some(mut op) => {
                log::trace!("Reusing pooled operation");
                op.reset();
                op
            },
            None => {
                log::trace!("Operation pool empty, allocating a new operation");
                Box::new(Operation::new())
            },
        }
    }

    /// Resets `op` and returns it to the pool.
    ///
    /// Callers must copy out anything they need first.
    pub fn release(&self, mut op: Box<Operation>) {
        op.reset();
        let mut idle = self.idle.lock();
        if idle.len() >= self.max_idle {
            log::debug!(
                "Operation pool holds {} idle operations, dropping released operation",
                idle.len(),
            );
            return;
        }
        idle.push(op);
    }

    /// Number of operations currently idle in the pool.
    pub fn idle_count(&self) -> usize {
        self.idle.lock().len()
    }

    pub fn max_idle(&self) -> usize {
        self.max_idle
    }
}

impl Default for OperationPool {
    fn default() -> Self {
        Self::new()
    }
}
