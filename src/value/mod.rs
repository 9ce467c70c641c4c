// src/value/mod.rs

use crate::value_data::ValueData;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

mod accessors;
mod autograd_methods;
pub mod create;
mod display;

/// A shared handle to one node of the computation graph.
///
/// `Value` uses `Arc<RwLock<ValueData>>` internally to allow for:
/// 1.  **Shared ownership:** the same node may be a parent of several
///     downstream nodes (diamonds are the normal case in a DAG), and
///     cloning a `Value` clones the `Arc`, not the node. This is how
///     "the same variable used twice" is represented.
/// 2.  **Interior mutability:** `grad` is accumulated in place during
///     the backward pass through immutable handles.
///
/// A node is dropped once no handle and no downstream node's parent
/// list references it.
pub struct Value {
    /// Arc for shared ownership, RwLock for interior mutability of ValueData.
    pub(crate) data: Arc<RwLock<ValueData>>,
}

impl Value {
    /// Acquires a read lock on the node record.
    ///
    /// The lock is released when the guard goes out of scope.
    /// Panics if the RwLock is poisoned.
    pub(crate) fn read_data(&self) -> RwLockReadGuard<'_, ValueData> {
        self.data.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the node record.
    /// Panics if the RwLock is poisoned.
    pub(crate) fn write_data(&self) -> RwLockWriteGuard<'_, ValueData> {
        self.data.write().expect("RwLock poisoned")
    }

    /// Stable identity of the underlying node, for visited sets and
    /// identity-based deduplication.
    pub(crate) fn as_ptr(&self) -> *const RwLock<ValueData> {
        Arc::as_ptr(&self.data)
    }

    /// Whether two handles alias the same underlying node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

// Cloning a Value clones the Arc, never the node.
impl Clone for Value {
    fn clone(&self) -> Self {
        Value {
            data: Arc::clone(&self.data),
        }
    }
}
