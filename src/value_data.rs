use crate::autograd::BackwardOp;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// The record behind every [`Value`] handle: one scalar, its accumulated
/// gradient, owning handles to the operand nodes that produced it, and
/// the gradient-propagation rule recorded by the producing operation.
///
/// The parent list is fixed at construction; the graph is append-only
/// and acyclic because an operation only ever creates a fresh node whose
/// parents already exist.
pub struct ValueData {
    /// Current scalar payload.
    pub data: f64,
    /// Accumulated partial derivative of some root output with respect
    /// to this node. Starts at 0.0; `backward()` adds into it.
    pub grad: f64,
    /// Operand nodes, deduplicated by identity (`Arc` pointer), kept in
    /// insertion order so graph traversal is deterministic. Empty for
    /// leaf nodes.
    pub parents: Vec<Value>,
    /// Propagation rule of the producing operation. `None` for leaves.
    pub grad_fn: Option<Arc<dyn BackwardOp + Send + Sync>>,
    /// Diagnostic tag naming the producing operation ("" for leaves).
    /// Not used in gradient math.
    pub op: &'static str,
}

impl ValueData {
    /// Creates the record for a leaf node holding a literal scalar.
    pub fn leaf(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            parents: Vec::new(),
            grad_fn: None,
            op: "",
        }
    }

    /// Creates the record for an operation result.
    ///
    /// Operands appearing twice (the same node used on both sides of an
    /// operation) collapse to a single parent entry; the `grad_fn` still
    /// accumulates one gradient contribution per use.
    pub fn from_op(
        data: f64,
        operands: &[&Value],
        grad_fn: Arc<dyn BackwardOp + Send + Sync>,
        op: &'static str,
    ) -> Self {
        let mut parents: Vec<Value> = Vec::with_capacity(operands.len());
        for operand in operands {
            if !parents.iter().any(|p| p.ptr_eq(operand)) {
                parents.push((*operand).clone());
            }
        }
        ValueData {
            data,
            grad: 0.0,
            parents,
            grad_fn: Some(grad_fn),
            op,
        }
    }

    /// A node is a leaf iff no operation produced it.
    pub fn is_leaf(&self) -> bool {
        self.grad_fn.is_none()
    }
}

impl fmt::Debug for ValueData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueData")
            .field("data", &self.data)
            .field("grad", &self.grad)
            .field("op", &self.op)
            .field("parents", &self.parents.len())
            .finish()
    }
}
