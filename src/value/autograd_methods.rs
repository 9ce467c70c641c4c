// src/value/autograd_methods.rs

use crate::autograd::graph::run_backward;
use crate::autograd::BackwardOp;
use crate::value::Value;
use std::sync::Arc;

impl Value {
    /// Returns the propagation rule attached to this node, if any.
    pub fn grad_fn(&self) -> Option<Arc<dyn BackwardOp + Send + Sync>> {
        self.read_data().grad_fn.clone()
    }

    /// Computes `d(self)/d(n)` for every node `n` reachable from this
    /// node, accumulating into each node's `grad`.
    ///
    /// Seeds `self.grad = 1.0`, then invokes each node's propagation
    /// rule in reverse topological order, so a node's own rule only runs
    /// once its `grad` already holds the full sum of every downstream
    /// contribution.
    ///
    /// Repeated calls without an intervening `zero_grad` sweep
    /// accumulate; that is documented behavior, not a bug.
    pub fn backward(&self) {
        run_backward(self);
    }
}
