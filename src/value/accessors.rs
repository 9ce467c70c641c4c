// src/value/accessors.rs

use crate::value::Value;

impl Value {
    /// Returns the node's current scalar payload.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Overwrites the node's scalar payload in place.
    ///
    /// Used by optimizers to apply updates to leaf parameters. Mutating
    /// an interior node does not re-run the forward pass of anything
    /// built on top of it.
    pub fn set_data(&self, data: f64) {
        self.write_data().data = data;
    }

    /// Returns the accumulated gradient of the node.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Overwrites the accumulated gradient.
    pub fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Resets the gradient to exactly 0.0 (the data is untouched).
    ///
    /// Safe to call repeatedly; required between independent backward
    /// passes, since gradients otherwise accumulate across calls.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Adds a contribution into the accumulated gradient.
    ///
    /// This is the only write a propagation rule performs on a parent,
    /// so contributions from every path through a shared node sum up.
    pub(crate) fn accumulate_grad(&self, contribution: f64) {
        self.write_data().grad += contribution;
    }

    /// Returns clones of the parent handles (operand nodes), in their
    /// fixed insertion order. Empty for leaves.
    pub fn parents(&self) -> Vec<Value> {
        self.read_data().parents.clone()
    }

    /// Diagnostic tag naming the producing operation ("" for leaves).
    pub fn op(&self) -> &'static str {
        self.read_data().op
    }

    /// Whether this node is a leaf (no producing operation).
    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }
}

#[cfg(test)]
mod tests {
    use crate::Value;

    #[test]
    fn test_data_accessors() {
        let v = Value::new(1.0);
        v.set_data(-3.0);
        assert_eq!(v.data(), -3.0);
    }

    #[test]
    fn test_grad_accessors() {
        let v = Value::new(1.0);
        v.set_grad(0.5);
        assert_eq!(v.grad(), 0.5);
    }

    #[test]
    fn test_zero_grad_is_idempotent() {
        let v = Value::new(1.0);
        v.set_grad(42.0);
        v.zero_grad();
        assert_eq!(v.grad(), 0.0);
        v.zero_grad();
        assert_eq!(v.grad(), 0.0);
        // data stays untouched
        assert_eq!(v.data(), 1.0);
    }

    #[test]
    fn test_accumulate_grad_sums() {
        let v = Value::new(1.0);
        v.accumulate_grad(1.5);
        v.accumulate_grad(2.5);
        assert_eq!(v.grad(), 4.0);
    }

    #[test]
    fn test_op_label() {
        let a = Value::new(2.0);
        let b = Value::new(3.0);
        assert_eq!(a.op(), "");
        assert_eq!((&a + &b).op(), "+");
        assert_eq!((&a * &b).op(), "*");
        assert_eq!(a.powf(2.0).op(), "powf");
        assert_eq!(a.relu().op(), "relu");
    }
}
