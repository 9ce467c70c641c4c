// src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::value::Value;
use std::ops::Add;
use std::sync::Arc;

// --- Forward Operation ---

/// Adds two nodes, recording the result in the graph.
///
/// Addition distributes the upstream gradient unchanged to both
/// operands.
pub fn add(lhs: &Value, rhs: &Value) -> Value {
    let data = lhs.data() + rhs.data();
    let grad_fn = AddBackward {
        lhs: lhs.clone(),
        rhs: rhs.clone(),
    };
    Value::from_op(data, &[lhs, rhs], Arc::new(grad_fn), "+")
}

// --- Backward Operation ---

/// Backward operation for addition; holds owning handles to the
/// operands it propagates into.
#[derive(Debug)]
struct AddBackward {
    lhs: Value,
    rhs: Value,
}

impl BackwardOp for AddBackward {
    fn backward(&self, _output_data: f64, upstream_grad: f64) {
        // With aliased operands (x + x) these are two accumulations
        // into the same node, which is exactly the sum over paths.
        self.lhs.accumulate_grad(upstream_grad);
        self.rhs.accumulate_grad(upstream_grad);
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.lhs.clone(), self.rhs.clone()]
    }
}

// --- Operator overloads ---

impl Add<&Value> for &Value {
    type Output = Value;
    fn add(self, rhs: &Value) -> Value {
        add(self, rhs)
    }
}

impl Add<Value> for Value {
    type Output = Value;
    fn add(self, rhs: Value) -> Value {
        add(&self, &rhs)
    }
}

impl Add<&Value> for Value {
    type Output = Value;
    fn add(self, rhs: &Value) -> Value {
        add(&self, rhs)
    }
}

impl Add<Value> for &Value {
    type Output = Value;
    fn add(self, rhs: Value) -> Value {
        add(self, &rhs)
    }
}

// Bare floats are wrapped as literal leaf nodes on either side.

impl Add<f64> for &Value {
    type Output = Value;
    fn add(self, rhs: f64) -> Value {
        add(self, &Value::new(rhs))
    }
}

impl Add<f64> for Value {
    type Output = Value;
    fn add(self, rhs: f64) -> Value {
        add(&self, &Value::new(rhs))
    }
}

impl Add<&Value> for f64 {
    type Output = Value;
    fn add(self, rhs: &Value) -> Value {
        add(&Value::new(self), rhs)
    }
}

impl Add<Value> for f64 {
    type Output = Value;
    fn add(self, rhs: Value) -> Value {
        add(&Value::new(self), &rhs)
    }
}

// --- Tests ---
