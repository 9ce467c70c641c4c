// src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::value::Value;
use std::ops::Mul;
use std::sync::Arc;

// --- Forward Operation ---

/// Multiplies two nodes, recording the result in the graph.
///
/// Product rule: each operand receives the other operand's forward data
/// times the upstream gradient.
pub fn mul(lhs: &Value, rhs: &Value) -> Value {
    let data = lhs.data() * rhs.data();
    let grad_fn = MulBackward {
        lhs: lhs.clone(),
        rhs: rhs.clone(),
    };
    Value::from_op(data, &[lhs, rhs], Arc::new(grad_fn), "*")
}

// --- Backward Operation ---

#[derive(Debug)]
struct MulBackward {
    lhs: Value,
    rhs: Value,
}

impl BackwardOp for MulBackward {
    fn backward(&self, _output_data: f64, upstream_grad: f64) {
        // Read both forward values before writing either gradient; the
        // operands may alias the same node (x * x).
        let lhs_data = self.lhs.data();
        let rhs_data = self.rhs.data();
        self.lhs.accumulate_grad(rhs_data * upstream_grad);
        self.rhs.accumulate_grad(lhs_data * upstream_grad);
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.lhs.clone(), self.rhs.clone()]
    }
}

// --- Operator overloads ---

impl Mul<&Value> for &Value {
    type Output = Value;
    fn mul(self, rhs: &Value) -> Value {
        mul(self, rhs)
    }
}

impl Mul<Value> for Value {
    type Output = Value;
    fn mul(self, rhs: Value) -> Value {
        mul(&self, &rhs)
    }
}

impl Mul<&Value> for Value {
    type Output = Value;
    fn mul(self, rhs: &Value) -> Value {
        mul(&self, rhs)
    }
}

impl Mul<Value> for &Value {
    type Output = Value;
    fn mul(self, rhs: Value) -> Value {
        mul(self, &rhs)
    }
}

impl Mul<f64> for &Value {
    type Output = Value;
    fn mul(self, rhs: f64) -> Value {
        mul(self, &Value::new(rhs))
    }
}

impl Mul<f64> for Value {
    type Output = Value;
    fn mul(self, rhs: f64) -> Value {
        mul(&self, &Value::new(rhs))
    }
}

impl Mul<&Value> for f64 {
    type Output = Value;
    fn mul(self, rhs: &Value) -> Value {
        mul(&Value::new(self), rhs)
    }
}

impl Mul<Value> for f64 {
    type Output = Value;
    fn mul(self, rhs: Value) -> Value {
        mul(&Value::new(self), &rhs)
    }
}

// --- Tests ---
