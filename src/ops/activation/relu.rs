// src/ops/activation/relu.rs

use crate::autograd::BackwardOp;
use crate::value::Value;
use std::sync::Arc;

// --- Forward Operation ---

/// Rectified Linear Unit: `relu(x) = max(0, x)`.
pub fn relu(input: &Value) -> Value {
    let data = input.data().max(0.0);
    let grad_fn = ReluBackward {
        input: input.clone(),
    };
    Value::from_op(data, &[input], Arc::new(grad_fn), "relu")
}

impl Value {
    /// Applies the Rectified Linear Unit activation to this node.
    pub fn relu(&self) -> Value {
        relu(self)
    }
}

// --- Backward Operation ---

#[derive(Debug)]
struct ReluBackward {
    input: Value,
}

impl BackwardOp for ReluBackward {
    fn backward(&self, output_data: f64, upstream_grad: f64) {
        // Gradient flows iff the thresholded output is positive, which
        // detects a positive pre-activation.
        if output_data > 0.0 {
            self.input.accumulate_grad(upstream_grad);
        }
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.input.clone()]
    }
}

// --- Tests ---
