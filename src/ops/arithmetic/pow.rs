// src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::value::Value;
use std::sync::Arc;

// --- Forward Operation ---

/// Raises a node to a constant exponent.
///
/// The exponent is a plain float, not a graph node; no gradient flows to
/// it. A base of 0 with a negative exponent follows IEEE-754 and yields
/// `inf`, not an error.
pub fn pow(base: &Value, exponent: f64) -> Value {
    let data = base.data().powf(exponent);
    let grad_fn = PowBackward {
        base: base.clone(),
        exponent,
    };
    Value::from_op(data, &[base], Arc::new(grad_fn), "powf")
}

impl Value {
    /// Raises this node to a constant float exponent.
    pub fn powf(&self, exponent: f64) -> Value {
        pow(self, exponent)
    }
}

// --- Backward Operation ---

#[derive(Debug)]
struct PowBackward {
    base: Value,
    exponent: f64,
}

impl BackwardOp for PowBackward {
    fn backward(&self, _output_data: f64, upstream_grad: f64) {
        // d(x^e)/dx = e * x^(e-1)
        let base_data = self.base.data();
        self.base
            .accumulate_grad(self.exponent * base_data.powf(self.exponent - 1.0) * upstream_grad);
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.base.clone()]
    }
}

// --- Tests ---
