// src/value/create.rs

use crate::autograd::BackwardOp;
use crate::value::Value;
use crate::value_data::ValueData;
use std::sync::{Arc, RwLock};

impl Value {
    /// Creates a leaf node from a literal scalar, with empty parents and
    /// no propagation rule.
    pub fn new(data: f64) -> Self {
        Value {
            data: Arc::new(RwLock::new(ValueData::leaf(data))),
        }
    }

    /// Wires up the result node of an operation: forward value, operand
    /// handles, and the operation's propagation rule.
    ///
    /// Used by every op in `crate::ops`; the rule must hold owning
    /// handles to the operands only, never to the result (that would
    /// cycle the `Arc` graph).
    pub(crate) fn from_op(
        data: f64,
        operands: &[&Value],
        grad_fn: Arc<dyn BackwardOp + Send + Sync>,
        op: &'static str,
    ) -> Self {
        Value {
            data: Arc::new(RwLock::new(ValueData::from_op(
                data, operands, grad_fn, op,
            ))),
        }
    }
}

impl From<f64> for Value {
    /// Wraps a bare float as a literal leaf node.
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}
