// src/autograd/backward_op.rs

use crate::value::Value;
use std::fmt::Debug;

/// Trait representing the gradient-propagation rule of one operation.
///
/// Each operation (Add, Mul, Pow, ReLU) has a corresponding struct
/// implementing this trait, storing owning `Value` handles to the
/// specific operand nodes that produced the result. Owning captures keep
/// the rule valid after the building function returns; a rule must never
/// hold a handle to its own output node, since the output node owns the
/// rule and that would leak the subgraph through an `Arc` cycle.
pub trait BackwardOp: Debug {
    /// Performs the backward step for this operation.
    ///
    /// Takes the forward data and the gradient accumulated at the
    /// *output* of this operation, and adds the local-gradient
    /// contributions into each input's `grad`. It reads only its inputs'
    /// `data` and writes only its inputs' `grad`; this locality is what
    /// makes the global reverse pass correct by composition.
    fn backward(&self, output_data: f64, upstream_grad: f64);

    /// The operand nodes this rule propagates into, in operand order.
    fn inputs(&self) -> Vec<Value>;
}
