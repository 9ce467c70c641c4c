// src/ops/arithmetic/neg.rs

use crate::ops::arithmetic::mul;
use crate::value::Value;
use std::ops::Neg;

/// Negation, derived as multiplication by a literal -1 so the gradient
/// is correct by construction.
pub fn neg(value: &Value) -> Value {
    mul(value, &Value::new(-1.0))
}

impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg(self)
    }
}

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg(&self)
    }
}
