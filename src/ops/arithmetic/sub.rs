// src/ops/arithmetic/sub.rs

use crate::ops::arithmetic::{add, neg};
use crate::value::Value;
use std::ops::Sub;

/// Subtraction, derived as `lhs + (-rhs)` so the gradient is correct by
/// construction.
pub fn sub(lhs: &Value, rhs: &Value) -> Value {
    add(lhs, &neg(rhs))
}

// --- Operator overloads ---

impl Sub<&Value> for &Value {
    type Output = Value;
    fn sub(self, rhs: &Value) -> Value {
        sub(self, rhs)
    }
}

impl Sub<Value> for Value {
    type Output = Value;
    fn sub(self, rhs: Value) -> Value {
        sub(&self, &rhs)
    }
}

impl Sub<&Value> for Value {
    type Output = Value;
    fn sub(self, rhs: &Value) -> Value {
        sub(&self, rhs)
    }
}

impl Sub<Value> for &Value {
    type Output = Value;
    fn sub(self, rhs: Value) -> Value {
        sub(self, &rhs)
    }
}

impl Sub<f64> for &Value {
    type Output = Value;
    fn sub(self, rhs: f64) -> Value {
        sub(self, &Value::new(rhs))
    }
}

impl Sub<f64> for Value {
    type Output = Value;
    fn sub(self, rhs: f64) -> Value {
        sub(&self, &Value::new(rhs))
    }
}

impl Sub<&Value> for f64 {
    type Output = Value;
    fn sub(self, rhs: &Value) -> Value {
        sub(&Value::new(self), rhs)
    }
}

impl Sub<Value> for f64 {
    type Output = Value;
    fn sub(self, rhs: Value) -> Value {
        sub(&Value::new(self), &rhs)
    }
}

// --- Tests ---
