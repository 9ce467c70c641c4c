// src/ops/arithmetic/div.rs

use crate::ops::arithmetic::{mul, pow};
use crate::value::Value;
use std::ops::Div;

/// Division, derived as `lhs * rhs^-1` so the quotient-rule gradient is
/// correct by construction.
///
/// Dividing by a node whose data is 0 propagates IEEE-754 `inf`/`nan`
/// instead of failing; callers needing strictness check the forward
/// data.
pub fn div(lhs: &Value, rhs: &Value) -> Value {
    mul(lhs, &pow(rhs, -1.0))
}

// --- Operator overloads ---

impl Div<&Value> for &Value {
    type Output = Value;
    fn div(self, rhs: &Value) -> Value {
        div(self, rhs)
    }
}

impl Div<Value> for Value {
    type Output = Value;
    fn div(self, rhs: Value) -> Value {
        div(&self, &rhs)
    }
}

impl Div<&Value> for Value {
    type Output = Value;
    fn div(self, rhs: &Value) -> Value {
        div(&self, rhs)
    }
}

impl Div<Value> for &Value {
    type Output = Value;
    fn div(self, rhs: Value) -> Value {
        div(self, &rhs)
    }
}

impl Div<f64> for &Value {
    type Output = Value;
    fn div(self, rhs: f64) -> Value {
        div(self, &Value::new(rhs))
    }
}

impl Div<f64> for Value {
    type Output = Value;
    fn div(self, rhs: f64) -> Value {
        div(&self, &Value::new(rhs))
    }
}

impl Div<&Value> for f64 {
    type Output = Value;
    fn div(self, rhs: &Value) -> Value {
        div(&Value::new(self), rhs)
    }
}

impl Div<Value> for f64 {
    type Output = Value;
    fn div(self, rhs: Value) -> Value {
        div(&Value::new(self), &rhs)
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::check_grad;
    use approx::assert_relative_eq;

    #[test]
    fn test_div_forward() {
        let a = Value::new(6.0);
        let b = Value::new(4.0);
        assert_eq!((&a / &b).data(), 1.5);
    }

    #[test]
    fn test_div_backward_quotient_rule() {
        let a = Value::new(6.0);
        let b = Value::new(4.0);
        let c = &a / &b;
        c.backward();
        // d(a/b)/da = 1/b, d(a/b)/db = -a/b^2
        assert_relative_eq!(a.grad(), 0.25);
        assert_relative_eq!(b.grad(), -0.375);
    }

    #[test]
    fn test_div_by_zero_propagates_inf() {
        let a = Value::new(1.0);
        let b = Value::new(0.0);
        let c = &a / &b;
        assert!(c.data().is_infinite());
    }

    #[test]
    fn test_div_scalar_overloads() {
        let a = Value::new(8.0);
        assert_eq!((&a / 2.0).data(), 4.0);
        assert_eq!((2.0 / &a).data(), 0.25);
        assert_eq!((a.clone() / 2.0).data(), 4.0);
        assert_eq!((2.0 / a.clone()).data(), 0.25);
    }

    #[test]
    fn test_div_grad_check() {
        let inputs = vec![Value::new(3.0), Value::new(-1.5)];
        let f = |xs: &[Value]| &xs[0] / &xs[1];
        assert!(check_grad(f, &inputs, 1e-6, 1e-5).is_ok());
    }
}
