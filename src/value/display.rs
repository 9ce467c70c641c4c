// src/value/display.rs

use crate::value::Value;
use std::fmt;

/// Diagnostic string form, e.g. `Value(data=3, grad=0.5)`, using the
/// default floating-point formatting of both fields.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(f, "Value(data={}, grad={})", guard.data, guard.grad)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        f.debug_struct("Value")
            .field("data", &guard.data)
            .field("grad", &guard.grad)
            .field("op", &guard.op)
            .field("parents", &guard.parents.len())
            .finish()
    }
}
