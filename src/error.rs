use thiserror::Error;

/// Custom error type for the picograd crate.
///
/// The engine itself is total over the reals (division by zero and
/// invalid powers propagate IEEE-754 `inf`/`nan` instead of failing);
/// only the composition layer and gradient checking are fallible.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum PicogradError {
    #[error("Shape mismatch: expected {expected} inputs, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Cannot build a network with an empty list of layer sizes")]
    EmptyNetwork,

    #[error("Gradient check failed for input {index}: analytic {analytic}, numeric {numeric}")]
    GradCheckFailed {
        index: usize,
        analytic: f64,
        numeric: f64,
    },
}
