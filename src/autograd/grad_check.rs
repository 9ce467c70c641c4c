// src/autograd/grad_check.rs

use crate::error::PicogradError;
use crate::value::Value;
use approx::relative_eq;

/// Checks analytic gradients against central finite differences.
///
/// `f` rebuilds the expression from the given leaf inputs on every call;
/// the analytic gradients come from one `backward()` pass, the numeric
/// ones from `(f(x + eps) - f(x - eps)) / (2 * eps)` per input.
///
/// Returns the first failing input as a [`PicogradError::GradCheckFailed`]
/// naming both values. `tol` is used as both absolute and relative
/// tolerance for the comparison.
pub fn check_grad<F>(f: F, inputs: &[Value], eps: f64, tol: f64) -> Result<(), PicogradError>
where
    F: Fn(&[Value]) -> Value,
{
    for input in inputs {
        input.zero_grad();
    }
    let output = f(inputs);
    output.backward();
    let analytic: Vec<f64> = inputs.iter().map(|v| v.grad()).collect();

    for (index, input) in inputs.iter().enumerate() {
        let original = input.data();

        input.set_data(original + eps);
        let plus = f(inputs).data();
        input.set_data(original - eps);
        let minus = f(inputs).data();
        input.set_data(original);

        let numeric = (plus - minus) / (2.0 * eps);
        log::trace!(
            "[check_grad] input {}: analytic={} numeric={}",
            index,
            analytic[index],
            numeric
        );
        if !relative_eq!(
            analytic[index],
            numeric,
            epsilon = tol,
            max_relative = tol
        ) {
            return Err(PicogradError::GradCheckFailed {
                index,
                analytic: analytic[index],
                numeric,
            });
        }
    }
    Ok(())
}
