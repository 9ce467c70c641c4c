// src/optim/sgd.rs

use crate::value::Value;

/// Plain stochastic gradient descent over a flat parameter list.
///
/// The handles alias the owning module's parameter nodes, so `step()`
/// updates the module in place. No momentum or weight decay; the engine
/// is scalar-valued and the training loops it serves are tiny.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Value>,
    lr: f64,
}

impl Sgd {
    /// Creates an optimizer over the given parameters.
    ///
    /// # Arguments
    /// * `params` - Parameter handles, typically `module.parameters()`.
    /// * `lr` - The learning rate.
    pub fn new(params: Vec<Value>, lr: f64) -> Self {
        Sgd { params, lr }
    }

    /// Applies one update: `p.data -= lr * p.grad` for every parameter.
    pub fn step(&self) {
        log::debug!("SGD step over {} parameters, lr={}", self.params.len(), self.lr);
        for param in &self.params {
            let update = param.data() - self.lr * param.grad();
            param.set_data(update);
        }
    }

    /// Zeroes every parameter's gradient, for use between backward
    /// passes.
    pub fn zero_grad(&self) {
        for param in &self.params {
            param.zero_grad();
        }
    }
}
