// src/nn/layers/neuron.rs

use crate::error::PicogradError;
use crate::nn::init;
use crate::nn::module::Module;
use crate::value::Value;

/// A single neuron: a weighted sum of its inputs plus a bias, with an
/// optional ReLU on top.
///
/// Weights are initialized from `U(-1, 1)`, the bias to 0.0.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    nonlinear: bool,
}

impl Neuron {
    /// Creates a neuron accepting `n_inputs` inputs.
    ///
    /// # Arguments
    /// * `n_inputs` - Number of inputs the neuron accepts.
    /// * `nonlinear` - Whether to apply ReLU to the activation.
    pub fn new(n_inputs: usize, nonlinear: bool) -> Self {
        let weights = (0..n_inputs)
            .map(|_| Value::new(init::uniform(-1.0, 1.0)))
            .collect();
        Neuron {
            weights,
            bias: Value::new(0.0),
            nonlinear,
        }
    }

    /// Number of inputs this neuron accepts.
    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    /// Computes the activation `relu?(sum(w_i * x_i) + b)`.
    ///
    /// # Errors
    /// [`PicogradError::ShapeMismatch`] if the input length does not
    /// match the weight count; that is a caller programming error, not a
    /// recoverable condition.
    pub fn forward(&self, inputs: &[Value]) -> Result<Value, PicogradError> {
        if inputs.len() != self.weights.len() {
            return Err(PicogradError::ShapeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron::forward".to_string(),
            });
        }

        let mut activation = self.bias.clone();
        for (weight, input) in self.weights.iter().zip(inputs) {
            activation = &activation + &(weight * input);
        }
        if self.nonlinear {
            activation = activation.relu();
        }
        Ok(activation)
    }
}

impl Module for Neuron {
    /// Weights in input order, then the bias: `n_inputs + 1` handles.
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neuron_parameter_count() {
        let neuron = Neuron::new(5, true);
        assert_eq!(neuron.parameters().len(), 6);
        assert_eq!(neuron.n_inputs(), 5);
    }

    #[test]
    fn test_neuron_weights_in_range_and_bias_zero() {
        let neuron = Neuron::new(8, false);
        let params = neuron.parameters();
        for weight in &params[..8] {
            assert!((-1.0..=1.0).contains(&weight.data()));
        }
        assert_eq!(params[8].data(), 0.0);
    }

    #[test]
    fn test_neuron_forward_shape_mismatch() {
        let neuron = Neuron::new(3, true);
        let inputs = vec![Value::new(1.0); 2];
        let err = neuron.forward(&inputs).unwrap_err();
        assert_eq!(
            err,
            PicogradError::ShapeMismatch {
                expected: 3,
                actual: 2,
                operation: "Neuron::forward".to_string(),
            }
        );
    }

    #[test]
    fn test_neuron_forward_is_weighted_sum_plus_bias() {
        let neuron = Neuron::new(2, false);
        let params = neuron.parameters();
        params[0].set_data(0.5);
        params[1].set_data(-2.0);
        params[2].set_data(1.0);

        let inputs = vec![Value::new(4.0), Value::new(3.0)];
        let out = neuron.forward(&inputs).unwrap();
        // 0.5*4 + (-2)*3 + 1
        assert_eq!(out.data(), -3.0);
    }

    #[test]
    fn test_neuron_all_ones_input_gradients() {
        let neuron = Neuron::new(5, true);
        let params = neuron.parameters();
        // Force a positive pre-activation so ReLU passes gradient.
        for param in &params {
            param.set_data(0.5);
        }
        let inputs = vec![Value::new(1.0); 5];
        let out = neuron.forward(&inputs).unwrap();
        assert!(out.data() > 0.0);
        out.backward();

        // d(out)/d(w_i) = x_i = 1.0, d(out)/d(b) = 1.0
        for param in &params {
            assert_eq!(param.grad(), 1.0);
        }

        neuron.zero_grad();
        for param in &params {
            assert_eq!(param.grad(), 0.0);
        }
    }

    #[test]
    fn test_linear_neuron_skips_relu() {
        let neuron = Neuron::new(1, false);
        let params = neuron.parameters();
        params[0].set_data(1.0);
        params[1].set_data(0.0);

        let out = neuron.forward(&[Value::new(-4.0)]).unwrap();
        assert_eq!(out.data(), -4.0);
    }
}
