// src/nn/layers/mlp.rs

use crate::error::PicogradError;
use crate::nn::layers::Layer;
use crate::nn::module::Module;
use crate::value::Value;

/// A chain of layers with ReLU applied to every layer but the last.
#[derive(Debug)]
pub struct MultiLayerPerceptron {
    layers: Vec<Layer>,
}

impl MultiLayerPerceptron {
    /// Builds a network taking `n_inputs` inputs through layers of the
    /// given sizes; the last size is the output width.
    ///
    /// # Errors
    /// [`PicogradError::EmptyNetwork`] if `layer_sizes` is empty.
    pub fn new(n_inputs: usize, layer_sizes: &[usize]) -> Result<Self, PicogradError> {
        if layer_sizes.is_empty() {
            return Err(PicogradError::EmptyNetwork);
        }

        let sizes: Vec<usize> = std::iter::once(n_inputs)
            .chain(layer_sizes.iter().copied())
            .collect();
        let last = layer_sizes.len() - 1;
        let layers = (0..layer_sizes.len())
            .map(|i| Layer::new(sizes[i], sizes[i + 1], i != last))
            .collect();
        Ok(MultiLayerPerceptron { layers })
    }

    /// Threads the input vector through every layer in order.
    pub fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, PicogradError> {
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }
}

impl Module for MultiLayerPerceptron {
    /// Concatenation of the child layers' parameters, in layer order.
    fn parameters(&self) -> Vec<Value> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mlp_parameter_count() {
        // 3 -> 4 -> 4 -> 1: 4*(3+1) + 4*(4+1) + 1*(4+1)
        let mlp = MultiLayerPerceptron::new(3, &[4, 4, 1]).unwrap();
        assert_eq!(mlp.parameters().len(), 41);
    }

    #[test]
    fn test_mlp_forward_output_width() {
        let mlp = MultiLayerPerceptron::new(3, &[4, 4, 1]).unwrap();
        let inputs = vec![Value::new(1.0), Value::new(2.0), Value::new(3.0)];
        let outputs = mlp.forward(&inputs).unwrap();
        assert_eq!(outputs.len(), 1);
    }

    #[test]
    fn test_mlp_rejects_empty_layer_list() {
        let err = MultiLayerPerceptron::new(3, &[]).unwrap_err();
        assert_eq!(err, PicogradError::EmptyNetwork);
    }

    #[test]
    fn test_mlp_forward_shape_mismatch() {
        let mlp = MultiLayerPerceptron::new(3, &[2]).unwrap();
        let inputs = vec![Value::new(1.0); 5];
        assert!(matches!(
            mlp.forward(&inputs),
            Err(PicogradError::ShapeMismatch {
                expected: 3,
                actual: 5,
                ..
            })
        ));
    }

    #[test]
    fn test_mlp_last_layer_is_linear() {
        // A single-layer network applies no ReLU, so a negative output
        // is reachable.
        let mlp = MultiLayerPerceptron::new(1, &[1]).unwrap();
        let params = mlp.parameters();
        params[0].set_data(1.0);
        params[1].set_data(0.0);

        let out = mlp.forward(&[Value::new(-3.0)]).unwrap();
        assert_eq!(out[0].data(), -3.0);
    }

    #[test]
    fn test_mlp_backward_reaches_every_parameter_layer() {
        let mlp = MultiLayerPerceptron::new(2, &[3, 1]).unwrap();
        // Positive weights everywhere keep every ReLU open.
        for param in mlp.parameters() {
            param.set_data(0.5);
        }
        let inputs = vec![Value::new(1.0), Value::new(1.0)];
        let out = mlp.forward(&inputs).unwrap();
        out[0].backward();

        assert!(mlp.parameters().iter().all(|p| p.grad() != 0.0));

        mlp.zero_grad();
        assert!(mlp.parameters().iter().all(|p| p.grad() == 0.0));
    }
}
