// src/nn/layers/layer.rs

use crate::error::PicogradError;
use crate::nn::layers::Neuron;
use crate::nn::module::Module;
use crate::value::Value;

/// A set of neurons sharing the same input vector.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates a layer of `n_outputs` randomly initialized neurons, each
    /// accepting `n_inputs` inputs.
    pub fn new(n_inputs: usize, n_outputs: usize, nonlinear: bool) -> Self {
        let neurons = (0..n_outputs)
            .map(|_| Neuron::new(n_inputs, nonlinear))
            .collect();
        Layer { neurons }
    }

    /// Number of activations this layer produces.
    pub fn n_outputs(&self) -> usize {
        self.neurons.len()
    }

    /// Feeds the same input vector through every neuron.
    pub fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, PicogradError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(inputs))
            .collect()
    }
}

impl Module for Layer {
    fn parameters(&self) -> Vec<Value> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }
}
