mod layer;
mod mlp;
mod neuron;

pub use layer::Layer;
pub use mlp::MultiLayerPerceptron;
pub use neuron::Neuron;
