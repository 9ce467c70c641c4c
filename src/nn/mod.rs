pub mod init;
pub mod layers;
pub mod module;

pub use layers::{Layer, MultiLayerPerceptron, Neuron};
pub use module::Module;
