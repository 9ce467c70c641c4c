// Core graph modules
pub mod autograd;
pub mod ops;
pub mod value;
pub mod value_data;

// Composition layer on top of the engine
pub mod nn;
pub mod optim;

// Re-export the handle type so it is reachable as `picograd::Value`
pub use value::Value;

pub mod error;
pub use error::PicogradError;
