use crate::value::Value;

/// Capability trait for anything that owns trainable parameters.
///
/// Parameters are leaf `Value`s (weights and biases) whose gradients are
/// meaningful for optimization. Containers compose statically: a layer's
/// parameters are the concatenation of its neurons', a network's the
/// concatenation of its layers'. Forward passes are inherent methods on
/// the concrete types, since their signatures differ (a neuron produces
/// one activation, a layer a vector of them).
pub trait Module: std::fmt::Debug {
    /// Returns handles to every learnable parameter of the module,
    /// including those of sub-modules. The handles alias the owned
    /// nodes, so mutating them through the returned vector updates the
    /// module.
    fn parameters(&self) -> Vec<Value>;

    /// Zeroes the gradient of every owned parameter.
    ///
    /// Must be called between independent backward passes; gradients
    /// otherwise accumulate.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}
