use crate::error::NeuroGradError;
use crate::node::Node;
use std::fmt::Debug;

/// The base trait for every composable parameterized function (neurons,
/// layers, whole networks).
///
/// A module owns its trainable leaves. They persist across forward/backward
/// cycles; only their gradients change, and [`Module::zero_grad`] resets them
/// between steps.
pub trait Module: Debug {
    /// What one forward pass returns: a single node or a group of them.
    type Output;

    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `inputs`: The ordered input nodes. Their count must match the
    ///   module's input arity.
    ///
    /// # Returns
    /// The output of the module, or a `NeuroGradError` if the inputs do not
    /// fit (e.g. [`NeuroGradError::ArityMismatch`]).
    fn forward(&self, inputs: &[Node]) -> Result<Self::Output, NeuroGradError>;

    /// Returns every trainable leaf owned by the module, including those of
    /// sub-modules, in a stable order.
    fn parameters(&self) -> Vec<&Node>;

    /// Mutable handles to the same parameters, in the same order as
    /// [`Module::parameters`]. Optimizers replace handles through this.
    fn parameters_mut(&mut self) -> Vec<&mut Node>;

    /// Returns the parameters along with hierarchical names
    /// (e.g. "layer0.neuron1.weight2", "layer0.neuron1.bias").
    fn named_parameters(&self) -> Vec<(String, &Node)>;

    /// Sets the gradient of every parameter to 0. Values are unchanged.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    /// Total number of trainable scalars.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
