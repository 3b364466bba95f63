use crate::error::NeuroGradError;
use crate::nn::module::Module;

/// Common interface for optimizers.
pub trait Optimizer {
    /// Performs a single optimization step over every parameter of `module`,
    /// using the gradients accumulated by the last backward pass.
    ///
    /// Parameters are updated by replacing the module's handles with fresh
    /// leaves, not by mutating the existing nodes. Previously obtained
    /// handles keep their old values.
    ///
    /// On error no parameter has been replaced.
    fn step<M: Module>(&mut self, module: &mut M) -> Result<(), NeuroGradError>;

    /// Clears the gradients of all parameters of `module`.
    ///
    /// Parameters replaced by [`Optimizer::step`] already start at zero, so
    /// this only matters when gradients were accumulated without a step.
    fn zero_grad<M: Module>(&self, module: &M) {
        module.zero_grad();
    }
}
