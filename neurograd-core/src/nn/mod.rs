// src/nn/mod.rs
// Building blocks for feed-forward networks: the Module trait, neurons,
// layers, weight initialization and losses.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module
pub mod output;

// Re-export common items
pub use layers::{Layer, Neuron, NeuronOptions};
pub use losses::{mse_loss, MSELoss, Reduction};
pub use module::Module;
pub use output::Output;
