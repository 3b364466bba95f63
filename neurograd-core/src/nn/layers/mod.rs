// src/nn/layers/mod.rs
// Single neurons and parallel groups of them.

pub mod layer;
pub mod neuron;

// Re-export key layer structs
pub use layer::Layer;
pub use neuron::{Neuron, NeuronOptions};
