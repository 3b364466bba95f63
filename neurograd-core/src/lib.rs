//! Scalar reverse-mode automatic differentiation with a small neural-network
//! layer on top.
//!
//! A [`Node`] is a scalar value together with the operation that produced it.
//! Arithmetic on nodes records a computation graph; [`Node::backward`] walks
//! that graph in reverse topological order and accumulates `d(output)/d(node)`
//! into every node that contributed.

pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod node;
mod node_data;
pub mod ops;
pub mod optim;
pub mod utils;

pub use autograd::{check_grad, GradCheckError, NodeId};
pub use error::NeuroGradError;
pub use model::Mlp;
pub use nn::{mse_loss, Layer, Module, Neuron, NeuronOptions, Output};
pub use node::Node;
pub use optim::{Optimizer, Sgd};
// Re-export traits required by public functions/structs
pub use num_traits;
