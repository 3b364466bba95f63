use crate::error::NeuroGradError;
use crate::nn::init::{uniform_nodes, WEIGHT_INIT_HIGH, WEIGHT_INIT_LOW};
use crate::nn::module::Module;
use crate::node::Node;
use rand::Rng;
use std::fmt;

/// Construction options shared by every neuron of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeuronOptions {
    /// Apply ReLU to the weighted sum. `true` by default.
    pub nonlinear: bool,
}

impl Default for NeuronOptions {
    fn default() -> Self {
        NeuronOptions { nonlinear: true }
    }
}

impl NeuronOptions {
    /// A neuron whose output is the raw weighted sum.
    pub fn linear() -> Self {
        NeuronOptions { nonlinear: false }
    }

    /// A neuron followed by ReLU.
    pub fn relu() -> Self {
        NeuronOptions { nonlinear: true }
    }
}

/// A single unit computing `bias + Σ weight_i * input_i`, optionally through ReLU.
///
/// Weights and bias are leaf nodes owned by the neuron.
#[derive(Debug)]
pub struct Neuron {
    pub(crate) weights: Vec<Node>,
    pub(crate) bias: Node,
    nonlinear: bool,
}

impl Neuron {
    /// Creates a neuron with `in_features` weights drawn uniformly from
    /// `[-1, 1]` using the thread-local generator, and a zero bias.
    pub fn new(in_features: usize, options: NeuronOptions) -> Result<Self, NeuroGradError> {
        Self::with_rng(in_features, options, &mut rand::thread_rng())
    }

    /// Same as [`Neuron::new`] with an explicit generator.
    pub fn with_rng<R: Rng + ?Sized>(
        in_features: usize,
        options: NeuronOptions,
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        let weights = uniform_nodes(in_features, WEIGHT_INIT_LOW, WEIGHT_INIT_HIGH, rng)?;
        Ok(Neuron {
            weights,
            bias: Node::new(0.0),
            nonlinear: options.nonlinear,
        })
    }

    /// Creates a neuron from explicit weight and bias values.
    pub fn from_values(weights: &[f64], bias: f64, options: NeuronOptions) -> Self {
        Neuron {
            weights: weights.iter().map(|&w| Node::new(w)).collect(),
            bias: Node::new(bias),
            nonlinear: options.nonlinear,
        }
    }

    pub fn weights(&self) -> &[Node] {
        &self.weights
    }

    pub fn bias(&self) -> &Node {
        &self.bias
    }

    pub fn is_nonlinear(&self) -> bool {
        self.nonlinear
    }

    /// Number of inputs this neuron expects.
    pub fn in_features(&self) -> usize {
        self.weights.len()
    }
}

impl Module for Neuron {
    type Output = Node;

    /// Computes `((bias + w0*x0) + w1*x1) + ...`, then ReLU if nonlinear.
    ///
    /// The input count must equal the weight count exactly; there is no
    /// truncation to the shorter side.
    fn forward(&self, inputs: &[Node]) -> Result<Node, NeuroGradError> {
        if inputs.len() != self.weights.len() {
            return Err(NeuroGradError::ArityMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }

        let activation = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias.clone(), |acc, (w, x)| &acc + &(w * x));

        if self.nonlinear {
            Ok(activation.relu())
        } else {
            Ok(activation)
        }
    }

    fn parameters(&self) -> Vec<&Node> {
        let mut params: Vec<&Node> = self.weights.iter().collect();
        params.push(&self.bias);
        params
    }

    fn parameters_mut(&mut self) -> Vec<&mut Node> {
        let mut params: Vec<&mut Node> = self.weights.iter_mut().collect();
        params.push(&mut self.bias);
        params
    }

    fn named_parameters(&self) -> Vec<(String, &Node)> {
        let mut params: Vec<(String, &Node)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("weight{}", i), w))
            .collect();
        params.push(("bias".to_string(), &self.bias));
        params
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.nonlinear { "ReLU" } else { "Linear" };
        write!(f, "{} Neuron({})", kind, self.weights.len())
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
