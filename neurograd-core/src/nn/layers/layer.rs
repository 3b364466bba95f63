use crate::error::NeuroGradError;
use crate::nn::layers::neuron::{Neuron, NeuronOptions};
use crate::nn::module::Module;
use crate::nn::output::Output;
use crate::node::Node;
use rand::Rng;
use std::fmt;

/// A parallel group of neurons that all read the same inputs.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates a layer of `out_features` randomly initialized neurons, each
    /// taking `in_features` inputs.
    pub fn new(
        in_features: usize,
        out_features: usize,
        options: NeuronOptions,
    ) -> Result<Self, NeuroGradError> {
        Self::with_rng(in_features, out_features, options, &mut rand::thread_rng())
    }

    /// Same as [`Layer::new`] with an explicit generator.
    pub fn with_rng<R: Rng + ?Sized>(
        in_features: usize,
        out_features: usize,
        options: NeuronOptions,
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        if out_features == 0 {
            return Err(NeuroGradError::InvalidConfiguration(
                "a layer needs at least one neuron".to_string(),
            ));
        }
        let neurons = (0..out_features)
            .map(|_| Neuron::with_rng(in_features, options, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons })
    }

    /// Builds a layer from existing neurons, which must all share one input arity.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, NeuroGradError> {
        let first = neurons.first().ok_or_else(|| {
            NeuroGradError::InvalidConfiguration("a layer needs at least one neuron".to_string())
        })?;
        let in_features = first.in_features();
        if let Some((index, odd)) = neurons
            .iter()
            .enumerate()
            .find(|(_, n)| n.in_features() != in_features)
        {
            return Err(NeuroGradError::InvalidConfiguration(format!(
                "neuron {} takes {} inputs, expected {}",
                index,
                odd.in_features(),
                in_features
            )));
        }
        Ok(Layer { neurons })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Number of inputs every neuron expects.
    pub fn in_features(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::in_features)
    }

    /// Number of outputs (one per neuron).
    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    type Output = Output;

    /// Applies every neuron to the same inputs. A one-neuron layer returns
    /// `Output::Single`, otherwise `Output::Multiple` in neuron order.
    fn forward(&self, inputs: &[Node]) -> Result<Output, NeuroGradError> {
        if let [neuron] = self.neurons.as_slice() {
            return Ok(Output::Single(neuron.forward(inputs)?));
        }
        let outputs = self
            .neurons
            .iter()
            .map(|n| n.forward(inputs))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Output::Multiple(outputs))
    }

    fn parameters(&self) -> Vec<&Node> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn parameters_mut(&mut self) -> Vec<&mut Node> {
        self.neurons
            .iter_mut()
            .flat_map(|n| n.parameters_mut())
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Node)> {
        let mut params = Vec::new();
        for (index, neuron) in self.neurons.iter().enumerate() {
            for (param_name, param) in neuron.named_parameters() {
                params.push((format!("neuron{}.{}", index, param_name), param));
            }
        }
        params
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neurons: Vec<String> = self.neurons.iter().map(|n| n.to_string()).collect();
        write!(f, "Layer of [{}]", neurons.join(", "))
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
