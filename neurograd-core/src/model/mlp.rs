use crate::error::NeuroGradError;
use crate::nn::layers::{Layer, NeuronOptions};
use crate::nn::module::Module;
use crate::nn::output::Output;
use crate::node::Node;
use log::debug;
use rand::Rng;
use std::fmt;

/// A multi-layer perceptron: layers applied in sequence, each layer's
/// outputs becoming the next layer's inputs.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds one layer per entry of `layer_sizes`, wiring input arities
    /// automatically. Every layer is ReLU except the last, which is linear.
    pub fn new(in_features: usize, layer_sizes: &[usize]) -> Result<Self, NeuroGradError> {
        Self::with_rng(in_features, layer_sizes, &mut rand::thread_rng())
    }

    /// Same as [`Mlp::new`] with an explicit generator.
    pub fn with_rng<R: Rng + ?Sized>(
        in_features: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        if layer_sizes.is_empty() {
            return Err(NeuroGradError::InvalidConfiguration(
                "an MLP needs at least one layer".to_string(),
            ));
        }

        let last = layer_sizes.len() - 1;
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = in_features;
        for (index, &size) in layer_sizes.iter().enumerate() {
            let options = NeuronOptions {
                nonlinear: index != last,
            };
            layers.push(Layer::with_rng(fan_in, size, options, &mut *rng)?);
            fan_in = size;
        }

        let mlp = Mlp { layers };
        debug!(
            "Mlp: built {} layers ({} -> {:?}), {} parameters",
            mlp.layers.len(),
            in_features,
            layer_sizes,
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    /// Chains existing layers. Each layer's output count must equal the next
    /// layer's input arity.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, NeuroGradError> {
        if layers.is_empty() {
            return Err(NeuroGradError::InvalidConfiguration(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        for (index, pair) in layers.windows(2).enumerate() {
            if pair[0].out_features() != pair[1].in_features() {
                return Err(NeuroGradError::InvalidConfiguration(format!(
                    "layer {} produces {} outputs but layer {} takes {} inputs",
                    index,
                    pair[0].out_features(),
                    index + 1,
                    pair[1].in_features()
                )));
            }
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn in_features(&self) -> usize {
        self.layers.first().map_or(0, Layer::in_features)
    }

    pub fn out_features(&self) -> usize {
        self.layers.last().map_or(0, Layer::out_features)
    }
}

impl Module for Mlp {
    type Output = Output;

    fn forward(&self, inputs: &[Node]) -> Result<Output, NeuroGradError> {
        let (first, rest) = self.layers.split_first().ok_or_else(|| {
            NeuroGradError::InvalidConfiguration("an MLP needs at least one layer".to_string())
        })?;
        let mut current_output = first.forward(inputs)?;
        for layer in rest {
            current_output = layer.forward(current_output.as_slice())?;
        }
        Ok(current_output)
    }

    fn parameters(&self) -> Vec<&Node> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn parameters_mut(&mut self) -> Vec<&mut Node> {
        self.layers
            .iter_mut()
            .flat_map(|l| l.parameters_mut())
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Node)> {
        let mut params = Vec::new();
        for (index, layer) in self.layers.iter().enumerate() {
            for (param_name, param) in layer.named_parameters() {
                params.push((format!("layer{}.{}", index, param_name), param));
            }
        }
        params
    }
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layers: Vec<String> = self.layers.iter().map(|l| l.to_string()).collect();
        write!(f, "MLP of [{}]", layers.join(", "))
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
