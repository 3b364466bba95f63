// neurograd-core/src/nn/losses/mse.rs

use crate::error::NeuroGradError;
use crate::node::Node;
use std::str::FromStr;

/// Specifies the reduction to apply to the squared errors:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = NeuroGradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(NeuroGradError::InvalidConfiguration(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Computes the Mean Squared Error (MSE) loss between predictions and targets.
///
/// The loss is an ordinary node, so `backward()` on it reaches every
/// parameter that contributed to the predictions.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds `Σ (prediction_i - target_i)^2`, divided by the count for
    /// [`Reduction::Mean`].
    ///
    /// # Errors
    /// * `ArityMismatch` if the two slices differ in length.
    /// * `InvalidConfiguration` if they are empty.
    pub fn forward(&self, predictions: &[Node], targets: &[f64]) -> Result<Node, NeuroGradError> {
        if predictions.len() != targets.len() {
            return Err(NeuroGradError::ArityMismatch {
                expected: predictions.len(),
                actual: targets.len(),
            });
        }
        if predictions.is_empty() {
            return Err(NeuroGradError::InvalidConfiguration(
                "MSE loss needs at least one prediction".to_string(),
            ));
        }

        let total: Node = predictions
            .iter()
            .zip(targets)
            .map(|(prediction, &target)| {
                let diff = prediction - target;
                &diff * &diff
            })
            .sum();

        match self.reduction {
            Reduction::Sum => Ok(total),
            Reduction::Mean => total / predictions.len() as f64,
        }
    }
}

/// Mean squared error with the default (mean) reduction.
pub fn mse_loss(predictions: &[Node], targets: &[f64]) -> Result<Node, NeuroGradError> {
    MSELoss::default().forward(predictions, targets)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
