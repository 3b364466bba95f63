use crate::autograd::NodeId;
use crate::error::NeuroGradError;
use crate::nn::module::Module;
use crate::node::Node;
use crate::optim::optimizer_trait::Optimizer;
use log::debug;

/// Stochastic gradient descent with optional momentum and weight decay.
///
/// For each parameter `p` with gradient `g`:
///
/// ```text
/// d = g + weight_decay * p
/// v = momentum * v + d        (v starts at 0)
/// p <- p - lr * v
/// ```
///
/// With `momentum == 0` this is plain `p - lr * d`.
///
/// Node values are immutable, so a step does not update parameters in place:
/// each parameter handle held by the module is replaced by a new leaf with
/// the updated value and a zero gradient. Handles or graphs kept from before
/// the step still see the old values; re-read parameters from the module
/// after stepping.
///
/// Momentum buffers belong to the exact parameters the previous step
/// produced. Stepping a module whose parameters are not those leaves (another
/// module, or one whose handles were replaced elsewhere) starts from zero
/// velocity.
#[derive(Debug, Clone)]
pub struct Sgd {
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    // One velocity per parameter, in `Module::parameters` order.
    velocity: Vec<f64>,
    // Ids of the leaves the last step produced, matching `velocity`.
    tracked: Vec<NodeId>,
}

impl Sgd {
    /// Creates a plain SGD optimizer. `lr` must be finite and positive.
    pub fn new(lr: f64) -> Result<Self, NeuroGradError> {
        if !lr.is_finite() || lr <= 0.0 {
            return Err(NeuroGradError::InvalidConfiguration(format!(
                "learning rate must be finite and positive, got {}",
                lr
            )));
        }
        Ok(Sgd {
            lr,
            momentum: 0.0,
            weight_decay: 0.0,
            velocity: Vec::new(),
            tracked: Vec::new(),
        })
    }

    /// Sets the momentum factor, in `[0, 1)`.
    pub fn with_momentum(mut self, momentum: f64) -> Result<Self, NeuroGradError> {
        if !(0.0..1.0).contains(&momentum) {
            return Err(NeuroGradError::InvalidConfiguration(format!(
                "momentum must be in [0, 1), got {}",
                momentum
            )));
        }
        self.momentum = momentum;
        Ok(self)
    }

    /// Sets the L2 penalty factor, which must be finite and non-negative.
    pub fn with_weight_decay(mut self, weight_decay: f64) -> Result<Self, NeuroGradError> {
        if !weight_decay.is_finite() || weight_decay < 0.0 {
            return Err(NeuroGradError::InvalidConfiguration(format!(
                "weight decay must be finite and non-negative, got {}",
                weight_decay
            )));
        }
        self.weight_decay = weight_decay;
        Ok(self)
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    /// Changes the learning rate between steps.
    pub fn set_lr(&mut self, lr: f64) -> Result<(), NeuroGradError> {
        if !lr.is_finite() || lr <= 0.0 {
            return Err(NeuroGradError::InvalidConfiguration(format!(
                "learning rate must be finite and positive, got {}",
                lr
            )));
        }
        self.lr = lr;
        Ok(())
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn weight_decay(&self) -> f64 {
        self.weight_decay
    }
}

impl Optimizer for Sgd {
    fn step<M: Module>(&mut self, module: &mut M) -> Result<(), NeuroGradError> {
        let mut params = module.parameters_mut();

        let mut directions = Vec::with_capacity(params.len());
        for (index, param) in params.iter().enumerate() {
            let grad = param.grad();
            if !grad.is_finite() {
                return Err(NeuroGradError::NonFiniteGradient { index });
            }
            directions.push(grad + self.weight_decay * param.value());
        }

        let same_params = self.tracked.len() == params.len()
            && self.tracked.iter().zip(&params).all(|(id, p)| *id == p.id());
        if !same_params {
            if !self.tracked.is_empty() {
                debug!("Sgd: parameters changed since last step, resetting momentum buffers");
            }
            self.velocity = vec![0.0; params.len()];
        }

        for ((param, direction), velocity) in params
            .iter_mut()
            .zip(directions)
            .zip(self.velocity.iter_mut())
        {
            *velocity = self.momentum * *velocity + direction;
            **param = Node::new(param.value() - self.lr * *velocity);
        }
        self.tracked = params.iter().map(|p| p.id()).collect();

        debug!(
            "Sgd: updated {} parameters (lr={}, momentum={}, weight_decay={})",
            params.len(),
            self.lr,
            self.momentum,
            self.weight_decay
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
