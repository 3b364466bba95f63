// neurograd-core/src/ops/arithmetic/pow.rs

use crate::autograd::Op;
use crate::error::NeuroGradError;
use crate::node::Node;
use num_traits::Pow;

// --- Forward Operation ---

/// Raises a node to a plain scalar exponent.
///
/// Fails before allocating anything when the result is not a finite real:
/// - `0 ** p` with `p < 0` is [`NeuroGradError::DivisionByZero`];
/// - `0 ** p` with `0 < p < 1` is a [`NeuroGradError::DomainError`], since
///   its derivative `p * 0 ** (p - 1)` is unbounded;
/// - a negative base with a non-integer exponent is a
///   [`NeuroGradError::DomainError`].
pub fn pow_op(base: &Node, exponent: f64) -> Result<Node, NeuroGradError> {
    let x = base.value();
    if x == 0.0 && exponent < 0.0 {
        return Err(NeuroGradError::DivisionByZero);
    }
    if x == 0.0 && exponent > 0.0 && exponent < 1.0 {
        return Err(NeuroGradError::DomainError {
            operation: "pow".to_string(),
            value: x,
            exponent,
        });
    }
    let value = x.powf(exponent);
    if (x < 0.0 && exponent.fract() != 0.0) || (value.is_nan() && !x.is_nan()) {
        return Err(NeuroGradError::DomainError {
            operation: "pow".to_string(),
            value: x,
            exponent,
        });
    }
    Ok(Node::from_op(value, Op::Pow(base.clone(), exponent)))
}

// --- Backward Operation ---

/// d(a ** p)/da = p * a ** (p - 1).
///
/// `a ** 0` is constant, so it contributes nothing (even at `a == 0`).
pub(crate) fn pow_backward(base: &Node, exponent: f64, grad_output: f64) {
    if exponent == 0.0 {
        return;
    }
    base.accumulate_grad(grad_output * exponent * base.value().powf(exponent - 1.0));
}

// --- Node Methods (call the fallible function) ---

impl Node {
    /// Returns `self ** exponent`. See [`pow_op`].
    pub fn powf(&self, exponent: f64) -> Result<Node, NeuroGradError> {
        pow_op(self, exponent)
    }
}

impl Pow<f64> for &Node {
    type Output = Result<Node, NeuroGradError>;

    fn pow(self, exponent: f64) -> Self::Output {
        pow_op(self, exponent)
    }
}

impl Pow<f64> for Node {
    type Output = Result<Node, NeuroGradError>;

    fn pow(self, exponent: f64) -> Self::Output {
        pow_op(&self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
