use crate::error::NeuroGradError;
use crate::node::Node;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(NeuroGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Epsilon must be finite and positive, got {0}")]
    InvalidEpsilon(f64),
}

impl From<NeuroGradError> for GradCheckError {
    fn from(err: NeuroGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` is called once on fresh leaves built from `inputs` and
/// differentiated with `backward`, then twice more per input with that input
/// shifted by `±epsilon`. Node values are immutable, so every evaluation gets
/// its own leaves.
///
/// Gradients match when they are within `tolerance` absolutely or relatively.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Node]) -> Result<Node, NeuroGradError>,
{
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    // --- 1. Analytical gradients ---
    let leaves: Vec<Node> = inputs.iter().map(|&v| Node::new(v)).collect();
    let output = func(&leaves)?;
    output.backward();

    // --- 2. Compare against central differences ---
    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let loss_plus = evaluate_shifted(&func, inputs, input_index, epsilon)?;
        let loss_minus = evaluate_shifted(&func, inputs, input_index, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
        debug!(
            "check_grad: input {} ok (analytical={}, numerical={})",
            input_index, analytical_grad, numerical_grad
        );
    }
    Ok(())
}

fn evaluate_shifted<F>(
    func: &F,
    inputs: &[f64],
    index: usize,
    delta: f64,
) -> Result<f64, GradCheckError>
where
    F: Fn(&[Node]) -> Result<Node, NeuroGradError>,
{
    let shifted: Vec<Node> = inputs
        .iter()
        .enumerate()
        .map(|(i, &v)| Node::new(if i == index { v + delta } else { v }))
        .collect();
    Ok(func(&shifted)?.value())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
