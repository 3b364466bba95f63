use crate::error::NeuroGradError;
use crate::node::Node;
use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::pow_op;

// --- Forward Operation ---

/// Divides `a` by `b` as `a * b ** -1`.
///
/// A zero-valued divisor is rejected with [`NeuroGradError::DivisionByZero`]
/// before any node is created, so no gradient is touched.
pub fn div_op(a: &Node, b: &Node) -> Result<Node, NeuroGradError> {
    if b.value() == 0.0 {
        return Err(NeuroGradError::DivisionByZero);
    }
    let reciprocal = pow_op(b, -1.0)?;
    Ok(mul_op(a, &reciprocal))
}

impl_binary_op!(Div, div, div_op, Result<crate::node::Node, crate::error::NeuroGradError>);

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
