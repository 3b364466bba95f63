// neurograd-core/src/ops/arithmetic/mul.rs

use crate::autograd::Op;
use crate::node::Node;

// --- Forward Operation ---

/// Multiplies two nodes.
pub fn mul_op(a: &Node, b: &Node) -> Node {
    Node::from_op(a.value() * b.value(), Op::Mul(a.clone(), b.clone()))
}

impl_binary_op!(Mul, mul, mul_op, Node);

// --- Backward Operation ---

/// For z = a * b:
/// grad(a) += grad_output * b
/// grad(b) += grad_output * a
pub(crate) fn mul_backward(a: &Node, b: &Node, grad_output: f64) {
    // Both reads happen before either write, so `a * a` gets 2a.
    let (a_value, b_value) = (a.value(), b.value());
    a.accumulate_grad(grad_output * b_value);
    b.accumulate_grad(grad_output * a_value);
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
