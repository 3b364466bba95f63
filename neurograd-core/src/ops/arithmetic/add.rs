// neurograd-core/src/ops/arithmetic/add.rs

use crate::autograd::Op;
use crate::node::Node;

// --- Forward Operation ---

/// Adds two nodes. The result records both operands as producers.
pub fn add_op(a: &Node, b: &Node) -> Node {
    Node::from_op(a.value() + b.value(), Op::Add(a.clone(), b.clone()))
}

impl_binary_op!(Add, add, add_op, Node);

// --- Backward Operation ---

/// d(a + b)/da = d(a + b)/db = 1.
pub(crate) fn add_backward(a: &Node, b: &Node, grad_output: f64) {
    a.accumulate_grad(grad_output);
    b.accumulate_grad(grad_output);
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
