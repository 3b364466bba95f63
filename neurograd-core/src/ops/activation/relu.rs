use crate::autograd::Op;
use crate::node::Node;

// --- Forward Operation ---

/// Rectified Linear Unit: `max(0, a)`.
pub fn relu_op(a: &Node) -> Node {
    Node::from_op(a.value().max(0.0), Op::Relu(a.clone()))
}

impl Node {
    /// Applies ReLU to this node. See [`relu_op`].
    pub fn relu(&self) -> Node {
        relu_op(self)
    }
}

// --- Backward Operation ---

/// Passes the gradient through only where the input was strictly positive.
/// At exactly 0 the gradient is 0.
pub(crate) fn relu_backward(a: &Node, grad_output: f64) {
    let mask = if a.value() > 0.0 { 1.0 } else { 0.0 };
    a.accumulate_grad(grad_output * mask);
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
