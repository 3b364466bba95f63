use crate::node::Node;
use crate::ops::arithmetic::mul::mul_op;
use std::ops::Neg;

/// Negates a node as `a * -1`. The `-1` is a fresh leaf.
pub fn neg_op(a: &Node) -> Node {
    mul_op(a, &Node::from(-1.0))
}

impl Neg for &Node {
    type Output = Node;

    fn neg(self) -> Node {
        neg_op(self)
    }
}

impl Neg for Node {
    type Output = Node;

    fn neg(self) -> Node {
        neg_op(&self)
    }
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
