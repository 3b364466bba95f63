use crate::node::Node;
use crate::ops::arithmetic::add::add_op;
use crate::ops::arithmetic::neg::neg_op;

/// Subtracts `b` from `a` as `a + (-b)`.
pub fn sub_op(a: &Node, b: &Node) -> Node {
    add_op(a, &neg_op(b))
}

impl_binary_op!(Sub, sub, sub_op, Node);

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
