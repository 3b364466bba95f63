//! # Node Operations Module (`ops`)
//!
//! Forward constructors for every differentiable scalar operation, plus the
//! operator-overloading surface on [`Node`](crate::Node).
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operation has a core function (`add_op`,
//!   `mul_op`, ...) that computes the forward value and records the
//!   [`Op`](crate::autograd::Op) the node came from.
//! - **`_backward` Functions:** the primitive operations (add, mul, pow, relu)
//!   each define their local derivative rule next to their forward function.
//!   `Op::backward` dispatches to them. Derived operations (neg, sub, div)
//!   have no rule of their own.
//! - **Operators:** `+ - * /` and unary `-` work on owned or borrowed nodes and
//!   on `f64` on either side. Raw scalars are promoted to fresh leaves via
//!   `Node::from` before the `_op` function runs. `/` returns a `Result`
//!   because division by a zero-valued node is an error.

// Implements one binary operator for every Node/&Node/f64 operand combination.
// Defined before the submodules so they can use it.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:path, $output:ty) => {
        impl std::ops::$trait<&$crate::node::Node> for &$crate::node::Node {
            type Output = $output;
            fn $method(self, rhs: &$crate::node::Node) -> $output {
                $op_fn(self, rhs)
            }
        }

        impl std::ops::$trait<$crate::node::Node> for $crate::node::Node {
            type Output = $output;
            fn $method(self, rhs: $crate::node::Node) -> $output {
                $op_fn(&self, &rhs)
            }
        }

        impl std::ops::$trait<&$crate::node::Node> for $crate::node::Node {
            type Output = $output;
            fn $method(self, rhs: &$crate::node::Node) -> $output {
                $op_fn(&self, rhs)
            }
        }

        impl std::ops::$trait<$crate::node::Node> for &$crate::node::Node {
            type Output = $output;
            fn $method(self, rhs: $crate::node::Node) -> $output {
                $op_fn(self, &rhs)
            }
        }

        impl std::ops::$trait<f64> for &$crate::node::Node {
            type Output = $output;
            fn $method(self, rhs: f64) -> $output {
                $op_fn(self, &$crate::node::Node::from(rhs))
            }
        }

        impl std::ops::$trait<f64> for $crate::node::Node {
            type Output = $output;
            fn $method(self, rhs: f64) -> $output {
                $op_fn(&self, &$crate::node::Node::from(rhs))
            }
        }

        impl std::ops::$trait<&$crate::node::Node> for f64 {
            type Output = $output;
            fn $method(self, rhs: &$crate::node::Node) -> $output {
                $op_fn(&$crate::node::Node::from(self), rhs)
            }
        }

        impl std::ops::$trait<$crate::node::Node> for f64 {
            type Output = $output;
            fn $method(self, rhs: $crate::node::Node) -> $output {
                $op_fn(&$crate::node::Node::from(self), &rhs)
            }
        }
    };
}

// Declare operation submodules
pub mod activation;
pub mod arithmetic;

pub use activation::relu_op;
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
