// src/node/traits.rs

use crate::node::Node;
use num_traits::{One, Zero};
use std::iter::Sum;

// --- Scalar promotion ---
// Every arithmetic entry point that accepts a raw scalar goes through here.

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::new(value)
    }
}

impl From<f32> for Node {
    fn from(value: f32) -> Self {
        Node::new(f64::from(value))
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::new(f64::from(value))
    }
}

// --- num_traits ---

impl Zero for Node {
    /// A fresh leaf holding 0.
    fn zero() -> Self {
        Node::new(0.0)
    }

    fn is_zero(&self) -> bool {
        self.value() == 0.0
    }
}

impl One for Node {
    /// A fresh leaf holding 1.
    fn one() -> Self {
        Node::new(1.0)
    }
}

// --- Iterator sums ---
// Left fold starting from a zero leaf: ((0 + a) + b) + c.

impl Sum for Node {
    fn sum<I: Iterator<Item = Node>>(iter: I) -> Self {
        iter.fold(Node::zero(), |acc, x| &acc + &x)
    }
}

impl<'a> Sum<&'a Node> for Node {
    fn sum<I: Iterator<Item = &'a Node>>(iter: I) -> Self {
        iter.fold(Node::zero(), |acc, x| &acc + x)
    }
}
