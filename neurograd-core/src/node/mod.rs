// src/node/mod.rs

use crate::autograd::{NodeId, Op};
use crate::node_data::NodeData;
use std::rc::Rc;

mod autograd_methods;
mod debug;
mod traits;

/// A scalar vertex in the computation graph.
///
/// `Node` uses `Rc<NodeData>` internally:
/// 1.  **Shared Ownership:** a node can feed any number of consumers, and
///     every consumer keeps its producers alive for as long as it exists.
///     Cloning a `Node` clones the handle, never the vertex.
/// 2.  **Interior Mutability:** only the gradient is mutable, through a `Cell`.
///
/// `Node` is neither `Send` nor `Sync`. `backward` mutates gradients in place,
/// so two backward passes over overlapping graphs must never interleave.
#[derive(Clone)]
pub struct Node {
    pub(crate) data: Rc<NodeData>,
}

impl Node {
    /// Creates a leaf node (no producers) holding `value`, with zero gradient.
    pub fn new(value: f64) -> Self {
        Self::from_op(value, Op::Leaf)
    }

    /// Creates a node produced by `op`. Used by the forward functions in `ops`.
    pub(crate) fn from_op(value: f64, op: Op) -> Self {
        Node {
            data: Rc::new(NodeData::new(value, op)),
        }
    }

    /// The forward value.
    pub fn value(&self) -> f64 {
        self.data.value
    }

    /// The graph identity of this node.
    pub fn id(&self) -> NodeId {
        self.data.id
    }

    /// The operation that produced this node.
    pub fn op(&self) -> &Op {
        &self.data.op
    }

    /// Returns `true` if this node has no producers.
    pub fn is_leaf(&self) -> bool {
        matches!(self.data.op, Op::Leaf)
    }

    /// The direct inputs of this node, deduplicated by identity, in first-use order.
    ///
    /// `a + a` has a single producer `a`, even though `a` contributes twice
    /// to the gradient.
    pub fn producers(&self) -> Vec<Node> {
        let mut producers: Vec<Node> = Vec::with_capacity(2);
        for operand in self.data.op.operands() {
            if !producers.iter().any(|p| p.id() == operand.id()) {
                producers.push(operand.clone());
            }
        }
        producers
    }

    /// Returns `true` if both handles point to the same vertex.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

#[cfg(test)]
mod tests;
