// src/node_data.rs
use crate::autograd::{NodeId, Op};
use std::cell::Cell;
use std::mem;
use std::rc::Rc;

/// Internal storage and metadata for a Node.
///
/// Everything except the gradient is fixed at construction. The gradient
/// lives in a `Cell` so backward propagation can accumulate into it through
/// shared `Rc` handles.
#[derive(Debug)]
pub(crate) struct NodeData {
    /// Stable handle assigned at creation, used as the graph identity.
    pub(crate) id: NodeId,
    /// The forward-computed scalar.
    pub(crate) value: f64,
    /// Accumulated dL/d(value). Starts at 0.
    pub(crate) grad: Cell<f64>,
    /// The operation (and producers) that created this node. `Op::Leaf` for inputs.
    pub(crate) op: Op,
}

impl NodeData {
    pub(crate) fn new(value: f64, op: Op) -> Self {
        NodeData {
            id: NodeId::next(),
            value,
            grad: Cell::new(0.0),
            op,
        }
    }
}

// Dropping the last handle to a long chain would otherwise recurse once per
// node. Unlink uniquely owned producers onto a local stack instead.
impl Drop for NodeData {
    fn drop(&mut self) {
        let mut pending = mem::replace(&mut self.op, Op::Leaf).into_operands();
        while let Some(node) = pending.pop() {
            if let Ok(mut data) = Rc::try_unwrap(node.data) {
                pending.extend(mem::replace(&mut data.op, Op::Leaf).into_operands());
            }
        }
    }
}
