// src/node/debug.rs
use crate::node::Node;
use std::fmt;

// Shallow on purpose: printing producers recursively would walk the whole graph.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let producer_ids: Vec<u64> = self.producers().iter().map(|p| p.id().as_u64()).collect();
        write!(
            f,
            "Node(id={}, value={}, grad={}, op={}, producers={:?})",
            self.id(),
            self.value(),
            self.grad(),
            self.op().kind(),
            producer_ids
        )
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node(value={}, grad={})", self.value(), self.grad())
    }
}
