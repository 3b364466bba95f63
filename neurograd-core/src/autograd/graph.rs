use crate::node::Node;
use log::trace;
use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(0);

/// Stable identity of a node, assigned once at construction.
///
/// Two nodes with equal values are still distinct vertices; only the
/// `NodeId` decides identity during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub(crate) fn next() -> Self {
        NodeId(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Builds a topological order of every node reachable from `root`.
///
/// Depth-first post-order over `producers()`: a node is appended only after
/// all of its producers, so the result lists producers before consumers and
/// `root` last. Iterating it in reverse gives the backward visiting order.
///
/// Uses an explicit stack, so long chains of operations do not exhaust the
/// call stack.
pub fn topological_sort(root: &Node) -> Vec<Node> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Node> = Vec::new();
    // (node, producers_pushed)
    let mut stack: Vec<(Node, bool)> = vec![(root.clone(), false)];

    while let Some((node, producers_pushed)) = stack.pop() {
        if producers_pushed {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.id()) {
            continue;
        }
        trace!("[topological_sort] visiting node {}", node.id());

        let producers = node.producers();
        stack.push((node, true));
        // Reversed so the first producer is explored first.
        for producer in producers.into_iter().rev() {
            if !visited.contains(&producer.id()) {
                stack.push((producer, false));
            }
        }
    }
    sorted_list
}
