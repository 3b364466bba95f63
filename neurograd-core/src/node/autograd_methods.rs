use crate::autograd::graph::topological_sort;
use crate::node::Node;
use log::debug;

impl Node {
    /// Returns the gradient accumulated so far.
    pub fn grad(&self) -> f64 {
        self.data.grad.get()
    }

    /// Resets the gradient to 0. Value and graph position are left untouched.
    pub fn zero_grad(&self) {
        self.data.grad.set(0.0);
    }

    /// Adds `delta` into the gradient. Gradients are only ever accumulated,
    /// never overwritten, so every use of a node contributes.
    pub(crate) fn accumulate_grad(&self, delta: f64) {
        self.data.grad.set(self.data.grad.get() + delta);
    }

    /// Performs the backward pass starting from this node.
    ///
    /// Seeds this node's gradient with `1.0`, then visits every reachable node
    /// in reverse topological order and applies its operation's local
    /// derivative rule, so each node propagates only after all of its
    /// consumers have finished contributing.
    ///
    /// Nodes not reachable from `self` are untouched. Every reachable node
    /// other than `self` is expected to start at gradient 0 (fresh nodes, or
    /// after `zero_grad`); leftovers from a previous pass are added to, not
    /// replaced.
    pub fn backward(&self) {
        let sorted_nodes = topological_sort(self);
        debug!(
            "backward: {} nodes reachable from node {}",
            sorted_nodes.len(),
            self.id()
        );

        self.data.grad.set(1.0);
        for node in sorted_nodes.iter().rev() {
            node.op().backward(node.grad());
        }
    }
}
