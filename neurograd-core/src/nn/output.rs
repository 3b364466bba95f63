use crate::error::NeuroGradError;
use crate::node::Node;
use std::slice;

/// What a layer (or a network ending in one) produces.
///
/// A layer with exactly one neuron yields `Single`, any other layer yields
/// `Multiple`. Both forms read as a slice through [`Output::as_slice`], so a
/// layer's output feeds the next layer's `forward` the same way either way.
#[derive(Debug, Clone)]
pub enum Output {
    Single(Node),
    Multiple(Vec<Node>),
}

impl Output {
    /// The output nodes as a slice (length 1 for `Single`).
    pub fn as_slice(&self) -> &[Node] {
        match self {
            Output::Single(node) => slice::from_ref(node),
            Output::Multiple(nodes) => nodes,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// The node if this is a `Single` output.
    pub fn single(&self) -> Option<&Node> {
        match self {
            Output::Single(node) => Some(node),
            Output::Multiple(_) => None,
        }
    }

    /// Unwraps a `Single` output, or fails with an arity error reporting how
    /// many nodes there actually were.
    pub fn into_single(self) -> Result<Node, NeuroGradError> {
        match self {
            Output::Single(node) => Ok(node),
            Output::Multiple(nodes) => Err(NeuroGradError::ArityMismatch {
                expected: 1,
                actual: nodes.len(),
            }),
        }
    }

    pub fn into_vec(self) -> Vec<Node> {
        match self {
            Output::Single(node) => vec![node],
            Output::Multiple(nodes) => nodes,
        }
    }

    /// Forward values of the output nodes.
    pub fn values(&self) -> Vec<f64> {
        self.as_slice().iter().map(Node::value).collect()
    }
}

impl From<Node> for Output {
    fn from(node: Node) -> Self {
        Output::Single(node)
    }
}

impl From<Vec<Node>> for Output {
    fn from(nodes: Vec<Node>) -> Self {
        Output::Multiple(nodes)
    }
}
