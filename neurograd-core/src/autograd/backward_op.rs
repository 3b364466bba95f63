use crate::node::Node;
use crate::ops::activation::relu::relu_backward;
use crate::ops::arithmetic::add::add_backward;
use crate::ops::arithmetic::mul::mul_backward;
use crate::ops::arithmetic::pow::pow_backward;
use std::fmt;

/// The operation that produced a node, together with its operands.
///
/// The variant is the operation tag; its fields are the producers in the
/// order they were passed to the forward function. Subtraction, negation and
/// division are built from these and have no variant of their own.
#[derive(Debug, Clone)]
pub enum Op {
    /// An input or parameter. No producers.
    Leaf,
    /// `a + b`
    Add(Node, Node),
    /// `a * b`
    Mul(Node, Node),
    /// `a ** p` with a plain scalar exponent.
    Pow(Node, f64),
    /// `max(0, a)`
    Relu(Node),
}

/// The bare tag of an [`Op`], without operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Leaf,
    Add,
    Mul,
    Pow,
    Relu,
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            OpKind::Leaf => "leaf",
            OpKind::Add => "+",
            OpKind::Mul => "*",
            OpKind::Pow => "**",
            OpKind::Relu => "relu",
        };
        f.write_str(symbol)
    }
}

impl Op {
    /// Returns the tag of this operation.
    pub fn kind(&self) -> OpKind {
        match self {
            Op::Leaf => OpKind::Leaf,
            Op::Add(..) => OpKind::Add,
            Op::Mul(..) => OpKind::Mul,
            Op::Pow(..) => OpKind::Pow,
            Op::Relu(_) => OpKind::Relu,
        }
    }

    /// The operand nodes in order, duplicates included.
    pub fn operands(&self) -> Vec<&Node> {
        match self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Mul(a, b) => vec![a, b],
            Op::Pow(a, _) | Op::Relu(a) => vec![a],
        }
    }

    /// Consumes the operation and returns its operand handles.
    pub(crate) fn into_operands(self) -> Vec<Node> {
        match self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Mul(a, b) => vec![a, b],
            Op::Pow(a, _) | Op::Relu(a) => vec![a],
        }
    }

    /// Applies the local derivative rule of this operation.
    ///
    /// `grad_output` is the finalized gradient of the node this operation
    /// produced. Contributions are added into the operands' gradients.
    pub(crate) fn backward(&self, grad_output: f64) {
        match self {
            Op::Leaf => {}
            Op::Add(a, b) => add_backward(a, b, grad_output),
            Op::Mul(a, b) => mul_backward(a, b, grad_output),
            Op::Pow(a, exponent) => pow_backward(a, *exponent, grad_output),
            Op::Relu(a) => relu_backward(a, grad_output),
        }
    }
}
