//! Reverse-mode machinery: the operation tag and its derivative rules,
//! graph traversal, and numerical gradient checking.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::{Op, OpKind};
pub use grad_check::{check_grad, GradCheckError};
pub use graph::{topological_sort, NodeId};

#[cfg(test)]
#[path = "graph_test.rs"]
mod graph_tests;
