use crate::node::Node;
use std::borrow::Borrow;

/// Checks that the gradients of `nodes` match `expected` within `tolerance`.
/// Panics with the offending index otherwise.
pub fn check_grads_near<N: Borrow<Node>>(nodes: &[N], expected: &[f64], tolerance: f64) {
    let actual: Vec<f64> = nodes.iter().map(|n| n.borrow().grad()).collect();
    check_near("Gradient", &actual, expected, tolerance);
}

/// Checks that the forward values of `nodes` match `expected` within `tolerance`.
pub fn check_values_near<N: Borrow<Node>>(nodes: &[N], expected: &[f64], tolerance: f64) {
    let actual: Vec<f64> = nodes.iter().map(|n| n.borrow().value()).collect();
    check_near("Value", &actual, expected, tolerance);
}

fn check_near(what: &str, actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "{} count mismatch", what);

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        if diff > tolerance || diff.is_nan() {
            panic!(
                "{} mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                what, i, a, e, diff, tolerance
            );
        }
    }
}
