use neurograd_core::Node;

// Shared by several integration test crates; not every crate uses every helper.
#[allow(dead_code)]
pub fn leaves(values: &[f64]) -> Vec<Node> {
    values.iter().map(|&v| Node::new(v)).collect()
}

/// Inputs and targets sampled from `y = 2x + 1` on `[-1, 1]`.
#[allow(dead_code)]
pub fn linear_dataset() -> (Vec<f64>, Vec<f64>) {
    let xs: Vec<f64> = (0..9).map(|i| -1.0 + 0.25 * i as f64).collect();
    let ys = xs.iter().map(|x| 2.0 * x + 1.0).collect();
    (xs, ys)
}
