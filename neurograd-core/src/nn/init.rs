use crate::error::NeuroGradError;
use crate::node::Node;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Default weight range for neurons: uniform on `[-1, 1]`.
pub const WEIGHT_INIT_LOW: f64 = -1.0;
pub const WEIGHT_INIT_HIGH: f64 = 1.0;

fn check_bounds(low: f64, high: f64) -> Result<(), NeuroGradError> {
    if !(low.is_finite() && high.is_finite()) || low > high {
        return Err(NeuroGradError::InvalidConfiguration(format!(
            "uniform init needs finite bounds with low <= high, got [{}, {}]",
            low, high
        )));
    }
    Ok(())
}

/// Draws one value uniformly from `[low, high]`.
///
/// The generator is injected so callers can pass a seeded one for
/// reproducible weights.
pub fn uniform<R: Rng + ?Sized>(low: f64, high: f64, rng: &mut R) -> Result<f64, NeuroGradError> {
    check_bounds(low, high)?;
    Ok(Uniform::new_inclusive(low, high).sample(rng))
}

/// Creates `n` fresh leaf nodes with values drawn uniformly from `[low, high]`.
pub fn uniform_nodes<R: Rng + ?Sized>(
    n: usize,
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<Vec<Node>, NeuroGradError> {
    check_bounds(low, high)?;
    let dist = Uniform::new_inclusive(low, high);
    Ok((0..n).map(|_| Node::new(dist.sample(rng))).collect())
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
