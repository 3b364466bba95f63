//! # Training a small MLP on CPU
//!
//! Fits `y = x0 - 0.5 * x1 + 1` with a 2 -> 8 -> 8 -> 1 network using
//! scalar autodiff and plain SGD.
//!
//! Run with `cargo run --example basic_mlp_cpu`.

use neurograd_core::{mse_loss, Mlp, Module, NeuroGradError, Node, Optimizer, Sgd};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() -> Result<(), NeuroGradError> {
    let mut rng = StdRng::seed_from_u64(1337);

    // --- Synthetic data ---
    let inputs: Vec<[f64; 2]> = (0..32)
        .map(|_| [rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)])
        .collect();
    let targets: Vec<f64> = inputs.iter().map(|x| x[0] - 0.5 * x[1] + 1.0).collect();

    // --- Model and optimizer ---
    let mut model = Mlp::with_rng(2, &[8, 8, 1], &mut rng)?;
    let mut optimizer = Sgd::new(0.05)?.with_momentum(0.9)?;
    println!("{}", model);
    println!("{} parameters", model.num_parameters());

    // --- Training loop ---
    for epoch in 0..100 {
        let mut predictions = Vec::with_capacity(inputs.len());
        for x in &inputs {
            let sample = [Node::new(x[0]), Node::new(x[1])];
            predictions.push(model.forward(&sample)?.into_single()?);
        }
        let loss = mse_loss(&predictions, &targets)?;

        loss.backward();
        optimizer.step(&mut model)?;

        if epoch % 10 == 0 || epoch == 99 {
            println!("epoch {:>3}: loss = {:.6}", epoch, loss.value());
        }
    }

    let probe = [Node::new(0.5), Node::new(-0.5)];
    let prediction = model.forward(&probe)?.into_single()?;
    println!(
        "f(0.5, -0.5) = {:.4} (target {:.4})",
        prediction.value(),
        0.5 + 0.25 + 1.0
    );
    Ok(())
}
