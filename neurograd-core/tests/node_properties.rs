use neurograd_core::nn::NeuronOptions;
use neurograd_core::utils::testing::{check_grads_near, check_values_near};
use neurograd_core::{Module, NeuroGradError, Neuron, Node};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod common;
use common::leaves;

#[test]
fn test_sum_value_and_unit_gradients() {
    for &(x, y) in &[(1.0, 2.0), (-3.5, 0.25), (0.0, 0.0)] {
        let a = Node::new(x);
        let b = Node::new(y);
        let c = &a + &b;
        assert_eq!(c.value(), x + y);
        c.backward();
        assert_eq!(a.grad(), 1.0);
        assert_eq!(b.grad(), 1.0);
    }
}

#[test]
fn test_fan_out_accumulates() {
    let a = Node::new(4.0);
    let c = &a + &a;
    c.backward();
    assert_eq!(c.value(), 8.0);
    assert_eq!(a.grad(), 2.0);
}

#[test]
fn test_chain_rule_cube() {
    let x = Node::new(3.0);
    let y = &(&x * &x) * &x;
    assert_eq!(y.value(), 27.0);
    y.backward();
    assert_eq!(x.grad(), 27.0);
}

#[test]
fn test_relu_boundary() {
    let at_zero = Node::new(0.0);
    at_zero.relu().backward();
    assert_eq!(at_zero.grad(), 0.0);

    let positive = Node::new(5.0);
    positive.relu().backward();
    assert_eq!(positive.grad(), 1.0);
}

#[test]
fn test_division_by_zero_leaves_gradients_untouched() {
    let a = Node::new(3.0);
    let zero = Node::new(0.0);
    let b = &a * 2.0;
    assert_eq!((&b / &zero).unwrap_err(), NeuroGradError::DivisionByZero);
    assert_eq!(a.grad(), 0.0);
    assert_eq!(zero.grad(), 0.0);
    assert_eq!(b.grad(), 0.0);
}

#[test]
fn test_unit_contract() -> Result<(), NeuroGradError> {
    let unit = Neuron::from_values(&[2.0, 3.0], 0.0, NeuronOptions::linear());
    let out = unit.forward(&leaves(&[1.0, 1.0]))?;
    assert_eq!(out.value(), 5.0);
    assert_eq!(unit.parameters().len(), 3);

    out.backward();
    check_grads_near(unit.weights(), &[1.0, 1.0], 0.0);
    check_grads_near(&[unit.bias()], &[1.0], 0.0);
    Ok(())
}

#[test]
fn test_zero_grad_resets_parameters_only_gradients() -> Result<(), NeuroGradError> {
    let mut rng = StdRng::seed_from_u64(3);
    let mlp = neurograd_core::Mlp::with_rng(3, &[4, 2], &mut rng)?;
    let values_before: Vec<f64> = mlp.parameters().iter().map(|p| p.value()).collect();

    let outputs = mlp.forward(&leaves(&[0.5, -1.0, 2.0]))?;
    let total: Node = outputs.as_slice().iter().sum();
    total.backward();
    mlp.zero_grad();

    let params = mlp.parameters();
    check_grads_near(&params, &vec![0.0; params.len()], 0.0);
    check_values_near(&params, &values_before, 0.0);
    Ok(())
}

#[test]
fn test_repeated_forward_is_idempotent() -> Result<(), NeuroGradError> {
    let mut rng = StdRng::seed_from_u64(9);
    let unit = Neuron::with_rng(3, NeuronOptions::default(), &mut rng)?;
    let inputs = leaves(&[0.3, -0.7, 1.1]);
    let first = unit.forward(&inputs)?;
    let second = unit.forward(&inputs)?;
    assert_eq!(first.value(), second.value());
    Ok(())
}
