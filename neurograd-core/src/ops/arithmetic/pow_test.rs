use crate::error::NeuroGradError;
use crate::node::Node;
use crate::ops::arithmetic::pow_op;
use approx::assert_relative_eq;
use num_traits::Pow;

#[test]
fn test_pow_forward() -> Result<(), NeuroGradError> {
    let a = Node::new(2.0);
    assert_eq!(pow_op(&a, 3.0)?.value(), 8.0);
    assert_relative_eq!(a.powf(0.5)?.value(), 2.0_f64.sqrt(), epsilon = 1e-12);
    assert_eq!((&a).pow(-2.0)?.value(), 0.25);
    Ok(())
}

#[test]
fn test_pow_backward() -> Result<(), NeuroGradError> {
    let a = Node::new(3.0);
    let b = a.powf(2.0)?;
    b.backward();
    assert_eq!(a.grad(), 6.0);
    Ok(())
}

#[test]
fn test_pow_negative_exponent_backward() -> Result<(), NeuroGradError> {
    // d/da a^-1 = -a^-2
    let a = Node::new(4.0);
    let b = a.powf(-1.0)?;
    b.backward();
    assert_relative_eq!(a.grad(), -1.0 / 16.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_pow_negative_base_integer_exponent() -> Result<(), NeuroGradError> {
    let a = Node::new(-2.0);
    let b = a.powf(3.0)?;
    assert_eq!(b.value(), -8.0);
    b.backward();
    assert_eq!(a.grad(), 12.0);
    Ok(())
}

#[test]
fn test_pow_zero_base_negative_exponent_fails() {
    let a = Node::new(0.0);
    assert_eq!(a.powf(-1.0).unwrap_err(), NeuroGradError::DivisionByZero);
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_pow_negative_base_fractional_exponent_fails() {
    let a = Node::new(-4.0);
    let err = a.powf(0.5).unwrap_err();
    assert!(matches!(err, NeuroGradError::DomainError { value, exponent, .. } if value == -4.0 && exponent == 0.5));
}

#[test]
fn test_pow_zero_exponent_has_zero_gradient() -> Result<(), NeuroGradError> {
    for &x in &[0.0, 2.5, -3.0] {
        let a = Node::new(x);
        let b = a.powf(0.0)?;
        assert_eq!(b.value(), 1.0);
        b.backward();
        assert_eq!(a.grad(), 0.0);
    }
    Ok(())
}

#[test]
fn test_pow_zero_base_fractional_exponent_fails() {
    let a = Node::new(0.0);
    let err = a.powf(0.5).unwrap_err();
    assert!(matches!(err, NeuroGradError::DomainError { value, exponent, .. } if value == 0.0 && exponent == 0.5));
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_pow_zero_base_with_finite_derivative() -> Result<(), NeuroGradError> {
    // p >= 1 keeps p * 0 ** (p - 1) finite
    let a = Node::new(0.0);
    let square = a.powf(2.0)?;
    square.backward();
    assert_eq!(a.grad(), 0.0);

    let b = Node::new(0.0);
    let identity = b.powf(1.0)?;
    identity.backward();
    assert_eq!(b.grad(), 1.0);
    Ok(())
}
