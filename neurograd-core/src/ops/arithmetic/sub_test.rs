use crate::node::Node;
use crate::ops::arithmetic::sub_op;

#[test]
fn test_sub_nodes_ok() {
    let a = Node::new(20.0);
    let b = Node::new(5.0);
    let c = sub_op(&a, &b);
    assert_eq!(c.value(), 15.0);
}

#[test]
fn test_sub_with_scalars() {
    let x = Node::new(5.0);
    assert_eq!((&x - 2.0).value(), 3.0);
    assert_eq!((2.0 - &x).value(), -3.0);
}

// --- Autograd Tests ---

#[test]
fn test_sub_backward() {
    let a = Node::new(20.0);
    let b = Node::new(5.0);
    let c = &a - &b;
    c.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), -1.0);
}

#[test]
fn test_sub_self_is_zero_with_zero_grad() {
    let a = Node::new(3.0);
    let c = &a - &a;
    c.backward();
    assert_eq!(c.value(), 0.0);
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_full_expression() {
    // a = b + c * d - e
    let b = Node::new(3.0);
    let c = Node::new(0.2);
    let d = Node::new(5.0);
    let e = Node::new(7.0);
    let a = &(&b + &(&c * &d)) - &e;
    assert!((a.value() - (-3.0)).abs() < 1e-12);

    a.backward();
    assert_eq!(b.grad(), 1.0);
    assert_eq!(c.grad(), 5.0);
    assert!((d.grad() - 0.2).abs() < 1e-12);
    assert_eq!(e.grad(), -1.0);
}
