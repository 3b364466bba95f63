use crate::autograd::OpKind;
use crate::node::Node;
use crate::ops::activation::relu_op;

#[test]
fn test_relu_forward() {
    assert_eq!(relu_op(&Node::new(-3.0)).value(), 0.0);
    assert_eq!(relu_op(&Node::new(0.0)).value(), 0.0);
    assert_eq!(relu_op(&Node::new(2.5)).value(), 2.5);
    assert_eq!(Node::new(1.0).relu().op().kind(), OpKind::Relu);
}

#[test]
fn test_relu_backward_positive() {
    let x = Node::new(5.0);
    x.relu().backward();
    assert_eq!(x.grad(), 1.0);
}

#[test]
fn test_relu_backward_at_zero() {
    let x = Node::new(0.0);
    x.relu().backward();
    assert_eq!(x.grad(), 0.0);
}

#[test]
fn test_relu_backward_negative() {
    let x = Node::new(-1.0);
    let y = (&x * 3.0).relu();
    y.backward();
    assert_eq!(x.grad(), 0.0);
}

#[test]
fn test_relu_backward_scaled() {
    let x = Node::new(2.0);
    let y = x.relu() * 4.0;
    y.backward();
    assert_eq!(x.grad(), 4.0);
}
