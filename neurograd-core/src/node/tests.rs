use crate::autograd::OpKind;
use crate::node::Node;
use num_traits::{One, Zero};

#[test]
fn test_leaf_creation() {
    let x = Node::new(4.5);
    assert_eq!(x.value(), 4.5);
    assert_eq!(x.grad(), 0.0);
    assert!(x.is_leaf());
    assert_eq!(x.op().kind(), OpKind::Leaf);
    assert!(x.producers().is_empty());
}

#[test]
fn test_from_scalars() {
    assert_eq!(Node::from(2.0_f64).value(), 2.0);
    assert_eq!(Node::from(1.5_f32).value(), 1.5);
    assert_eq!(Node::from(-3_i32).value(), -3.0);
}

#[test]
fn test_ids_are_unique_and_clone_shares_identity() {
    let a = Node::new(1.0);
    let b = Node::new(1.0);
    let a2 = a.clone();
    assert_ne!(a.id(), b.id());
    assert_eq!(a.id(), a2.id());
    assert!(a.ptr_eq(&a2));
    assert!(!a.ptr_eq(&b));
}

#[test]
fn test_clone_shares_gradient() {
    let a = Node::new(2.0);
    let alias = a.clone();
    (&alias * 3.0).backward();
    assert_eq!(a.grad(), 3.0);
}

#[test]
fn test_backward_on_bare_leaf() {
    let x = Node::new(7.0);
    x.backward();
    assert_eq!(x.grad(), 1.0);
    assert_eq!(x.value(), 7.0);
}

#[test]
fn test_backward_leaves_unreachable_nodes_untouched() {
    let a = Node::new(1.0);
    let b = Node::new(2.0);
    let unrelated = Node::new(3.0);
    let _other = &unrelated * &b;
    let c = &a + &b;
    c.backward();
    assert_eq!(unrelated.grad(), 0.0);
    assert_eq!(b.grad(), 1.0);
}

#[test]
fn test_zero_grad_keeps_value() {
    let a = Node::new(2.0);
    let y = &a * &a;
    y.backward();
    assert_eq!(a.grad(), 4.0);
    a.zero_grad();
    assert_eq!(a.grad(), 0.0);
    assert_eq!(a.value(), 2.0);
}

#[test]
fn test_stale_gradients_accumulate_without_reset() {
    // Documented caller obligation: a second pass without zero_grad adds on top.
    let a = Node::new(2.0);
    let y = &a * 5.0;
    y.backward();
    y.backward();
    assert_eq!(a.grad(), 10.0);

    a.zero_grad();
    let z = &a * 5.0;
    z.backward();
    assert_eq!(a.grad(), 5.0);
}

#[test]
fn test_diamond_fan_out() {
    // y = (a * b) + (a + b), dy/da = b + 1, dy/db = a + 1
    let a = Node::new(3.0);
    let b = Node::new(-2.0);
    let y = &(&a * &b) + &(&a + &b);
    y.backward();
    assert_eq!(y.value(), -5.0);
    assert_eq!(a.grad(), -1.0);
    assert_eq!(b.grad(), 4.0);
}

#[test]
fn test_zero_one_and_sum() {
    assert!(Node::zero().is_zero());
    assert_eq!(Node::one().value(), 1.0);

    let xs: Vec<Node> = [1.0, 2.0, 3.5].iter().map(|&v| Node::new(v)).collect();
    let total: Node = xs.iter().sum();
    assert_eq!(total.value(), 6.5);
    total.backward();
    for x in &xs {
        assert_eq!(x.grad(), 1.0);
    }

    let owned_total: Node = xs.into_iter().sum();
    assert_eq!(owned_total.value(), 6.5);
}

#[test]
fn test_debug_and_display() {
    let a = Node::new(2.0);
    let b = &a * 3.0;
    assert_eq!(format!("{}", b), "Node(value=6, grad=0)");
    let debug = format!("{:?}", b);
    assert!(debug.contains("value=6"));
    assert!(debug.contains("op=*"));
}
