//! Unit tests for the prism family.
//!
//! Covers variant matching, injection, read-transform-write through a
//! possibly-absent focus, and composition into variant chains.

#![cfg(feature = "optics")]

use optica::effect::Optional;
use optica::optics::{FunctionPrism, PolyPrism, Prism};
use optica::prism;
use rstest::rstest;

#[derive(Clone, PartialEq, Debug)]
enum Shape {
    Circle(f64),
    Square(f64),
}

// =============================================================================
// Matching and Injection
// =============================================================================

#[rstest]
fn prism_try_get_matches_the_focused_variant() {
    let circle = prism!(Shape, Circle);
    assert_eq!(circle.try_get(&Shape::Circle(3.0)), Optional::Present(&3.0));
}

#[rstest]
fn prism_try_get_reports_a_mismatch_as_absent() {
    let circle = prism!(Shape, Circle);
    assert_eq!(circle.try_get(&Shape::Square(3.0)), Optional::Absent);
}

#[rstest]
fn prism_try_get_owned_consumes_the_source() {
    let circle = prism!(Shape, Circle);
    assert_eq!(circle.try_get_owned(Shape::Circle(3.0)), Optional::Present(3.0));
    assert_eq!(circle.try_get_owned(Shape::Square(3.0)), Optional::Absent);
}

#[rstest]
fn prism_inject_always_builds_the_variant() {
    let circle = prism!(Shape, Circle);
    assert_eq!(circle.inject(10.0), Shape::Circle(10.0));
}

// =============================================================================
// Over
// =============================================================================

#[rstest]
fn prism_over_rebuilds_on_a_match() {
    let circle = prism!(Shape, Circle);
    let doubled = circle.over(Shape::Circle(3.0), |r| r * 2.0);
    assert_eq!(doubled, Optional::Present(Shape::Circle(6.0)));
}

#[rstest]
fn prism_over_is_absent_on_a_mismatch() {
    let circle = prism!(Shape, Circle);
    let result = circle.over(Shape::Square(3.0), |r| r * 2.0);
    assert_eq!(result, Optional::Absent);
}

#[rstest]
fn prism_over_or_identity_keeps_a_mismatched_source() {
    let circle = prism!(Shape, Circle);
    let unchanged = circle.over_or_identity(Shape::Square(3.0), |r| r * 2.0);
    assert_eq!(unchanged, Shape::Square(3.0));
}

// =============================================================================
// Hand-Built Prisms
// =============================================================================

#[rstest]
fn function_prism_over_a_multi_field_variant() {
    #[derive(Clone, PartialEq, Debug)]
    enum Message {
        Text(String),
        Position { x: i32, y: i32 },
    }

    // The macro handles single-payload tuple variants; anything else is
    // paired by hand.
    let text = Prism::new(
        |message: &Message| match message {
            Message::Text(body) => Optional::Present(body),
            Message::Position { .. } => Optional::Absent,
        },
        Message::Text,
        |message: Message| match message {
            Message::Text(body) => Optional::Present(body),
            Message::Position { .. } => Optional::Absent,
        },
    );

    assert_eq!(
        text.over(Message::Text("hi".to_string()), |body| body.to_uppercase()),
        Optional::Present(Message::Text("HI".to_string()))
    );
    assert_eq!(
        text.over(Message::Position { x: 1, y: 2 }, |body| body),
        Optional::Absent
    );
}

// =============================================================================
// Polymorphic Injection
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
enum Attempt<A> {
    Made(A),
    Missed,
}

#[rstest]
fn poly_prism_over_changes_the_payload_type() {
    let made = FunctionPrism::new(
        |attempt: &Attempt<i32>| match attempt {
            Attempt::Made(value) => Optional::Present(value),
            Attempt::Missed => Optional::Absent,
        },
        Attempt::Made,
        |attempt: Attempt<i32>| match attempt {
            Attempt::Made(value) => Optional::Present(value),
            Attempt::Missed => Optional::Absent,
        },
    );

    assert_eq!(
        made.over(Attempt::Made(42), |value| value.to_string()),
        Optional::Present(Attempt::Made("42".to_string()))
    );
    assert_eq!(
        made.over(Attempt::Missed, |value| value.to_string()),
        Optional::Absent
    );
}

// =============================================================================
// Composition
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
enum Inner {
    Value(i32),
    Nothing,
}

#[derive(Clone, PartialEq, Debug)]
enum Outer {
    Wrapped(Inner),
    Empty,
}

#[rstest]
fn composed_prism_matches_through_both_prisms() {
    let wrapped_value = prism!(Outer, Wrapped).compose(prism!(Inner, Value));
    assert_eq!(
        wrapped_value.try_get(&Outer::Wrapped(Inner::Value(42))),
        Optional::Present(&42)
    );
}

#[rstest]
fn composed_prism_short_circuits_on_the_outer_mismatch() {
    let wrapped_value = prism!(Outer, Wrapped).compose(prism!(Inner, Value));
    assert_eq!(wrapped_value.try_get(&Outer::Empty), Optional::Absent);
}

#[rstest]
fn composed_prism_reports_the_inner_mismatch() {
    let wrapped_value = prism!(Outer, Wrapped).compose(prism!(Inner, Value));
    assert_eq!(
        wrapped_value.try_get(&Outer::Wrapped(Inner::Nothing)),
        Optional::Absent
    );
}

#[rstest]
fn composed_prism_injects_inside_out() {
    let wrapped_value = prism!(Outer, Wrapped).compose(prism!(Inner, Value));
    assert_eq!(wrapped_value.inject(7), Outer::Wrapped(Inner::Value(7)));
}

#[rstest]
fn then_behaves_as_compose() {
    let via_compose = prism!(Outer, Wrapped).compose(prism!(Inner, Value));
    let via_then = prism!(Outer, Wrapped).then(prism!(Inner, Value));

    let data = Outer::Wrapped(Inner::Value(9));
    assert_eq!(via_compose.try_get(&data), via_then.try_get(&data));
    assert_eq!(via_compose.inject(3), via_then.inject(3));
}

#[rstest]
fn poly_prisms_compose_through_the_backing_form() {
    let chain = prism!(Outer, Wrapped)
        .into_poly()
        .compose(prism!(Inner, Value).into_poly());

    assert_eq!(
        chain.try_get(&Outer::Wrapped(Inner::Value(42))),
        Optional::Present(&42)
    );
    assert_eq!(chain.try_get_owned(Outer::Empty), Optional::Absent);
    assert_eq!(chain.inject(7), Outer::Wrapped(Inner::Value(7)));
}

#[rstest]
fn a_composed_prism_is_usable_like_a_leaf_prism() {
    let wrapped_value = prism!(Outer, Wrapped).compose(prism!(Inner, Value));
    let bumped = wrapped_value.over(Outer::Wrapped(Inner::Value(41)), |v| v + 1);
    assert_eq!(bumped, Optional::Present(Outer::Wrapped(Inner::Value(42))));
}

// =============================================================================
// Value Semantics
// =============================================================================

#[rstest]
fn prisms_are_cheap_to_clone_and_share() {
    let circle = prism!(Shape, Circle);
    let shared = circle.clone();

    let shape = Shape::Circle(1.5);
    assert_eq!(circle.try_get(&shape), shared.try_get(&shape));
}

#[rstest]
fn function_prism_is_constructible_without_the_macro() {
    let square = FunctionPrism::new(
        |shape: &Shape| match shape {
            Shape::Square(side) => Optional::Present(side),
            Shape::Circle(_) => Optional::Absent,
        },
        Shape::Square,
        |shape: Shape| match shape {
            Shape::Square(side) => Optional::Present(side),
            Shape::Circle(_) => Optional::Absent,
        },
    );

    assert_eq!(square.try_get(&Shape::Square(2.0)), Optional::Present(&2.0));
}
