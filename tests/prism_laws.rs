//! Property-based tests for prism laws.
//!
//! Verifies the inject-match round trip for leaf and composed prisms
//! across randomly generated payloads:
//!
//! ```text
//! prism.try_get_owned(prism.inject(value)) == Present(value)
//! ```
//!
//! Composition must preserve the law and be associative for every
//! operation.

#![cfg(feature = "optics")]

use optica::effect::Optional;
use optica::prism;
use proptest::prelude::*;

// =============================================================================
// Test Enums
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
enum Shape {
    Circle(i32),
    Square(i32),
}

#[derive(Clone, PartialEq, Debug)]
enum Level3 {
    Leaf(i32),
    Hole,
}

#[derive(Clone, PartialEq, Debug)]
enum Level2 {
    Wrap(Level3),
    Hole,
}

#[derive(Clone, PartialEq, Debug)]
enum Level1 {
    Wrap(Level2),
    Hole,
}

// =============================================================================
// Inject-Match Round Trip
// =============================================================================

proptest! {
    /// Round trip for a leaf prism
    #[test]
    fn prop_inject_match_round_trip(value in any::<i32>()) {
        let circle = prism!(Shape, Circle);
        prop_assert_eq!(circle.try_get_owned(circle.inject(value)), Optional::Present(value));
    }

    /// Round trip through the borrowing read
    #[test]
    fn prop_inject_match_round_trip_by_ref(value in any::<i32>()) {
        let circle = prism!(Shape, Circle);
        let constructed = circle.inject(value);
        prop_assert_eq!(circle.try_get(&constructed), Optional::Present(&value));
    }

    /// A matched read, injected back, rebuilds the source
    #[test]
    fn prop_match_inject_rebuilds_the_source(value in any::<i32>()) {
        let circle = prism!(Shape, Circle);
        let source = Shape::Circle(value);
        let rebuilt = circle
            .try_get_owned(source.clone())
            .fold(|payload| circle.inject(payload), || Shape::Square(0));
        prop_assert_eq!(rebuilt, source);
    }

    /// Round trip for a composed prism
    #[test]
    fn prop_composed_inject_match_round_trip(value in any::<i32>()) {
        let chain = prism!(Level1, Wrap)
            .compose(prism!(Level2, Wrap))
            .compose(prism!(Level3, Leaf));
        prop_assert_eq!(chain.try_get_owned(chain.inject(value)), Optional::Present(value));
    }

    /// The mismatching variant is always absent, whatever the payload
    #[test]
    fn prop_mismatch_is_absent(value in any::<i32>()) {
        let circle = prism!(Shape, Circle);
        prop_assert_eq!(circle.try_get_owned(Shape::Square(value)), Optional::Absent);
    }

    /// Over rebuilds through inject on a match
    #[test]
    fn prop_over_definition(value in any::<i32>()) {
        let circle = prism!(Shape, Circle);
        let via_over = circle.over(Shape::Circle(value), |payload| payload.wrapping_mul(2));
        prop_assert_eq!(via_over, Optional::Present(Shape::Circle(value.wrapping_mul(2))));
    }
}

// =============================================================================
// Composition Associativity
// =============================================================================

fn three_level_sources() -> impl Strategy<Value = Level1> {
    prop_oneof![
        any::<i32>().prop_map(|value| Level1::Wrap(Level2::Wrap(Level3::Leaf(value)))),
        Just(Level1::Wrap(Level2::Wrap(Level3::Hole))),
        Just(Level1::Wrap(Level2::Hole)),
        Just(Level1::Hole),
    ]
}

proptest! {
    /// try_get agrees for both groupings of a three-prism chain
    #[test]
    fn prop_associativity_try_get(source in three_level_sources()) {
        let left = prism!(Level1, Wrap)
            .compose(prism!(Level2, Wrap))
            .compose(prism!(Level3, Leaf));
        let right = prism!(Level1, Wrap)
            .compose(prism!(Level2, Wrap).compose(prism!(Level3, Leaf)));

        prop_assert_eq!(left.try_get(&source), right.try_get(&source));
        prop_assert_eq!(left.try_get_owned(source.clone()), right.try_get_owned(source));
    }

    /// inject agrees for both groupings of a three-prism chain
    #[test]
    fn prop_associativity_inject(value in any::<i32>()) {
        let left = prism!(Level1, Wrap)
            .compose(prism!(Level2, Wrap))
            .compose(prism!(Level3, Leaf));
        let right = prism!(Level1, Wrap)
            .compose(prism!(Level2, Wrap).compose(prism!(Level3, Leaf)));

        prop_assert_eq!(left.inject(value), right.inject(value));
    }

    /// over agrees for both groupings of a three-prism chain
    #[test]
    fn prop_associativity_over(source in three_level_sources()) {
        let left = prism!(Level1, Wrap)
            .compose(prism!(Level2, Wrap))
            .compose(prism!(Level3, Leaf));
        let right = prism!(Level1, Wrap)
            .compose(prism!(Level2, Wrap).compose(prism!(Level3, Leaf)));

        let transform = |payload: i32| payload.wrapping_sub(1);
        prop_assert_eq!(left.over(source.clone(), transform), right.over(source, transform));
    }
}
