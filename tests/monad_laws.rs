#![cfg(feature = "control")]
//! Property-based tests for Monad laws.
//!
//! - **Left Identity**: `of(a).chain(f) == f(a)`
//! - **Right Identity**: `m.chain(of) == m`
//! - **Associativity**: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`

use fantasia::control::{Either, Maybe, NonEmptyVec, Validation};
use fantasia::typeclass::{Identity, Monad};
use proptest::prelude::*;

fn maybe_half(n: i32) -> Maybe<i32> {
    if n % 2 == 0 { Maybe::of(n / 2) } else { Maybe::Absent }
}

fn maybe_positive(n: i32) -> Maybe<i32> {
    if n > 0 { Maybe::of(n) } else { Maybe::Absent }
}

fn either_half(n: i32) -> Either<String, i32> {
    if n % 2 == 0 {
        Either::of(n / 2)
    } else {
        Either::Left(format!("{n} is odd"))
    }
}

fn either_positive(n: i32) -> Either<String, i32> {
    if n > 0 {
        Either::of(n)
    } else {
        Either::Left(format!("{n} is not positive"))
    }
}

fn validation_half(n: i32) -> Validation<String, i32> {
    either_half(n).to_validation()
}

fn validation_positive(n: i32) -> Validation<String, i32> {
    either_positive(n).to_validation()
}

fn validation_strategy() -> impl Strategy<Value = Validation<String, i32>> {
    prop_oneof![
        any::<i32>().prop_map(Validation::Success),
        (any::<String>(), prop::collection::vec(any::<String>(), 0..3))
            .prop_map(|(head, tail)| Validation::failures(NonEmptyVec::new(head, tail))),
    ]
}

// =============================================================================
// Left Identity
// =============================================================================

proptest! {
    #[test]
    fn prop_identity_left_identity(value in any::<i32>()) {
        let function = |n: i32| Identity::of(n.wrapping_mul(3));
        prop_assert_eq!(Identity::of(value).chain(function), function(value));
    }

    #[test]
    fn prop_maybe_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Maybe::of(value).chain(maybe_half), maybe_half(value));
    }

    #[test]
    fn prop_either_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Either::of(value).chain(either_half), either_half(value));
    }

    #[test]
    fn prop_validation_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Validation::of(value).chain(validation_half), validation_half(value));
    }
}

// =============================================================================
// Right Identity
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_right_identity(value in any::<Option<i32>>()) {
        let value = Maybe::from(value);
        prop_assert_eq!(value.chain(Maybe::of), value);
    }

    #[test]
    fn prop_either_right_identity(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        let value = Either::from(value);
        prop_assert_eq!(value.clone().chain(Either::of), value);
    }

    #[test]
    fn prop_validation_right_identity(value in validation_strategy()) {
        prop_assert_eq!(value.clone().chain(Validation::of), value);
    }
}

// =============================================================================
// Associativity
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_associativity(value in any::<Option<i32>>()) {
        let value = Maybe::from(value);
        let left = value.chain(maybe_half).chain(maybe_positive);
        let right = value.chain(|x| maybe_half(x).chain(maybe_positive));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_associativity(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        let value = Either::from(value);
        let left = value.clone().chain(either_half).chain(either_positive);
        let right = value.chain(|x| either_half(x).chain(either_positive));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_validation_associativity(value in validation_strategy()) {
        let left = value.clone().chain(validation_half).chain(validation_positive);
        let right = value.chain(|x| validation_half(x).chain(validation_positive));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_flat_map_agrees_with_chain(value in any::<Option<i32>>()) {
        let value = Maybe::from(value);
        prop_assert_eq!(value.flat_map(maybe_half), value.chain(maybe_half));
    }
}
