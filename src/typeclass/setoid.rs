//! Setoid type class - structural equality.
//!
//! Two containers are equal when they are in the same shape and their
//! payloads are deep-equal. Every container derives `PartialEq` with exactly
//! that meaning, so `Setoid` is provided for all of them by a blanket
//! implementation.
//!
//! Two `Absent` values of the same `Maybe<A>` are always equal; comparing
//! `Maybe<A>` with `Maybe<B>` for unrelated `A` and `B` is rejected at
//! compile time.
//!
//! # Examples
//!
//! ```rust
//! use fantasia::control::Maybe;
//! use fantasia::typeclass::Setoid;
//!
//! assert!(Maybe::Present(1).equals(&Maybe::Present(1)));
//! assert!(!Maybe::Present(1).equals(&Maybe::Absent));
//! assert!(Maybe::<i32>::Absent.equals(&Maybe::Absent));
//! ```

/// A type class for types with structural equality.
///
/// # Laws
///
/// - **Reflexivity**: `a.equals(&a)`
/// - **Symmetry**: `a.equals(&b) == b.equals(&a)`
/// - **Transitivity**: `a.equals(&b) && b.equals(&c)` implies `a.equals(&c)`
pub trait Setoid {
    /// Returns `true` if both values have the same shape and equal payloads.
    fn equals(&self, other: &Self) -> bool;
}

impl<T: PartialEq + ?Sized> Setoid for T {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Identity;
    use rstest::rstest;

    #[rstest]
    #[case(Identity(1), Identity(1), true)]
    #[case(Identity(1), Identity(2), false)]
    fn identity_equals(
        #[case] left: Identity<i32>,
        #[case] right: Identity<i32>,
        #[case] expected: bool,
    ) {
        assert_eq!(left.equals(&right), expected);
        assert_eq!(right.equals(&left), expected);
    }

    #[cfg(feature = "control")]
    mod containers {
        use super::*;
        use crate::control::{Either, Maybe, NonEmptyVec, Validation};

        #[rstest]
        #[case(Either::Left(1), Either::Right(1), false)]
        #[case(Either::Left(1), Either::Left(1), true)]
        #[case(Either::Right(1), Either::Right(2), false)]
        fn either_equals(
            #[case] left: Either<i32, i32>,
            #[case] right: Either<i32, i32>,
            #[case] expected: bool,
        ) {
            assert_eq!(left.equals(&right), expected);
            assert_eq!(right.equals(&left), expected);
        }

        #[rstest]
        #[case(Validation::failure(1), Validation::Success(1), false)]
        #[case(Validation::failure(1), Validation::failure(1), true)]
        #[case(
            Validation::failure(1),
            Validation::failures(NonEmptyVec::new(1, vec![1])),
            false
        )]
        fn validation_equals(
            #[case] left: Validation<i32, i32>,
            #[case] right: Validation<i32, i32>,
            #[case] expected: bool,
        ) {
            assert_eq!(left.equals(&right), expected);
            assert_eq!(right.equals(&left), expected);
        }

        #[rstest]
        fn maybe_tags_differ() {
            assert!(!Maybe::Present(0).equals(&Maybe::Absent));
            assert!(Maybe::<i32>::Absent.equals(&Maybe::Absent));
        }
    }
}
