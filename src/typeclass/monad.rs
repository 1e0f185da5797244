//! Monad type class - sequencing dependent computations.
//!
//! `Monad` extends [`Applicative`] with `flat_map`, which passes the contained
//! value to a function returning a new container. On a failing or absent
//! shape the function is never called and the failure is propagated as-is.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fantasia::control::Either;
//! use fantasia::typeclass::Monad;
//!
//! fn divide(numerator: i32, denominator: i32) -> Either<String, i32> {
//!     if denominator == 0 {
//!         Either::Left("Division by 0.".to_string())
//!     } else {
//!         Either::Right(numerator / denominator)
//!     }
//! }
//!
//! assert_eq!(Either::Right(12).flat_map(|n| divide(n, 4)), Either::Right(3));
//! assert_eq!(
//!     Either::Right(12).flat_map(|n| divide(n, 0)),
//!     Either::Left("Division by 0.".to_string())
//! );
//! ```

use super::applicative::Applicative;
use super::identity::Identity;

/// A type class for applicatives that can sequence dependent computations.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the inner value and returns a new monad
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is a failing shape, the failure propagates and `next` is
    /// dropped.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        self.chain(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_flat_map_transforms() {
        assert_eq!(Identity(5).flat_map(|x| Identity(x * 2)), Identity(10));
    }

    #[rstest]
    fn identity_and_then_alias() {
        assert_eq!(Identity(5).and_then(|x| Identity(x + 1)), Identity(6));
    }

    #[rstest]
    fn identity_then_replaces() {
        assert_eq!(Identity(5).then(Identity("next")), Identity("next"));
    }

    #[rstest]
    fn identity_left_identity_law() {
        let function = |x: i32| Identity(x * 2);
        assert_eq!(<Identity<()>>::pure(21).flat_map(function), function(21));
    }

    #[rstest]
    fn identity_right_identity_law() {
        let monad = Identity(7);
        assert_eq!(monad.flat_map(<Identity<()>>::pure), monad);
    }

    #[rstest]
    fn identity_associativity_law() {
        let function1 = |x: i32| Identity(x + 1);
        let function2 = |x: i32| Identity(x * 10);
        let left = Identity(3).flat_map(function1).flat_map(function2);
        let right = Identity(3).flat_map(|x| function1(x).flat_map(function2));
        assert_eq!(left, right);
    }
}
