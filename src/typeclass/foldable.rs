//! Foldable type class - folding the contained value into an accumulator.
//!
//! Every container in this crate holds at most one value, so folding is
//! simple: the value (if any) is combined with the seed, and on a failing or
//! absent shape the seed is left alone.
//!
//! Two flavours are provided:
//!
//! - `reduce` keeps the container shape: `Present(a).reduce(s, f)` is
//!   `Present(f(s, a))` and a failing shape is propagated unchanged
//! - `fold_left` eliminates the container: the seed comes back untouched
//!   when there is nothing to fold
//!
//! # Examples
//!
//! ```rust
//! use fantasia::control::Maybe;
//! use fantasia::typeclass::Foldable;
//!
//! let present = Maybe::Present(10);
//! assert_eq!(present.fold_left(5, |accumulator, element| accumulator + element), 15);
//!
//! let absent: Maybe<i32> = Maybe::Absent;
//! assert_eq!(absent.fold_left(5, |accumulator, element| accumulator + element), 5);
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for containers that can be folded to a summary value.
///
/// # Required Methods
///
/// - `reduce`: shape-preserving fold
/// - `fold_left`: eliminating fold
///
/// # Provided Methods
///
/// - `is_empty`, `length`, `to_list`, `find`, `exists`, `for_all`
pub trait Foldable: TypeConstructor {
    /// Folds the contained value into `seed`, returning the result inside a
    /// container of the same shape.
    fn reduce<B, F>(self, seed: B, function: F) -> Self::WithType<B>
    where
        F: FnOnce(B, Self::Inner) -> B;

    /// Folds the contained value into `init` and returns the plain result.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Returns `true` if there is no value to fold.
    #[inline]
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.length() == 0
    }

    /// Returns the number of contained values (zero or one).
    #[inline]
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the contained value (if any) into a `Vec`.
    #[inline]
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns the contained value if it satisfies `predicate`.
    #[inline]
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        Self: Sized,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.fold_left(None, |found, element| {
            found.or_else(|| predicate(&element).then_some(element))
        })
    }

    /// Returns `true` if the contained value exists and satisfies `predicate`.
    #[inline]
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        Self: Clone,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.clone()
            .fold_left(false, |found, element| found || predicate(&element))
    }

    /// Returns `true` if there is no contained value or it satisfies `predicate`.
    #[inline]
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        Self: Clone,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.clone()
            .fold_left(true, |holds, element| holds && predicate(&element))
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Foldable for Identity<A> {
    #[inline]
    fn reduce<B, F>(self, seed: B, function: F) -> Identity<B>
    where
        F: FnOnce(B, A) -> B,
    {
        Self::reduce(self, seed, function)
    }

    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(init, self.0)
    }
}
