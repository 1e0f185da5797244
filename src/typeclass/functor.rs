//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents containers that
//! can have a function applied to their value while preserving their shape.
//! On a failing or absent shape the container is returned unchanged and the
//! function is never called.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fantasia::control::Maybe;
//! use fantasia::typeclass::Functor;
//!
//! let present = Maybe::Present(5);
//! assert_eq!(present.fmap(|n| n.to_string()), Maybe::Present("5".to_string()));
//!
//! let absent: Maybe<i32> = Maybe::Absent;
//! assert_eq!(absent.fmap(|n| n.to_string()), Maybe::Absent);
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for types that can have a function mapped over their contents.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use fantasia::typeclass::{Functor, Identity};
///
/// let x = Identity(5);
/// let y: Identity<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Identity("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// A new functor of the same shape with the transformed value
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the functor must stay available afterwards. Failure
    /// payloads are cloned into the result.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Either;
    /// use fantasia::typeclass::Functor;
    ///
    /// let right: Either<String, i32> = Either::Right(5);
    /// assert_eq!(right.replace("replaced"), Either::Right("replaced"));
    ///
    /// let left: Either<String, i32> = Either::Left("error".to_string());
    /// assert_eq!(left.replace("replaced"), Either::Left("error".to_string()));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnOnce(&A) -> B,
    {
        Identity(function(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_fmap_transforms() {
        let x = Identity(5);
        assert_eq!(x.fmap(|n| n * 2), Identity(10));
    }

    #[rstest]
    fn identity_fmap_ref_keeps_original() {
        let x = Identity("hello".to_string());
        let y = x.fmap_ref(|s| s.len());
        assert_eq!(y, Identity(5));
        assert_eq!(x, Identity("hello".to_string()));
    }

    #[rstest]
    fn identity_replace_and_void() {
        assert_eq!(Identity(1).replace("a"), Identity("a"));
        assert_eq!(Identity(1).void(), Identity(()));
    }

    #[rstest]
    fn identity_identity_law() {
        let value = Identity(42);
        assert_eq!(value.fmap(|x| x), value);
    }

    #[rstest]
    fn identity_composition_law() {
        let function1 = |n: i32| n + 1;
        let function2 = |n: i32| n * 2;
        let left = Identity(5).fmap(function1).fmap(function2);
        let right = Identity(5).fmap(|x| function2(function1(x)));
        assert_eq!(left, right);
    }
}
