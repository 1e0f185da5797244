//! Applicative type class - lifting values and applying contained functions.
//!
//! `Applicative` extends [`Functor`] with:
//!
//! - `pure`: lift a bare value into the minimal success shape
//! - `apply`: apply a contained function to a contained value
//! - `map2`: combine two independent containers with a binary function
//!
//! How failures combine is the one place the containers differ:
//!
//! - `Maybe` and `Either` propagate the first failing side (the receiver wins)
//! - `Validation` concatenates the error sequences of both sides
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fantasia::control::Maybe;
//! use fantasia::typeclass::Applicative;
//!
//! let x: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(x, Maybe::Present(42));
//!
//! let sum = Maybe::Present(3).map2(Maybe::Present(4), |x, y| x + y);
//! assert_eq!(sum, Maybe::Present(7));
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for functors that can lift values and apply contained functions.
///
/// # Examples
///
/// ```rust
/// use fantasia::control::Validation;
/// use fantasia::typeclass::Applicative;
///
/// let left: Validation<&str, i32> = Validation::failure("too small");
/// let right: Validation<&str, i32> = Validation::failure("too large");
/// let both = left.map2(right, |x, y| x + y);
/// assert_eq!(both.errors().map(|errors| errors.len()), Some(2));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the minimal success shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Either;
    /// use fantasia::typeclass::Applicative;
    ///
    /// let x: Either<String, i32> = <Either<String, ()>>::pure(42);
    /// assert_eq!(x, Either::Right(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Arguments
    ///
    /// * `other` - The second applicative value
    /// * `function` - A function that takes both inner values and produces a result
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    ///
    /// This is equivalent to `map2(other, |a, b| (a, b))`.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates two applicatives and keeps the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates two applicatives and keeps the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Maybe;
    /// use fantasia::typeclass::Applicative;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::Present(|x| x + 1);
    /// assert_eq!(function.apply(Maybe::Present(5)), Maybe::Present(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}
