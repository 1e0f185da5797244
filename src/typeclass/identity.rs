//! Identity wrapper type - the identity functor.
//!
//! This module provides the `Identity` type, which is the simplest possible
//! wrapper around a value. It has exactly one shape and no failure case,
//! which makes it the baseline model for checking the type class laws.

use std::fmt;

use super::{TypeConstructor, Variant, write_variant};

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use fantasia::typeclass::Identity;
///
/// let ratio = Identity::of(6)
///     .map(|wrong| wrong + 4)
///     .map(|total| 4.0 / f64::from(total))
///     .map(|ratio| format!("{}%", (100.0 * ratio).round()));
/// assert_eq!(ratio.into_inner(), "40%");
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::typeclass::Identity;
    ///
    /// let x = Identity::new(42);
    /// assert_eq!(x.into_inner(), 42);
    /// ```
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Lifts a value into `Identity`. Same as [`Identity::new`].
    #[inline]
    pub const fn of(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }

    /// Applies `function` to the wrapped value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::typeclass::Identity;
    ///
    /// assert_eq!(Identity(6).map(|x| x + 4), Identity(10));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }

    /// Applies the wrapped function to the value held by `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::typeclass::Identity;
    ///
    /// let add = Identity(|x: i32| move |y: i32| x + y);
    /// assert_eq!(add.ap(Identity(2)).ap(Identity(3)), Identity(5));
    /// ```
    #[inline]
    pub fn ap<B, C>(self, other: Identity<B>) -> Identity<C>
    where
        A: FnOnce(B) -> C,
    {
        Identity((self.0)(other.0))
    }

    /// Passes the wrapped value to `function` and returns its result.
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }

    /// Folds the wrapped value into `seed`, keeping the `Identity` shape.
    #[inline]
    pub fn reduce<B, F>(self, seed: B, function: F) -> Identity<B>
    where
        F: FnOnce(B, A) -> B,
    {
        Identity(function(seed, self.0))
    }

    /// Returns the wrapped value. `Identity` is never empty, so `_default`
    /// is discarded.
    #[inline]
    pub fn or_some(self, _default: A) -> A {
        self.0
    }

    /// Returns `self`. `Identity` is never empty, so `_alternative` is
    /// discarded.
    #[inline]
    #[must_use]
    pub fn or_else(self, _alternative: Self) -> Self {
        self
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> Variant for Identity<A> {
    fn type_name(&self) -> &'static str {
        "Identity"
    }
}

impl<A: fmt::Display> fmt::Display for Identity<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_variant(formatter, self.type_name(), Some(&self.0))
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
