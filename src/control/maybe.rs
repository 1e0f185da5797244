//! Maybe type - an optional value.
//!
//! `Maybe<A>` is either `Present(A)` or `Absent`. Every operation on an
//! `Absent` value is a no-op: mapping, chaining, applying and filtering
//! return `Absent` without calling the supplied function, so a pipeline
//! short-circuits at the first missing value.
//!
//! # Examples
//!
//! ```rust
//! use fantasia::control::Maybe;
//!
//! let present = Maybe::of(2).map(|x| x + 1);
//! assert_eq!(present.to_string(), "Present(3)");
//!
//! let absent = Maybe::from_nullable(None::<i32>).map(|x| x + 1);
//! assert_eq!(absent.to_string(), "Absent");
//! assert_eq!(absent.or_some(0), 0);
//! ```

use std::fmt;

use crate::typeclass::{
    Applicative, Catamorphism, Filterable, Foldable, Functor, Monad, Semigroup, TypeConstructor,
    Variant, write_variant,
};

/// An optional value: `Present(A)` or `Absent`.
///
/// # Examples
///
/// ```rust
/// use fantasia::control::Maybe;
///
/// let add = |x: i32| move |y: i32| x + y;
/// let sum = Maybe::of(add).ap(Maybe::of(2)).ap(Maybe::of(3));
/// assert_eq!(sum, Maybe::Present(5));
///
/// let missing = Maybe::of(add).ap(Maybe::of(2)).ap(Maybe::<i32>::Absent);
/// assert_eq!(missing, Maybe::Absent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<A> {
    /// A value is present.
    Present(A),
    /// No value. Carries no payload.
    Absent,
}

impl<A> Maybe<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Lifts a value into `Present`.
    #[inline]
    pub const fn of(value: A) -> Self {
        Self::Present(value)
    }

    /// Creates a `Present` value.
    #[inline]
    pub const fn present(value: A) -> Self {
        Self::Present(value)
    }

    /// Creates an `Absent` value.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Builds a `Maybe` from a value that may be missing: `None` becomes
    /// `Absent`, `Some(a)` becomes `Present(a)`.
    #[inline]
    pub fn from_nullable(value: Option<A>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Present` value.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is `Absent`.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Returns a reference to the value if present.
    #[inline]
    pub const fn value(&self) -> Option<&A> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Converts from `&Maybe<A>` to `Maybe<&A>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Applies `function` to a present value. `Absent` stays `Absent` and
    /// `function` is not called.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Applies the present function to the value held by `other`.
    ///
    /// Yields `Absent` if either side is `Absent`.
    #[inline]
    pub fn ap<B, C>(self, other: Maybe<B>) -> Maybe<C>
    where
        A: FnOnce(B) -> C,
    {
        match (self, other) {
            (Self::Present(function), Maybe::Present(value)) => Maybe::Present(function(value)),
            _ => Maybe::Absent,
        }
    }

    /// Passes a present value to `function` and returns its result.
    /// `Absent` short-circuits without calling `function`.
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Keeps a present value when `predicate` holds, otherwise yields `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Maybe;
    ///
    /// assert_eq!(Maybe::of(4).filter(|x| x % 2 == 0), Maybe::Present(4));
    /// assert_eq!(Maybe::of(3).filter(|x| x % 2 == 0), Maybe::Absent);
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    /// Folds a present value into `seed`. `Absent` stays `Absent`.
    #[inline]
    pub fn reduce<B, F>(self, seed: B, function: F) -> Maybe<B>
    where
        F: FnOnce(B, A) -> B,
    {
        self.map(|value| function(seed, value))
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the present value, or `default` when absent.
    #[inline]
    pub fn or_some(self, default: A) -> A {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns `self` when present, otherwise `alternative`.
    #[inline]
    #[must_use]
    pub fn or_else(self, alternative: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => alternative,
        }
    }
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Self::Absent
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Present(a), Maybe::Present(b)) => Maybe::Present(function(a, b)),
            _ => Maybe::Absent,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.chain(function)
    }
}

impl<A> Foldable for Maybe<A> {
    #[inline]
    fn reduce<B, F>(self, seed: B, function: F) -> Maybe<B>
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
        match self {
            Self::Present(value) => function(init, value),
            Self::Absent => init,
        }
    }
}

impl<A> Filterable for Maybe<A> {
    type Rejection = ();

    #[inline]
    fn filter_or_else<P, R>(self, predicate: P, _rejection: R) -> Self
    where
        P: FnOnce(&A) -> bool,
        R: FnOnce(&A) -> Self::Rejection,
    {
        self.filter(predicate)
    }
}

impl<A> Catamorphism for Maybe<A> {
    type Failure = ();

    #[inline]
    fn cata<B, S, F>(self, on_success: S, on_failure: F) -> B
    where
        S: FnOnce(A) -> B,
        F: FnOnce(()) -> B,
    {
        match self {
            Self::Present(value) => on_success(value),
            Self::Absent => on_failure(()),
        }
    }
}

/// `Absent` is neutral: `Present(a).combine(Present(b))` is
/// `Present(a.combine(b))`, and a single present side wins.
impl<A: Semigroup> Semigroup for Maybe<A> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(left), Self::Present(right)) => Self::Present(left.combine(right)),
            (Self::Present(value), Self::Absent) | (Self::Absent, Self::Present(value)) => {
                Self::Present(value)
            }
            (Self::Absent, Self::Absent) => Self::Absent,
        }
    }
}

impl<A> Variant for Maybe<A> {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Present(_) => "Present",
            Self::Absent => "Absent",
        }
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_variant(
            formatter,
            self.type_name(),
            self.value().map(|value| value as &dyn fmt::Display),
        )
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<A> From<Option<A>> for Maybe<A> {
    #[inline]
    fn from(value: Option<A>) -> Self {
        Self::from_nullable(value)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        maybe.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn present_display() {
        assert_eq!(Maybe::of(6).to_string(), "Present(6)");
        assert_eq!(Maybe::present(6).to_string(), "Present(6)");
    }

    #[rstest]
    fn absent_display_has_no_parentheses() {
        assert_eq!(Maybe::<i32>::absent().to_string(), "Absent");
    }

    #[rstest]
    fn nullable_absent_maps_to_absent() {
        let result = Maybe::from_nullable(None::<String>).map(|value| value + "added");
        assert_eq!(result.to_string(), "Absent");
    }

    #[rstest]
    fn absent_never_calls_functions() {
        let calls = Cell::new(0);
        let absent: Maybe<i32> = Maybe::Absent;
        let result = absent
            .map(|x| {
                calls.set(calls.get() + 1);
                x + 1
            })
            .chain(|x| {
                calls.set(calls.get() + 1);
                Maybe::Present(x)
            })
            .filter(|_| {
                calls.set(calls.get() + 1);
                true
            });
        assert_eq!(result, Maybe::Absent);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn ap_applies_curried_function() {
        let describe = |forename: &'static str| {
            move |surname: &'static str| {
                move |address: &'static str| format!("{forename} {surname} lives in {address}")
            }
        };
        let sentence = Maybe::of(describe)
            .ap(Maybe::of("Tom"))
            .ap(Maybe::of("Baker"))
            .ap(Maybe::of("Dulwich, London"))
            .or_some(String::new());
        assert_eq!(sentence, "Tom Baker lives in Dulwich, London");
    }

    #[rstest]
    fn ap_with_absent_argument_falls_back() {
        let add = |x: i32| move |y: i32| x + y;
        let value = Maybe::of(2).map(add).ap(Maybe::<i32>::Absent).or_some(-1);
        assert_eq!(value, -1);
    }

    #[rstest]
    fn ap_with_absent_receiver_is_absent() {
        let receiver: Maybe<fn(i32) -> i32> = Maybe::Absent;
        assert_eq!(receiver.ap(Maybe::of(1)), Maybe::Absent);
    }

    #[rstest]
    #[case(Maybe::Present(3), 13)]
    #[case(Maybe::Absent, 10)]
    fn fold_left_uses_seed(#[case] maybe: Maybe<i32>, #[case] expected: i32) {
        assert_eq!(maybe.fold_left(10, |acc, x| acc + x), expected);
    }

    #[rstest]
    fn reduce_keeps_shape() {
        assert_eq!(Maybe::of(3).reduce(10, |acc, x| acc + x), Maybe::Present(13));
        assert_eq!(Maybe::<i32>::Absent.reduce(10, |acc, x| acc + x), Maybe::Absent);
    }

    #[rstest]
    fn or_else_prefers_present() {
        assert_eq!(Maybe::of(1).or_else(Maybe::of(2)), Maybe::Present(1));
        assert_eq!(Maybe::Absent.or_else(Maybe::of(2)), Maybe::Present(2));
    }

    #[rstest]
    fn cata_branches() {
        assert_eq!(Maybe::of(2).cata(|x| x * 2, |()| 0), 4);
        assert_eq!(Maybe::<i32>::Absent.cata(|x| x * 2, |()| 0), 0);
    }

    #[rstest]
    fn semigroup_treats_absent_as_neutral() {
        let left = Maybe::of(String::from("a"));
        let right = Maybe::of(String::from("b"));
        assert_eq!(left.clone().combine(right), Maybe::of(String::from("ab")));
        assert_eq!(left.clone().combine(Maybe::Absent), left);
        assert_eq!(Maybe::<String>::Absent.combine(Maybe::Absent), Maybe::Absent);
    }

    #[rstest]
    fn option_round_trip() {
        let maybe: Maybe<i32> = Some(5).into();
        assert_eq!(maybe, Maybe::Present(5));
        let option: Option<i32> = maybe.into();
        assert_eq!(option, Some(5));
        assert_eq!(Maybe::<i32>::default(), Maybe::Absent);
    }

    #[rstest]
    fn shape_predicates() {
        assert!(Maybe::of(1).is_present());
        assert!(Maybe::<i32>::Absent.is_absent());
        assert_eq!(Maybe::of(1).type_name(), "Present");
    }
}
