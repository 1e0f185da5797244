//! Validation type - success or an accumulated list of failures.
//!
//! `Validation<E, A>` is `Success(A)` or `Failure(NonEmptyVec<E>)`. It
//! differs from [`Either`](super::Either) only in [`Validation::ap`]: when the
//! receiver and the argument both fail, their error lists are concatenated
//! (receiver first) instead of keeping only the first. Independent checks
//! composed through `ap` therefore report every failure at once.
//!
//! `map`, `chain` and `filter_or` short-circuit on `Failure`: a `chain`
//! continuation depends on the previous value, so nothing can run after a
//! failure.
//!
//! # Examples
//!
//! ```rust
//! use fantasia::control::Validation;
//!
//! fn positive(value: i32) -> Validation<String, i32> {
//!     if value > 0 {
//!         Validation::success(value)
//!     } else {
//!         Validation::failure(format!("{value} is not positive"))
//!     }
//! }
//!
//! let add = |a: i32| move |b: i32| a + b;
//! let result = Validation::of(add).ap(positive(-1)).ap(positive(-2));
//! assert_eq!(result.to_string(), "Failure(-1 is not positive, -2 is not positive)");
//! ```

use std::fmt;

use super::error::EmptySequenceError;
use super::non_empty::NonEmptyVec;
use crate::typeclass::{
    Applicative, Bifunctor, Catamorphism, Filterable, Foldable, Functor, Monad, Semigroup,
    TypeConstructor, Variant, write_variant,
};

/// A value that is either a success or a non-empty list of failures.
///
/// # Examples
///
/// ```rust
/// use fantasia::control::{NonEmptyVec, Validation};
///
/// let ok: Validation<&str, i32> = Validation::of(3);
/// assert_eq!(ok.map(|x| x * 2), Validation::Success(6));
///
/// let failed: Validation<&str, i32> = Validation::failure("too low");
/// assert_eq!(failed.errors(), Some(&NonEmptyVec::singleton("too low")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Validation<E, A> {
    /// One or more errors, in the order they were produced.
    Failure(NonEmptyVec<E>),
    /// A valid value.
    Success(A),
}

impl<E, A> Validation<E, A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Lifts a value into `Success`.
    #[inline]
    pub const fn of(value: A) -> Self {
        Self::Success(value)
    }

    /// Creates a `Success` value.
    #[inline]
    pub const fn success(value: A) -> Self {
        Self::Success(value)
    }

    /// Creates a `Failure` holding a single error.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(NonEmptyVec::singleton(error))
    }

    /// Creates a `Failure` holding every error in `errors`.
    #[inline]
    pub const fn failures(errors: NonEmptyVec<E>) -> Self {
        Self::Failure(errors)
    }

    /// Creates a `Failure` from a plain `Vec` of errors.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySequenceError`] when `errors` is empty, since a failure
    /// must carry at least one error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Validation;
    ///
    /// let failed = Validation::<&str, i32>::try_failures(vec!["a", "b"]).unwrap();
    /// assert_eq!(failed.to_string(), "Failure(a, b)");
    /// assert!(Validation::<&str, i32>::try_failures(vec![]).is_err());
    /// ```
    pub fn try_failures(errors: Vec<E>) -> Result<Self, EmptySequenceError> {
        NonEmptyVec::from_vec(errors)
            .map(Self::Failure)
            .ok_or(EmptySequenceError {
                context: "Validation::try_failures",
            })
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns the accumulated errors of a `Failure`.
    #[inline]
    pub const fn errors(&self) -> Option<&NonEmptyVec<E>> {
        match self {
            Self::Failure(errors) => Some(errors),
            Self::Success(_) => None,
        }
    }

    /// Returns a reference to the value of a `Success`.
    #[inline]
    pub const fn value(&self) -> Option<&A> {
        match self {
            Self::Failure(_) => None,
            Self::Success(value) => Some(value),
        }
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Applies `function` to a `Success` value. A `Failure` keeps its errors
    /// and `function` is not called.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Failure(errors) => Validation::Failure(errors),
            Self::Success(value) => Validation::Success(function(value)),
        }
    }

    /// Applies the `Success` function to the value held by `other`,
    /// accumulating failures.
    ///
    /// | receiver | argument | result |
    /// |---|---|---|
    /// | `Success(f)` | `Success(a)` | `Success(f(a))` |
    /// | `Success(_)` | `Failure(e)` | `Failure(e)` |
    /// | `Failure(e)` | `Success(_)` | `Failure(e)` |
    /// | `Failure(e1)` | `Failure(e2)` | `Failure(e1 ++ e2)` |
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Validation;
    ///
    /// let add = |a: i32| move |b: i32| a + b;
    /// let first: Validation<&str, i32> = Validation::failure("e1");
    /// let second: Validation<&str, i32> = Validation::failure("e2");
    /// let result = Validation::of(add).ap(first).ap(second);
    /// assert_eq!(result.errors().map(|errors| errors.len()), Some(2));
    /// ```
    #[inline]
    pub fn ap<B, C>(self, other: Validation<E, B>) -> Validation<E, C>
    where
        A: FnOnce(B) -> C,
    {
        match (self, other) {
            (Self::Success(function), Validation::Success(value)) => {
                Validation::Success(function(value))
            }
            (Self::Failure(left), Validation::Failure(right)) => {
                Validation::Failure(left.combine(right))
            }
            (Self::Failure(errors), Validation::Success(_))
            | (Self::Success(_), Validation::Failure(errors)) => Validation::Failure(errors),
        }
    }

    /// Passes a `Success` value to `function` and returns its result.
    /// A `Failure` short-circuits without calling `function`.
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> Validation<E, B>,
    {
        match self {
            Self::Failure(errors) => Validation::Failure(errors),
            Self::Success(value) => function(value),
        }
    }

    /// Keeps a `Success` value when `predicate` holds, otherwise demotes it
    /// to `Failure([error])`.
    #[inline]
    #[must_use]
    pub fn filter_or<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        Filterable::filter_or(self, predicate, error)
    }

    /// Folds a `Success` value into `seed`. A `Failure` stays a `Failure`.
    #[inline]
    pub fn reduce<B, F>(self, seed: B, function: F) -> Validation<E, B>
    where
        F: FnOnce(B, A) -> B,
    {
        self.map(|value| function(seed, value))
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the `Success` value, or `default` for a `Failure`.
    #[inline]
    pub fn or_some(self, default: A) -> A {
        match self {
            Self::Failure(_) => default,
            Self::Success(value) => value,
        }
    }

    /// Returns `self` if it is a `Success`, otherwise `alternative`.
    #[inline]
    #[must_use]
    pub fn or_else(self, alternative: Self) -> Self {
        match self {
            Self::Failure(_) => alternative,
            Self::Success(_) => self,
        }
    }

    /// Converts into a `Result` carrying every error on failure.
    #[inline]
    pub fn into_result(self) -> Result<A, NonEmptyVec<E>> {
        match self {
            Self::Failure(errors) => Err(errors),
            Self::Success(value) => Ok(value),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<E, A> TypeConstructor for Validation<E, A> {
    type Inner = A;
    type WithType<B> = Validation<E, B>;
}

impl<E: Clone, A> Functor for Validation<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Validation<E, B>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Self::Failure(errors) => Validation::Failure(errors.clone()),
            Self::Success(value) => Validation::Success(function(value)),
        }
    }
}

impl<E: Clone, A> Applicative for Validation<E, A> {
    #[inline]
    fn pure<B>(value: B) -> Validation<E, B> {
        Validation::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Validation<E, B>, function: F) -> Validation<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.map(|a| move |b| function(a, b)).ap(other)
    }

    #[inline]
    fn apply<B, Output>(self, other: Validation<E, B>) -> Validation<E, Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}

impl<E: Clone, A> Monad for Validation<E, A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> Validation<E, B>,
    {
        self.chain(function)
    }
}

impl<E, A> Foldable for Validation<E, A> {
    #[inline]
    fn reduce<B, F>(self, seed: B, function: F) -> Validation<E, B>
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
            Self::Failure(_) => init,
            Self::Success(value) => function(init, value),
        }
    }
}

impl<E, A> Filterable for Validation<E, A> {
    type Rejection = E;

    #[inline]
    fn filter_or_else<P, R>(self, predicate: P, rejection: R) -> Self
    where
        P: FnOnce(&A) -> bool,
        R: FnOnce(&A) -> E,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::failure(rejection(&value))
                }
            }
            Self::Failure(errors) => Self::Failure(errors),
        }
    }
}

impl<E, A> Bifunctor<E, A> for Validation<E, A> {
    type Target<F, B> = Validation<F, B>;

    /// The failure function is applied to every accumulated error in order.
    #[inline]
    fn bimap<B, F, S, G>(self, on_success: S, on_failure: G) -> Validation<F, B>
    where
        S: FnOnce(A) -> B,
        G: FnMut(E) -> F,
    {
        match self {
            Self::Failure(errors) => Validation::Failure(errors.map(on_failure)),
            Self::Success(value) => Validation::Success(on_success(value)),
        }
    }
}

impl<E, A> Catamorphism for Validation<E, A> {
    type Failure = NonEmptyVec<E>;

    #[inline]
    fn cata<B, S, F>(self, on_success: S, on_failure: F) -> B
    where
        S: FnOnce(A) -> B,
        F: FnOnce(NonEmptyVec<E>) -> B,
    {
        match self {
            Self::Failure(errors) => on_failure(errors),
            Self::Success(value) => on_success(value),
        }
    }
}

/// Two successes combine their values; otherwise the errors of every
/// failing operand are concatenated and the result is a `Failure`.
impl<E, A: Semigroup> Semigroup for Validation<E, A> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Success(left), Self::Success(right)) => Self::Success(left.combine(right)),
            (Self::Failure(left), Self::Failure(right)) => Self::Failure(left.combine(right)),
            (failure @ Self::Failure(_), Self::Success(_))
            | (Self::Success(_), failure @ Self::Failure(_)) => failure,
        }
    }
}

impl<E, A> Variant for Validation<E, A> {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Failure(_) => "Failure",
            Self::Success(_) => "Success",
        }
    }
}

/// Renders `Success(value)` or `Failure(e1, e2, ...)`.
///
/// Both `E` and `A` must implement `Display`, even to render a `Failure`.
/// When the success type has no `Display`, render the errors through
/// [`Validation::errors`] and [`NonEmptyVec::join_with`] instead.
impl<E: fmt::Display, A: fmt::Display> fmt::Display for Validation<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let payload: &dyn fmt::Display = match self {
            Self::Failure(errors) => errors,
            Self::Success(value) => value,
        };
        write_variant(formatter, self.type_name(), Some(payload))
    }
}
