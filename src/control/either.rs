//! Either type - success or a distinguished error.
//!
//! `Either<E, A>` is a `Left(E)` carrying an error or a `Right(A)` carrying a
//! success value. It is right-biased: `map`, `ap`, `chain` and `filter_or`
//! operate on `Right` and pass a `Left` through unchanged without calling
//! the supplied function. The first `Left` reached wins.
//!
//! # Examples
//!
//! ```rust
//! use fantasia::control::Either;
//!
//! fn divide(numerator: f64, denominator: f64) -> Either<String, f64> {
//!     if denominator == 0.0 {
//!         Either::Left("Division by 0.".to_string())
//!     } else {
//!         Either::Right(numerator / denominator)
//!     }
//! }
//!
//! assert_eq!(divide(3.0, 0.0).map(|v| v + 1.0).to_string(), "Left(Division by 0.)");
//! assert_eq!(divide(3.0, 1.0).map(|v| v + 1.0).to_string(), "Right(4)");
//! ```

use std::fmt;

use crate::typeclass::{
    Applicative, Bifunctor, Catamorphism, Filterable, Foldable, Functor, Monad, TypeConstructor,
    Variant, write_variant,
};

/// A value that is either an error (`Left`) or a success (`Right`).
///
/// Exactly one side is populated and the side never changes after
/// construction; every operation returns a new value.
///
/// # Examples
///
/// ```rust
/// use fantasia::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
///
/// let failure: Either<String, i32> = Either::Left("error".to_string());
/// assert_eq!(failure.map(|x| x * 2), Either::Left("error".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<E, A> {
    /// The failing side, carrying an error.
    Left(E),
    /// The succeeding side, carrying a value.
    Right(A),
}

impl<E, A> Either<E, A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Lifts a value into `Right`.
    #[inline]
    pub const fn of(value: A) -> Self {
        Self::Right(value)
    }

    /// Creates a `Left` value.
    #[inline]
    pub const fn left(error: E) -> Self {
        Self::Left(error)
    }

    /// Creates a `Right` value.
    #[inline]
    pub const fn right(value: A) -> Self {
        Self::Right(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the error if this is `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.error(), Some(&42));
    /// assert_eq!(left.value(), None);
    /// ```
    #[inline]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Left(error) => Some(error),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the value if this is `Right`.
    #[inline]
    pub const fn value(&self) -> Option<&A> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Converts from `&Either<E, A>` to `Either<&E, &A>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&E, &A> {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Applies `function` to a `Right` value. A `Left` is returned unchanged
    /// and `function` is not called.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies the `Right` function to the value held by `other`.
    ///
    /// A `Left` receiver wins over a `Left` argument: the first `Left`
    /// encountered is returned and errors are never combined.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Either;
    ///
    /// let receiver: Either<&str, fn(i32) -> i32> = Either::Left("receiver");
    /// let argument: Either<&str, i32> = Either::Left("argument");
    /// assert_eq!(receiver.ap(argument), Either::Left("receiver"));
    /// ```
    #[inline]
    pub fn ap<B, C>(self, other: Either<E, B>) -> Either<E, C>
    where
        A: FnOnce(B) -> C,
    {
        match (self, other) {
            (Self::Right(function), Either::Right(value)) => Either::Right(function(value)),
            (Self::Left(error), _) | (Self::Right(_), Either::Left(error)) => Either::Left(error),
        }
    }

    /// Passes a `Right` value to `function` and returns its result.
    /// A `Left` short-circuits without calling `function`.
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => function(value),
        }
    }

    /// Keeps a `Right` value when `predicate` holds, otherwise demotes it to
    /// `Left(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Either;
    ///
    /// let even: Either<&str, i32> = Either::Right(4);
    /// assert_eq!(even.filter_or(|x| x % 2 == 0, "odd"), Either::Right(4));
    ///
    /// let odd: Either<&str, i32> = Either::Right(3);
    /// assert_eq!(odd.filter_or(|x| x % 2 == 0, "odd"), Either::Left("odd"));
    /// ```
    #[inline]
    #[must_use]
    pub fn filter_or<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        Filterable::filter_or(self, predicate, error)
    }

    /// Folds a `Right` value into `seed`. A `Left` stays `Left`.
    #[inline]
    pub fn reduce<B, F>(self, seed: B, function: F) -> Either<E, B>
    where
        F: FnOnce(B, A) -> B,
    {
        self.map(|value| function(seed, value))
    }

    /// Swaps the Left and Right variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.swap(), Either::Right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<A, E> {
        match self {
            Self::Left(error) => Either::Right(error),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the `Right` value, or `default` for a `Left`.
    #[inline]
    pub fn or_some(self, default: A) -> A {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Returns `self` if it is `Right`, otherwise `alternative`.
    #[inline]
    #[must_use]
    pub fn or_else(self, alternative: Self) -> Self {
        match self {
            Self::Left(_) => alternative,
            Self::Right(_) => self,
        }
    }

    /// Converts into the standard library's `Result`.
    #[inline]
    pub fn into_result(self) -> Result<A, E> {
        match self {
            Self::Left(error) => Err(error),
            Self::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<E, A> TypeConstructor for Either<E, A> {
    type Inner = A;
    type WithType<B> = Either<E, B>;
}

impl<E: Clone, A> Functor for Either<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<E, B>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Self::Left(error) => Either::Left(error.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<E: Clone, A> Applicative for Either<E, A> {
    #[inline]
    fn pure<B>(value: B) -> Either<E, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<E, B>, function: F) -> Either<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Self::Left(error), _) | (Self::Right(_), Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<E, B>) -> Either<E, Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}

impl<E: Clone, A> Monad for Either<E, A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        self.chain(function)
    }
}

impl<E, A> Foldable for Either<E, A> {
    #[inline]
    fn reduce<B, F>(self, seed: B, function: F) -> Either<E, B>
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
            Self::Left(_) => init,
            Self::Right(value) => function(init, value),
        }
    }
}

impl<E, A> Filterable for Either<E, A> {
    type Rejection = E;

    #[inline]
    fn filter_or_else<P, R>(self, predicate: P, rejection: R) -> Self
    where
        P: FnOnce(&A) -> bool,
        R: FnOnce(&A) -> E,
    {
        match self {
            Self::Right(value) => {
                if predicate(&value) {
                    Self::Right(value)
                } else {
                    Self::Left(rejection(&value))
                }
            }
            Self::Left(error) => Self::Left(error),
        }
    }
}

impl<E, A> Bifunctor<E, A> for Either<E, A> {
    type Target<F, B> = Either<F, B>;

    #[inline]
    fn bimap<B, F, S, G>(self, on_success: S, mut on_failure: G) -> Either<F, B>
    where
        S: FnOnce(A) -> B,
        G: FnMut(E) -> F,
    {
        match self {
            Self::Left(error) => Either::Left(on_failure(error)),
            Self::Right(value) => Either::Right(on_success(value)),
        }
    }
}

impl<E, A> Catamorphism for Either<E, A> {
    type Failure = E;

    #[inline]
    fn cata<B, S, F>(self, on_success: S, on_failure: F) -> B
    where
        S: FnOnce(A) -> B,
        F: FnOnce(E) -> B,
    {
        match self {
            Self::Left(error) => on_failure(error),
            Self::Right(value) => on_success(value),
        }
    }
}

impl<E, A> Variant for Either<E, A> {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Left(_) => "Left",
            Self::Right(_) => "Right",
        }
    }
}

impl<E: fmt::Display, A: fmt::Display> fmt::Display for Either<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let payload: &dyn fmt::Display = match self {
            Self::Left(error) => error,
            Self::Right(value) => value,
        };
        write_variant(formatter, self.type_name(), Some(payload))
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<E, A> From<Result<A, E>> for Either<E, A> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(a)` becomes `Right(a)`, and `Err(e)` becomes `Left(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::Either;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let either: Either<String, i32> = ok.into();
    /// assert_eq!(either, Either::Right(42));
    /// ```
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<E, A> From<Either<E, A>> for Result<A, E> {
    #[inline]
    fn from(either: Either<E, A>) -> Self {
        either.into_result()
    }
}
