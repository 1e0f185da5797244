//! Conversions between the sum containers.
//!
//! Moving between shapes never loses a success value. Failures are
//! translated as follows:
//!
//! | from | to | failure becomes |
//! |---|---|---|
//! | `Maybe::Absent` | `Either` | `Left(error)` with the supplied error |
//! | `Maybe::Absent` | `Validation` | `Failure([error])` with the supplied error |
//! | `Either::Left(e)` | `Maybe` | `Absent` |
//! | `Either::Left(e)` | `Validation` | `Failure([e])` |
//! | `Validation::Failure(es)` | `Maybe` | `Absent` |
//! | `Validation::Failure(es)` | `Either` | `Left(es)` |

use super::either::Either;
use super::maybe::Maybe;
use super::non_empty::NonEmptyVec;
use super::validation::Validation;

impl<A> Maybe<A> {
    /// Converts to `Either`, using `error` for an `Absent` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::{Either, Maybe};
    ///
    /// assert_eq!(Maybe::of(1).to_either("missing"), Either::Right(1));
    /// assert_eq!(Maybe::<i32>::Absent.to_either("missing"), Either::Left("missing"));
    /// ```
    #[inline]
    pub fn to_either<E>(self, error: E) -> Either<E, A> {
        match self {
            Self::Present(value) => Either::Right(value),
            Self::Absent => Either::Left(error),
        }
    }

    /// Converts to `Validation`, using `error` for an `Absent` value.
    #[inline]
    pub fn to_validation<E>(self, error: E) -> Validation<E, A> {
        match self {
            Self::Present(value) => Validation::Success(value),
            Self::Absent => Validation::failure(error),
        }
    }
}

impl<E, A> Either<E, A> {
    /// Converts to `Maybe`, discarding a `Left` error.
    #[inline]
    pub fn to_maybe(self) -> Maybe<A> {
        match self {
            Self::Left(_) => Maybe::Absent,
            Self::Right(value) => Maybe::Present(value),
        }
    }

    /// Converts to `Validation`; a `Left` becomes a one-error `Failure`.
    #[inline]
    pub fn to_validation(self) -> Validation<E, A> {
        match self {
            Self::Left(error) => Validation::failure(error),
            Self::Right(value) => Validation::Success(value),
        }
    }
}

impl<E, A> Validation<E, A> {
    /// Converts to `Maybe`, discarding the errors of a `Failure`.
    #[inline]
    pub fn to_maybe(self) -> Maybe<A> {
        match self {
            Self::Failure(_) => Maybe::Absent,
            Self::Success(value) => Maybe::Present(value),
        }
    }

    /// Converts to `Either`, keeping every error on the `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fantasia::control::{Either, NonEmptyVec, Validation};
    ///
    /// let failed: Validation<&str, i32> = Validation::try_failures(vec!["a", "b"]).unwrap();
    /// assert_eq!(failed.to_either(), Either::Left(NonEmptyVec::new("a", vec!["b"])));
    /// ```
    #[inline]
    pub fn to_either(self) -> Either<NonEmptyVec<E>, A> {
        match self {
            Self::Failure(errors) => Either::Left(errors),
            Self::Success(value) => Either::Right(value),
        }
    }
}

impl<E, A> From<Either<E, A>> for Validation<E, A> {
    #[inline]
    fn from(either: Either<E, A>) -> Self {
        either.to_validation()
    }
}

impl<E, A> From<Result<A, E>> for Validation<E, A> {
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(error),
        }
    }
}
