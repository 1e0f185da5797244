//! Filterable type class - demoting a success shape when a predicate fails.
//!
//! A success shape whose value satisfies the predicate passes through
//! unchanged. Otherwise it is demoted to the failing shape of the container:
//! `Absent` for `Maybe`, `Left(error)` for `Either`, and `Failure([error])`
//! for `Validation`. A container that is already failing is returned as-is
//! and neither the predicate nor the rejection function is called.
//!
//! Since `Either` and `Validation` cannot invent an error, the caller supplies
//! the payload of the failing shape through a rejection function.
//!
//! # Examples
//!
//! ```rust
//! use fantasia::control::Either;
//! use fantasia::typeclass::Filterable;
//!
//! let adult: Either<String, u32> = Either::Right(30);
//! let checked = adult.filter_or_else(|age| *age >= 18, |age| format!("{age} is too young"));
//! assert_eq!(checked, Either::Right(30));
//!
//! let minor: Either<String, u32> = Either::Right(12);
//! let checked = minor.filter_or_else(|age| *age >= 18, |age| format!("{age} is too young"));
//! assert_eq!(checked, Either::Left("12 is too young".to_string()));
//! ```

use super::higher::TypeConstructor;

/// A type class for containers that can be demoted by a predicate.
pub trait Filterable: TypeConstructor + Sized {
    /// The payload needed to build the failing shape.
    ///
    /// `()` for `Maybe`, the error type for `Either` and `Validation`.
    type Rejection;

    /// Keeps a success shape when `predicate` holds, otherwise demotes it to
    /// the failing shape built from `rejection`.
    fn filter_or_else<P, R>(self, predicate: P, rejection: R) -> Self
    where
        P: FnOnce(&Self::Inner) -> bool,
        R: FnOnce(&Self::Inner) -> Self::Rejection;

    /// Like [`Filterable::filter_or_else`] with a ready-made rejection payload.
    #[inline]
    fn filter_or<P>(self, predicate: P, rejection: Self::Rejection) -> Self
    where
        P: FnOnce(&Self::Inner) -> bool,
    {
        self.filter_or_else(predicate, |_| rejection)
    }
}
