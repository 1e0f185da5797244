//! Sum containers for optional and failing computations.
//!
//! This module provides the containers that carry a value, its absence, or
//! an error:
//!
//! - [`Maybe`]: `Present(A)` or `Absent`
//! - [`Either`]: `Right(A)` or `Left(E)`, keeps the first error
//! - [`Validation`]: `Success(A)` or `Failure(NonEmptyVec<E>)`, accumulates
//!   independent errors through `ap`
//! - [`NonEmptyVec`]: the error list carried by `Validation::Failure`
//!
//! Each container also converts into the others; see the conversion methods
//! `to_either`, `to_maybe` and `to_validation`.
//!
//! # Examples
//!
//! ## Short-circuit versus accumulation
//!
//! ```rust
//! use fantasia::control::{Either, Validation};
//!
//! let add = |a: i32| move |b: i32| a + b;
//!
//! let either = Either::of(add)
//!     .ap(Either::<&str, i32>::Left("e1"))
//!     .ap(Either::Left("e2"));
//! assert_eq!(either.to_string(), "Left(e1)");
//!
//! let validation = Validation::of(add)
//!     .ap(Validation::<&str, i32>::failure("e1"))
//!     .ap(Validation::failure("e2"));
//! assert_eq!(validation.to_string(), "Failure(e1, e2)");
//! ```

mod conversion;
mod either;
mod error;
mod maybe;
mod non_empty;
mod validation;

pub use either::Either;
pub use error::EmptySequenceError;
pub use maybe::Maybe;
pub use non_empty::NonEmptyVec;
pub use validation::Validation;

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync);
static_assertions::assert_impl_all!(Either<String, i32>: Send, Sync);
static_assertions::assert_impl_all!(Validation<String, i32>: Send, Sync);
static_assertions::assert_impl_all!(NonEmptyVec<String>: Send, Sync);
