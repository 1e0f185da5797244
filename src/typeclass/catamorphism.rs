//! Catamorphism type class - eliminating a container to a plain value.
//!
//! `cata` branches on the current shape and applies exactly one of two
//! functions; no intermediate container is produced. The failure branch
//! receives the whole failure payload:
//!
//! | Container | `Failure` payload |
//! |---|---|
//! | `Identity<A>` | `Infallible` (the branch cannot run) |
//! | `Maybe<A>` | `()` |
//! | `Either<E, A>` | `E` |
//! | `Validation<E, A>` | `NonEmptyVec<E>`, every error in order |
//!
//! # Examples
//!
//! ```rust
//! use fantasia::control::Validation;
//! use fantasia::typeclass::Catamorphism;
//!
//! let tax: Validation<&str, i32> = Validation::failure("tax");
//! let discount: Validation<&str, i32> = Validation::failure("discount");
//! let failed = Validation::of(|a: i32| move |b: i32| a + b).ap(tax).ap(discount);
//! let report = failed.cata(|value| value.to_string(), |errors| errors.join_with(" & "));
//! assert_eq!(report, "tax & discount");
//! ```

use std::convert::Infallible;

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for containers that can be eliminated by case analysis.
pub trait Catamorphism: TypeConstructor + Sized {
    /// The payload handed to the failure branch.
    type Failure;

    /// Applies `on_success` to the success payload or `on_failure` to the
    /// failure payload and returns the result.
    fn cata<B, S, F>(self, on_success: S, on_failure: F) -> B
    where
        S: FnOnce(Self::Inner) -> B,
        F: FnOnce(Self::Failure) -> B;
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Catamorphism for Identity<A> {
    type Failure = Infallible;

    #[inline]
    fn cata<B, S, F>(self, on_success: S, _on_failure: F) -> B
    where
        S: FnOnce(A) -> B,
        F: FnOnce(Infallible) -> B,
    {
        on_success(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_cata_takes_success_branch() {
        let result = Identity(6).cata(|x| x * 7, |never| match never {});
        assert_eq!(result, 42);
    }
}
