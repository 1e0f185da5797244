//! # fantasia
//!
//! Algebraic container types for Rust: generic wrappers that carry a value,
//! its absence, or an error, and expose a fixed set of composable, lawful
//! operations.
//!
//! ## Overview
//!
//! - **Type Classes**: Functor, Applicative, Monad, Foldable, Setoid,
//!   Filterable, Bifunctor, Catamorphism, Semigroup
//! - **Identity**: the trivial single-value container
//! - **Maybe**: `Present(A)` or `Absent`, short-circuits on `Absent`
//! - **Either**: `Left(E)` or `Right(A)`, short-circuits on `Left`
//! - **Validation**: `Failure(errors)` or `Success(A)`, accumulates failures
//!   through `ap`
//! - **Effect**: a deferred nullary computation that only runs when asked
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and `Identity`
//! - `control`: `Maybe`, `Either`, `Validation` and their conversions
//! - `effect`: The deferred `Effect`
//! - `tracing`: Emit `tracing` events when effects are forced
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fantasia::prelude::*;
//!
//! let total = Identity::of(6).map(|count| count + 4);
//! assert_eq!(total.to_string(), "Identity(10)");
//!
//! let missing: Maybe<i32> = Maybe::from(None);
//! assert_eq!(missing.map(|value| value + 1).to_string(), "Absent");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fantasia::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
