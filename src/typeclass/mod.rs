//! Type class traits for the algebraic containers.
//!
//! This module provides the capability protocols every container in the
//! crate is built against:
//!
//! - [`Functor`]: Mapping over the contained value
//! - [`Applicative`]: Lifting values and applying contained functions
//! - [`Monad`]: Sequencing dependent computations
//! - [`Foldable`]: Folding the contained value (if any) into an accumulator
//! - [`Setoid`]: Structural equality
//! - [`Filterable`]: Demoting a success shape when a predicate fails
//! - [`Bifunctor`]: Mapping the success side or the failure side
//! - [`Catamorphism`]: Eliminating a container to a plain value
//! - [`Semigroup`]: Associative combination of failure payloads
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! The traits use Generic Associated Types (GAT) through
//! [`TypeConstructor`] so that `map` on a `Maybe<A>` can name `Maybe<B>`.
//!
//! ## Foundation Types
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Variant`]: Names the current shape of a container
//! - [`Identity`]: Identity wrapper type (identity functor)
//!
//! # Examples
//!
//! ## Using Semigroup
//!
//! ```rust
//! use fantasia::typeclass::Semigroup;
//!
//! let errors = vec!["tax"].combine(vec!["discount"]);
//! assert_eq!(errors, vec!["tax", "discount"]);
//! ```
//!
//! ## Using Applicative
//!
//! ```rust
//! use fantasia::typeclass::{Applicative, Identity};
//!
//! let lifted: Identity<i32> = <Identity<()>>::pure(42);
//! assert_eq!(lifted, Identity(42));
//!
//! let sum = Identity(1).map2(Identity(2), |x, y| x + y);
//! assert_eq!(sum, Identity(3));
//! ```

mod applicative;
mod bifunctor;
mod catamorphism;
mod filterable;
mod foldable;
mod functor;
mod higher;
mod identity;
mod monad;
mod semigroup;
mod setoid;
mod variant;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use catamorphism::Catamorphism;
pub use filterable::Filterable;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use semigroup::Semigroup;
pub use setoid::Setoid;
pub use variant::Variant;

pub(crate) use variant::write_variant;
