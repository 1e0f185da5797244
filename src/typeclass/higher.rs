//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation for emulating Higher-Kinded Types (HKT)
//! in Rust using Generic Associated Types (GAT). Every container in the crate
//! implements [`TypeConstructor`] so the type classes can talk about "the same
//! container holding a different type".
//!
//! # Example
//!
//! ```rust
//! use fantasia::typeclass::{Identity, TypeConstructor};
//!
//! fn transform_type<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let number = Identity(42);
//! let text: Identity<String> = transform_type(number);
//! assert_eq!(text, Identity(String::new()));
//! ```

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated Types.
/// It allows abstracting over type constructors like `Maybe<_>`,
/// `Either<E, _>` and `Validation<E, _>`.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Maybe<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Either<String, i32>`, `WithType<u8>` would be
    /// `Either<String, u8>`: the failure side is fixed.
    type WithType<B>: TypeConstructor<Inner = B>;
}
