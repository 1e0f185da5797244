//! Deferred computations.
//!
//! [`Effect`] wraps a nullary computation and composes new computations
//! around it without running anything. The only triggers are
//! [`Effect::run`] and the forcing helpers `or_some`/`or_else` on
//! `Effect<Option<A>>`.
//!
//! ```rust
//! use fantasia::effect::Effect;
//!
//! let effect = Effect::of(10)
//!     .map(|x| x * 2)
//!     .chain(|x| Effect::of(x + 1));
//!
//! assert_eq!(effect.run(), 21);
//! assert_eq!(effect.to_string(), "Effect(<deferred>)");
//! ```
//!
//! # Panics
//!
//! A panic inside the wrapped computation propagates out of `run`.
//! [`Effect::attempt`] turns it into `Either::Left(EffectPanic)` instead.

mod deferred;
mod error;

pub use deferred::Effect;
pub use error::EffectPanic;

static_assertions::assert_not_impl_any!(Effect<i32>: Send, Sync);
static_assertions::assert_impl_all!(EffectPanic: Send, Sync, std::error::Error);
