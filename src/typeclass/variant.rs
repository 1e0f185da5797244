//! Variant naming and the shared textual representation.
//!
//! Every container reports the name of its current shape through
//! [`Variant::type_name`]. The name is a constant chosen when the value is
//! constructed, never derived from runtime type information.
//!
//! The `Display` implementations of all containers go through
//! [`write_variant`], so the rendering rule lives in one place:
//!
//! - payload-bearing shapes render as `Name(payload)`
//! - empty shapes render as the bare `Name`
//!
//! # Examples
//!
//! ```rust
//! use fantasia::typeclass::{Identity, Variant};
//!
//! let wrapped = Identity(6);
//! assert_eq!(wrapped.type_name(), "Identity");
//! assert_eq!(wrapped.to_string(), "Identity(6)");
//! ```

use std::fmt;

/// A type class for containers that can name their current shape.
///
/// # Examples
///
/// ```rust
/// use fantasia::control::Maybe;
/// use fantasia::typeclass::Variant;
///
/// assert_eq!(Maybe::Present(1).type_name(), "Present");
/// assert_eq!(Maybe::<i32>::Absent.type_name(), "Absent");
/// ```
pub trait Variant {
    /// Returns the name of the current shape, e.g. `"Left"` or `"Success"`.
    fn type_name(&self) -> &'static str;
}

/// Writes `name(payload)`, or the bare `name` when there is no payload.
pub(crate) fn write_variant(
    formatter: &mut fmt::Formatter<'_>,
    name: &str,
    payload: Option<&dyn fmt::Display>,
) -> fmt::Result {
    match payload {
        Some(payload) => write!(formatter, "{name}({payload})"),
        None => formatter.write_str(name),
    }
}
