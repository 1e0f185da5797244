//! Error types for the control containers.
//!
//! Failures inside the algebra are values (`Absent`, `Left`, `Failure`), not
//! errors. The types here only cover constructors that can be handed input
//! that would break a container invariant.

/// Represents an attempt to build a non-empty sequence from no elements.
///
/// `Validation::Failure` always holds at least one error, so building one
/// from an empty `Vec` is rejected with this error.
///
/// # Examples
///
/// ```rust
/// use fantasia::control::{EmptySequenceError, NonEmptyVec};
///
/// let error = NonEmptyVec::<String>::try_from(Vec::new()).unwrap_err();
/// assert_eq!(error, EmptySequenceError { context: "NonEmptyVec::try_from" });
/// assert_eq!(
///     format!("{error}"),
///     "NonEmptyVec::try_from: a non-empty sequence needs at least one element"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySequenceError {
    /// The constructor that received the empty input.
    pub context: &'static str,
}

impl std::fmt::Display for EmptySequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: a non-empty sequence needs at least one element",
            self.context
        )
    }
}

impl std::error::Error for EmptySequenceError {}
