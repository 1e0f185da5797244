//! Error types for the effect module.

use std::any::Any;

/// Represents a panic raised by the computation wrapped in an `Effect`.
///
/// Returned on the `Left` side by `Effect::attempt`. `Effect::run` never
/// produces this value; it lets the panic propagate.
///
/// # Examples
///
/// ```rust
/// use fantasia::effect::EffectPanic;
///
/// let error = EffectPanic::new("index out of bounds");
/// assert_eq!(format!("{error}"), "effect panicked: index out of bounds");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectPanic {
    message: String,
}

impl EffectPanic {
    /// Creates an error carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the panic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extracts the message from a panic payload caught by `catch_unwind`.
    pub(crate) fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(string) = payload.downcast_ref::<&str>() {
            (*string).to_string()
        } else if let Some(string) = payload.downcast_ref::<String>() {
            string.clone()
        } else {
            "Unknown panic".to_string()
        };
        Self { message }
    }
}

impl std::fmt::Display for EffectPanic {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "effect panicked: {}", self.message)
    }
}

impl std::error::Error for EffectPanic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_panic_display() {
        let error = EffectPanic::new("oops");
        assert_eq!(format!("{error}"), "effect panicked: oops");
        assert_eq!(error.message(), "oops");
    }

    #[test]
    fn test_from_payload_reads_str_and_string() {
        let borrowed: Box<dyn Any + Send> = Box::new("static");
        assert_eq!(EffectPanic::from_payload(borrowed.as_ref()).message(), "static");

        let owned: Box<dyn Any + Send> = Box::new("owned".to_string());
        assert_eq!(EffectPanic::from_payload(owned.as_ref()).message(), "owned");

        let other: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(EffectPanic::from_payload(other.as_ref()).message(), "Unknown panic");
    }

    #[test]
    fn test_effect_panic_is_std_error() {
        fn assert_error<E: std::error::Error>(_error: &E) {}
        assert_error(&EffectPanic::new("test"));
    }
}
