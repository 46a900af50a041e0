//! The opaque error value stored by operation results.

use thiserror::Error;

/// A single failure reported by an operation.
///
/// The value is a human-readable message and nothing more. Operation results
/// store and count these values; they never inspect the message.
///
/// # Examples
///
/// ```
/// use operation_result::OperationError;
///
/// let err = OperationError::new("Message #1");
/// assert_eq!(err.message(), "Message #1");
/// assert_eq!(err.to_string(), "Message #1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct OperationError {
    message: String,
}

impl OperationError {
    /// Create an error from a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message supplied when the error was created.
    #[must_use]
    pub const fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Consume the error, returning its message.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}
