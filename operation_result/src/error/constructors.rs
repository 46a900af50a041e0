//! Conversions from foreign values into `OperationError`.

use super::OperationError;

impl OperationError {
    /// Capture the rendered message of any [`std::error::Error`].
    ///
    /// Only the top-level `Display` output is kept; the source chain is not
    /// walked.
    ///
    /// # Examples
    ///
    /// ```
    /// use operation_result::OperationError;
    ///
    /// let parse = "x".parse::<u8>().unwrap_err();
    /// let err = OperationError::from_source(&parse);
    /// assert_eq!(err.message(), parse.to_string());
    /// ```
    #[must_use]
    pub fn from_source<E>(source: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::new(source.to_string())
    }
}

impl From<&str> for OperationError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for OperationError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
