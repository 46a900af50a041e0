//! The `OperationResult` container.
//!
//! An [`OperationResult`] pairs an ordered list of [`OperationError`]s with an
//! optional payload. Success is derived solely from the error list: a result
//! is successful exactly when it holds no errors, whether or not a payload is
//! present. Errors are append-only, so once a result becomes unsuccessful the
//! same instance never becomes successful again.

mod conversions;

use crate::{AggregatedErrors, OperationError};

/// Outcome of an operation: zero or more errors and an optional payload.
///
/// # Examples
///
/// ```
/// use operation_result::{OperationError, OperationResult};
///
/// let mut result = OperationResult::with_payload(42_u32);
/// assert!(result.is_successful());
///
/// result
///     .add_error(OperationError::new("Message #1"))
///     .add_errors([OperationError::new("Message #2")]);
/// assert!(result.is_unsuccessful());
/// assert_eq!(result.error_count(), 2);
/// assert_eq!(result.payload(), Some(&42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult<T> {
    errors: Vec<OperationError>,
    payload: Option<T>,
}

impl<T> Default for OperationResult<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OperationResult<T> {
    /// A successful result with no payload.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            payload: None,
        }
    }

    /// A successful result carrying `payload`.
    #[must_use]
    pub const fn with_payload(payload: T) -> Self {
        Self {
            errors: Vec::new(),
            payload: Some(payload),
        }
    }

    /// A result carrying `payload` and a single error.
    #[must_use]
    pub fn with_error(payload: T, error: OperationError) -> Self {
        Self {
            errors: vec![error],
            payload: Some(payload),
        }
    }

    /// A result carrying `payload` and every error in `errors`, in order.
    ///
    /// The result is successful when `errors` is empty.
    #[must_use]
    pub fn with_errors<I>(payload: T, errors: I) -> Self
    where
        I: IntoIterator<Item = OperationError>,
    {
        Self {
            errors: errors.into_iter().collect(),
            payload: Some(payload),
        }
    }

    /// A result with no payload and a single error.
    #[must_use]
    pub fn failed(error: OperationError) -> Self {
        Self {
            errors: vec![error],
            payload: None,
        }
    }

    /// `true` when no errors have been recorded.
    #[must_use]
    pub const fn is_successful(&self) -> bool {
        self.errors.is_empty()
    }

    /// `true` when at least one error has been recorded.
    #[must_use]
    pub const fn is_unsuccessful(&self) -> bool {
        !self.is_successful()
    }

    /// Recorded errors in insertion order.
    #[must_use]
    pub const fn errors(&self) -> &[OperationError] {
        self.errors.as_slice()
    }

    /// Number of recorded errors.
    #[must_use]
    pub const fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// The payload, if one has been set.
    #[must_use]
    pub const fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    /// Mutable access to the payload, if one has been set.
    #[must_use]
    pub const fn payload_mut(&mut self) -> Option<&mut T> {
        self.payload.as_mut()
    }

    /// `true` when a payload has been set.
    #[must_use]
    pub const fn has_payload(&self) -> bool {
        self.payload.is_some()
    }

    /// Store `payload`, replacing any previous one. Errors are untouched.
    pub fn set_payload(&mut self, payload: T) -> &mut Self {
        self.payload = Some(payload);
        self
    }

    /// Append `error` to the end of the error list.
    pub fn add_error(&mut self, error: OperationError) -> &mut Self {
        self.errors.push(error);
        self.log_appended(1);
        self
    }

    /// Append every error in `errors`, preserving their order.
    ///
    /// An empty input leaves the result unchanged. Duplicates are kept.
    pub fn add_errors<I>(&mut self, errors: I) -> &mut Self
    where
        I: IntoIterator<Item = OperationError>,
    {
        let before = self.errors.len();
        self.errors.extend(errors);
        self.log_appended(self.errors.len().saturating_sub(before));
        self
    }

    /// Append a copy of every error recorded by `other`.
    ///
    /// The payload types need not match, which lets a caller fold the
    /// failures of any sub-operation into its own result.
    ///
    /// # Examples
    ///
    /// ```
    /// use operation_result::{OperationError, OperationResult};
    ///
    /// let child = OperationResult::<u8>::failed(OperationError::new("child failed"));
    /// let mut parent = OperationResult::<String>::new();
    /// parent.add_errors_from(&child);
    /// assert_eq!(parent.errors(), child.errors());
    /// ```
    pub fn add_errors_from<U>(&mut self, other: &OperationResult<U>) -> &mut Self {
        self.add_errors(other.errors.iter().cloned())
    }

    /// Transform the payload, keeping the errors.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> OperationResult<U>
    where
        F: FnOnce(T) -> U,
    {
        OperationResult {
            errors: self.errors,
            payload: self.payload.map(f),
        }
    }

    /// Split the result into its payload and errors.
    #[must_use]
    pub fn into_parts(self) -> (Option<T>, Vec<OperationError>) {
        (self.payload, self.errors)
    }

    /// Consume the result, returning the payload.
    #[must_use]
    pub fn into_payload(self) -> Option<T> {
        self.payload
    }

    /// Consume the result, returning the errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<OperationError> {
        self.errors
    }

    /// Convert into a standard [`Result`] for use with `?`.
    ///
    /// # Errors
    ///
    /// Returns every recorded error, in order, as [`AggregatedErrors`] when
    /// the result is unsuccessful. Any payload is discarded in that case.
    pub fn into_result(self) -> Result<Option<T>, AggregatedErrors> {
        match AggregatedErrors::try_aggregate(self.errors) {
            None => Ok(self.payload),
            Some(aggregated) => Err(aggregated),
        }
    }

    fn log_appended(&self, appended: usize) {
        if appended == 0 {
            return;
        }
        let total = self.errors.len();
        if total == appended {
            tracing::debug!(appended, "operation result became unsuccessful");
        } else {
            tracing::trace!(appended, total, "appended errors to operation result");
        }
    }
}
