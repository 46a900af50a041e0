//! Trait-based conversions between standard results, iterators, and
//! `OperationResult`.

use super::OperationResult;
use crate::OperationError;

/// `Ok` becomes a successful result with a payload; `Err` becomes an
/// unsuccessful result with a single error and no payload.
impl<T, E> From<Result<T, E>> for OperationResult<T>
where
    E: Into<OperationError>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(payload) => Self::with_payload(payload),
            Err(error) => Self::failed(error.into()),
        }
    }
}

/// Partition a stream of results without short-circuiting.
///
/// Every `Ok` value lands in the payload, every `Err` in the error list, both
/// in iteration order. The payload is always present, even when empty.
impl<T, E> FromIterator<Result<T, E>> for OperationResult<Vec<T>>
where
    E: Into<OperationError>,
{
    fn from_iter<I: IntoIterator<Item = Result<T, E>>>(iter: I) -> Self {
        let (values, errors) = iter.into_iter().fold(
            (Vec::new(), Vec::new()),
            |(mut values, mut errors), item| {
                match item {
                    Ok(value) => values.push(value),
                    Err(error) => errors.push(error.into()),
                }
                (values, errors)
            },
        );
        let mut result = Self::with_payload(values);
        result.add_errors(errors);
        result
    }
}

impl<T> Extend<OperationError> for OperationResult<T> {
    fn extend<I: IntoIterator<Item = OperationError>>(&mut self, iter: I) {
        self.add_errors(iter);
    }
}
