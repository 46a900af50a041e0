//! Aggregation container produced when an unsuccessful result is converted
//! into a standard `Result`.

use std::{error::Error, fmt};

use super::OperationError;

/// Non-empty, ordered collection of [`OperationError`]s.
///
/// # Examples
///
/// ```
/// use operation_result::{AggregatedErrors, OperationError};
///
/// let agg = AggregatedErrors::try_aggregate([
///     OperationError::new("disk full"),
///     OperationError::new("quota exceeded"),
/// ])
/// .expect("two errors were supplied");
/// assert_eq!(agg.len(), 2);
/// assert_eq!(agg.to_string(), "1: disk full\n2: quota exceeded");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedErrors(Vec<OperationError>);

impl AggregatedErrors {
    /// Collect `errors` into an aggregation.
    ///
    /// Returns `None` when no errors are supplied, so an aggregation always
    /// holds at least one entry.
    #[must_use]
    pub fn try_aggregate<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = OperationError>,
    {
        let collected: Vec<OperationError> = errors.into_iter().collect();
        if collected.is_empty() {
            None
        } else {
            Some(Self(collected))
        }
    }

    /// Iterate over the contained errors in insertion order.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> std::slice::Iter<'_, OperationError> {
        self.0.iter()
    }

    /// Number of errors in the aggregation. Never zero.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with collections.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the errors as a slice.
    #[must_use]
    pub const fn as_slice(&self) -> &[OperationError] {
        self.0.as_slice()
    }

    /// Consume the aggregation, returning the errors.
    #[must_use]
    pub fn into_vec(self) -> Vec<OperationError> {
        self.0
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}

impl<'a> IntoIterator for &'a AggregatedErrors {
    type Item = &'a OperationError;
    type IntoIter = std::slice::Iter<'a, OperationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for AggregatedErrors {
    type Item = OperationError;
    type IntoIter = std::vec::IntoIter<OperationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
