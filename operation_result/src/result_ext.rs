//! Extensions for turning standard results into `OperationResult` concisely.
//!
//! `From<Result<T, E>>` already covers error types that convert into
//! [`OperationError`]. [`OperationResultExt::into_operation_result`] covers
//! the rest: any `E: std::error::Error` is captured by its rendered message.
//!
//! # Examples
//!
//! ```
//! use operation_result::{OperationResult, OperationResultExt};
//!
//! fn parse_port(raw: &str) -> OperationResult<u16> {
//!     raw.parse::<u16>().into_operation_result()
//! }
//!
//! assert!(parse_port("8080").is_successful());
//! assert!(parse_port("eighty").is_unsuccessful());
//! ```

use crate::{OperationError, OperationResult};

/// Map any `Result<T, E>` with `E: std::error::Error` into an
/// [`OperationResult<T>`].
pub trait OperationResultExt<T> {
    /// `Ok` keeps the value as payload; `Err` becomes the single recorded
    /// error, with no payload.
    fn into_operation_result(self) -> OperationResult<T>;
}

impl<T, E> OperationResultExt<T> for Result<T, E>
where
    E: std::error::Error,
{
    fn into_operation_result(self) -> OperationResult<T> {
        match self {
            Ok(payload) => OperationResult::with_payload(payload),
            Err(error) => OperationResult::failed(OperationError::from_source(&error)),
        }
    }
}
