//! A result container that accumulates errors alongside an optional payload.
//!
//! Operations return an [`OperationResult`] instead of bailing out on the
//! first failure. Callers branch on [`OperationResult::is_successful`], read
//! the payload when they need it, and fold the errors of nested operations
//! into their own result with [`OperationResult::add_errors`] or
//! [`OperationResult::add_errors_from`]. No error is ever dropped.
//!
//! Success and payload are independent: a result may succeed without a
//! payload, and may fail while still carrying one.
//!
//! ```
//! use operation_result::{OperationError, OperationResult};
//!
//! fn validate(name: &str) -> OperationResult<()> {
//!     let mut result = OperationResult::new();
//!     if name.is_empty() {
//!         result.add_error(OperationError::new("name must not be empty"));
//!     }
//!     if name.len() > 8 {
//!         result.add_error(OperationError::new("name is too long"));
//!     }
//!     result
//! }
//!
//! fn register(name: &str) -> OperationResult<String> {
//!     let checked = validate(name);
//!     let mut result = OperationResult::with_payload(name.to_uppercase());
//!     result.add_errors_from(&checked);
//!     result
//! }
//!
//! assert!(register("ada").is_successful());
//! let failed = register("");
//! assert!(failed.is_unsuccessful());
//! assert_eq!(failed.errors()[0].message(), "name must not be empty");
//! ```

mod error;
mod result;
mod result_ext;

pub use error::{AggregatedErrors, OperationError};
pub use result::OperationResult;
pub use result_ext::OperationResultExt;
