//! Sample operations reporting their outcome through `OperationResult`.
//!
//! Each payload kind gets the same four shapes: no errors, a single error,
//! `n` errors appended one at a time, and `n` errors appended in one bulk
//! call. The last two must be indistinguishable to callers.
//!
//! # Examples
//!
//! ```
//! use operation_result_test_helpers::processor;
//!
//! let one_by_one = processor::value_multiple_errors(4);
//! let bulk = processor::value_error_range(4);
//! assert_eq!(one_by_one.errors(), bulk.errors());
//! ```

use operation_result::{OperationError, OperationResult};

use crate::records::{NoPayload, SampleRecord};

/// Build the error numbered `number`, rendered as `Message #<number>`.
#[must_use]
pub fn make_error(number: usize) -> OperationError {
    OperationError::new(format!("Message #{number}"))
}

/// Errors numbered `1..=count`, in order.
#[must_use]
pub fn make_errors(count: usize) -> Vec<OperationError> {
    (1..=count).map(make_error).collect()
}

fn append_singly<T>(result: &mut OperationResult<T>, count: usize) {
    for number in 1..=count {
        result.add_error(make_error(number));
    }
}

/// Successful operation without a payload.
#[must_use]
pub const fn no_payload_no_errors() -> OperationResult<NoPayload> {
    OperationResult::new()
}

/// Operation without a payload that reports `Message #1`.
#[must_use]
pub fn no_payload_single_error() -> OperationResult<NoPayload> {
    let mut result = OperationResult::new();
    result.add_error(make_error(1));
    result
}

/// Operation without a payload that appends `count` errors one at a time.
#[must_use]
pub fn no_payload_multiple_errors(count: usize) -> OperationResult<NoPayload> {
    let mut result = OperationResult::new();
    append_singly(&mut result, count);
    result
}

/// Operation without a payload that appends `count` errors in one call.
#[must_use]
pub fn no_payload_error_range(count: usize) -> OperationResult<NoPayload> {
    let mut result = OperationResult::new();
    result.add_errors(make_errors(count));
    result
}

/// Successful operation that sets a [`SampleRecord`] after construction.
#[must_use]
pub fn record_no_errors() -> OperationResult<SampleRecord> {
    let mut result = OperationResult::new();
    result.set_payload(SampleRecord::new());
    result
}

/// Record-producing operation that fails before producing its record.
#[must_use]
pub fn record_single_error() -> OperationResult<SampleRecord> {
    let mut result = OperationResult::new();
    result.add_error(make_error(1));
    result
}

/// Record-producing operation that appends `count` errors one at a time.
#[must_use]
pub fn record_multiple_errors(count: usize) -> OperationResult<SampleRecord> {
    let mut result = OperationResult::new();
    append_singly(&mut result, count);
    result
}

/// Record-producing operation that appends `count` errors in one call.
#[must_use]
pub fn record_error_range(count: usize) -> OperationResult<SampleRecord> {
    let mut result = OperationResult::new();
    result.add_errors(make_errors(count));
    result
}

/// Successful value-producing operation that never sets its value.
#[must_use]
pub const fn value_no_errors() -> OperationResult<i32> {
    OperationResult::new()
}

/// Value-producing operation that reports `Message #1`.
#[must_use]
pub fn value_single_error() -> OperationResult<i32> {
    let mut result = OperationResult::new();
    result.add_error(make_error(1));
    result
}

/// Value-producing operation that appends `count` errors one at a time.
#[must_use]
pub fn value_multiple_errors(count: usize) -> OperationResult<i32> {
    let mut result = OperationResult::new();
    append_singly(&mut result, count);
    result
}

/// Value-producing operation that appends `count` errors in one call.
#[must_use]
pub fn value_error_range(count: usize) -> OperationResult<i32> {
    let mut result = OperationResult::new();
    result.add_errors(make_errors(count));
    result
}
