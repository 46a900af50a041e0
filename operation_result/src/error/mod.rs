//! Error values carried by an [`OperationResult`](crate::OperationResult).

mod aggregate;
mod constructors;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::OperationError;
