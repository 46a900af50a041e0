//! Test helpers shared across crates in the workspace.
//!
//! [`processor`] provides sample operations that report their outcome
//! through an [`operation_result::OperationResult`], one family per payload
//! kind. [`records`] holds the payload types those operations return.

pub mod figment;
pub mod processor;
pub mod records;
pub mod text;
