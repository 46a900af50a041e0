//! Library facade for the `processor_demo` binary so integration tests can
//! reuse its configuration and pipeline.
//!
//! The demo runs a batch of simulated steps, each reporting through an
//! [`operation_result::OperationResult`], and folds every step's errors into
//! one top-level result.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
