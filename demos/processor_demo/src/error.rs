//! Error types for the `processor_demo` binary.
//!
//! `DemoError` wraps configuration loading failures alongside the aggregated
//! errors reported by validation and by the batch itself, so `main` can hand
//! a single value to `color-eyre`.

use figment::Error as FigmentError;
use operation_result::AggregatedErrors;
use thiserror::Error;

/// Errors raised by the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Configuration layers could not be merged or deserialised.
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Box<FigmentError>),
    /// The merged configuration failed validation.
    #[error("invalid configuration:\n{0}")]
    InvalidConfig(AggregatedErrors),
    /// One or more steps of the batch failed.
    #[error("batch reported errors:\n{0}")]
    Operation(AggregatedErrors),
    /// Writing the summary to stdout failed.
    #[error("failed to write summary: {0}")]
    Output(#[from] std::io::Error),
}

impl From<FigmentError> for DemoError {
    fn from(e: FigmentError) -> Self {
        Self::Configuration(Box::new(e))
    }
}

/// Result alias used throughout the demo.
pub type Result<T> = std::result::Result<T, DemoError>;
