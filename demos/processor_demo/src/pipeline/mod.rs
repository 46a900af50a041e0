//! The simulated batch.
//!
//! Each step is its own operation returning an [`OperationResult`]. The batch
//! collects every step's value and folds every step's errors into one
//! top-level result, so a single failing step never hides another.

use operation_result::{OperationError, OperationResult};

use crate::config::DemoConfig;

/// Run step `step` of the batch.
///
/// Steps listed in [`DemoConfig::failing_steps`] report
/// [`DemoConfig::errors_per_failure`] errors and no value. Other steps yield
/// the square of their number.
#[must_use]
pub fn run_step(step: u32, config: &DemoConfig) -> OperationResult<u32> {
    if config.failing_steps.contains(&step) {
        let mut result = OperationResult::new();
        result.add_errors(
            (1..=config.errors_per_failure)
                .map(|n| OperationError::new(format!("step {step} failure #{n}"))),
        );
        return result;
    }
    OperationResult::with_payload(step.saturating_mul(step))
}

/// Run every step, collecting values and errors in step order.
#[must_use]
pub fn run_batch(config: &DemoConfig) -> OperationResult<Vec<u32>> {
    let mut batch = OperationResult::with_payload(Vec::new());
    for step in 1..=config.steps {
        let outcome = run_step(step, config);
        if outcome.is_unsuccessful() {
            tracing::warn!(step, errors = outcome.error_count(), "step failed");
        } else {
            tracing::info!(step, "step completed");
        }
        batch.add_errors_from(&outcome);
        if let (Some(value), Some(values)) = (outcome.into_payload(), batch.payload_mut()) {
            values.push(value);
        }
    }
    tracing::info!(
        steps = config.steps,
        errors = batch.error_count(),
        successful = batch.is_successful(),
        "batch finished"
    );
    batch
}

#[cfg(test)]
mod tests;
