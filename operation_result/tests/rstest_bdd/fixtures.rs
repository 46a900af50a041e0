//! Shared fixtures for the behavioural scenarios.

use operation_result::OperationResult;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use test_helpers::records::{NoPayload, SampleRecord};

/// Scenario state shared between the steps of a single scenario.
#[derive(Debug, Default, ScenarioState)]
pub struct ResultContext {
    /// The result under test.
    pub current: Slot<OperationResult<NoPayload>>,
    /// A second result whose errors are merged into `current`.
    pub donor: Slot<OperationResult<NoPayload>>,
    /// Payload used by the record scenarios.
    pub record: Slot<SampleRecord>,
    /// Result wrapping `record`.
    pub record_result: Slot<OperationResult<SampleRecord>>,
}

/// Creates a clean context for each scenario.
#[fixture]
pub fn result_context() -> ResultContext {
    ResultContext::default()
}
