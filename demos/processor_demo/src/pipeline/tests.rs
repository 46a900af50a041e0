//! Tests for step execution and batch composition.

use rstest::{fixture, rstest};

use super::{run_batch, run_step};
use crate::config::DemoConfig;

#[fixture]
fn config() -> DemoConfig {
    DemoConfig {
        steps: 4,
        failing_steps: vec![2, 4],
        errors_per_failure: 2,
    }
}

#[rstest]
#[case(1, Some(1))]
#[case(3, Some(9))]
fn passing_steps_yield_squares(config: DemoConfig, #[case] step: u32, #[case] value: Option<u32>) {
    let result = run_step(step, &config);
    assert!(result.is_successful());
    assert_eq!(result.into_payload(), value);
}

#[rstest]
fn failing_steps_report_configured_errors(config: DemoConfig) {
    let result = run_step(2, &config);
    assert!(result.is_unsuccessful());
    assert!(result.payload().is_none());
    let messages: Vec<&str> = result.errors().iter().map(|e| e.message()).collect();
    assert_eq!(messages, ["step 2 failure #1", "step 2 failure #2"]);
}

#[rstest]
fn batch_keeps_values_and_every_error(config: DemoConfig) {
    let batch = run_batch(&config);
    assert!(batch.is_unsuccessful());
    assert_eq!(batch.payload(), Some(&vec![1, 9]));
    let messages: Vec<&str> = batch.errors().iter().map(|e| e.message()).collect();
    assert_eq!(
        messages,
        [
            "step 2 failure #1",
            "step 2 failure #2",
            "step 4 failure #1",
            "step 4 failure #2",
        ]
    );
}

#[test]
fn clean_batch_is_successful() {
    let batch = run_batch(&DemoConfig::default());
    assert!(batch.is_successful());
    assert_eq!(batch.into_payload(), Some(vec![1, 4, 9]));
}
