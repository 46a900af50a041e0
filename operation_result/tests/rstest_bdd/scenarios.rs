//! Binds the behavioural feature files to the step registry.

use crate::fixtures::{ResultContext, result_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/operation_result.feature",
    fixtures = [result_context: ResultContext]
);
