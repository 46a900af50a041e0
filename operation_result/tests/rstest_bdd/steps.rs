//! Step definitions for the operation result scenarios.
#![expect(
    clippy::shadow_reuse,
    reason = "rstest-bdd step macros rebind placeholders during expansion"
)]

use anyhow::{Result, anyhow, ensure};
use operation_result::{OperationError, OperationResult};
use rstest_bdd_macros::{given, then, when};
use test_helpers::processor::make_error;
use test_helpers::records::{NoPayload, SampleRecord};
use test_helpers::text::{message_list, unquote};

use crate::fixtures::ResultContext;

fn take_current(result_context: &ResultContext) -> Result<OperationResult<NoPayload>> {
    result_context
        .current
        .take()
        .ok_or_else(|| anyhow!("no result has been created"))
}

fn messages_of<T>(result: &OperationResult<T>) -> Vec<String> {
    result
        .errors()
        .iter()
        .map(|error| error.message().to_owned())
        .collect()
}

#[given("a fresh result without a payload")]
fn fresh_result(result_context: &ResultContext) -> Result<()> {
    ensure!(
        result_context.current.is_empty(),
        "result already initialised"
    );
    result_context.current.set(OperationResult::new());
    Ok(())
}

#[given("a donor result with errors {messages}")]
#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd step macros require owned capture values"
)]
fn donor_result(result_context: &ResultContext, messages: String) -> Result<()> {
    let errors: Vec<OperationError> = message_list(&messages)
        .into_iter()
        .map(OperationError::new)
        .collect();
    ensure!(!errors.is_empty(), "donor must carry at least one error");
    let mut donor = OperationResult::new();
    donor.add_errors(errors);
    result_context.donor.set(donor);
    Ok(())
}

#[given("a sample record")]
fn sample_record(result_context: &ResultContext) {
    result_context.record.set(SampleRecord::new());
}

#[when("the error {message} is added")]
#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd step macros require owned capture values"
)]
fn add_single_error(result_context: &ResultContext, message: String) -> Result<()> {
    let mut result = take_current(result_context)?;
    result.add_error(OperationError::new(unquote(&message)));
    result_context.current.set(result);
    Ok(())
}

#[when("{count} numbered errors are added one at a time")]
fn add_numbered_errors(result_context: &ResultContext, count: usize) -> Result<()> {
    let mut result = take_current(result_context)?;
    for number in 1..=count {
        result.add_error(make_error(number));
    }
    result_context.current.set(result);
    Ok(())
}

#[when("an empty error list is added")]
fn add_empty_list(result_context: &ResultContext) -> Result<()> {
    let mut result = take_current(result_context)?;
    result.add_errors(Vec::new());
    result_context.current.set(result);
    Ok(())
}

#[when("the donor errors are merged into the result")]
fn merge_donor(result_context: &ResultContext) -> Result<()> {
    let donor = result_context
        .donor
        .take()
        .ok_or_else(|| anyhow!("donor result unavailable"))?;
    let mut result = take_current(result_context)?;
    result.add_errors(donor.into_errors());
    result_context.current.set(result);
    Ok(())
}

#[when("a result is built around the sample record")]
fn wrap_record(result_context: &ResultContext) -> Result<()> {
    let record = result_context
        .record
        .get()
        .ok_or_else(|| anyhow!("sample record unavailable"))?;
    result_context
        .record_result
        .set(OperationResult::with_payload(record));
    Ok(())
}

#[then("the result is successful")]
fn result_successful(result_context: &ResultContext) -> Result<()> {
    let successful = result_context
        .current
        .with_ref(OperationResult::is_successful)
        .ok_or_else(|| anyhow!("no result has been created"))?;
    ensure!(successful, "expected a successful result");
    Ok(())
}

#[then("the result is unsuccessful")]
fn result_unsuccessful(result_context: &ResultContext) -> Result<()> {
    let unsuccessful = result_context
        .current
        .with_ref(OperationResult::is_unsuccessful)
        .ok_or_else(|| anyhow!("no result has been created"))?;
    ensure!(unsuccessful, "expected an unsuccessful result");
    Ok(())
}

#[then("the result has {count} errors")]
fn result_error_count(result_context: &ResultContext, count: usize) -> Result<()> {
    let actual = result_context
        .current
        .with_ref(OperationResult::error_count)
        .ok_or_else(|| anyhow!("no result has been created"))?;
    ensure!(actual == count, "expected {count} errors, got {actual}");
    Ok(())
}

#[then("the result errors are {messages}")]
#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd step macros require owned capture values"
)]
fn result_errors_are(result_context: &ResultContext, messages: String) -> Result<()> {
    let expected = message_list(&messages);
    let actual = result_context
        .current
        .with_ref(messages_of)
        .ok_or_else(|| anyhow!("no result has been created"))?;
    ensure!(actual == expected, "expected {expected:?}, got {actual:?}");
    Ok(())
}

#[then("the record result is successful")]
fn record_result_successful(result_context: &ResultContext) -> Result<()> {
    let successful = result_context
        .record_result
        .with_ref(OperationResult::is_successful)
        .ok_or_else(|| anyhow!("record result unavailable"))?;
    ensure!(successful, "expected the record result to succeed");
    Ok(())
}

#[then("the record result payload equals the sample record")]
fn record_payload_matches(result_context: &ResultContext) -> Result<()> {
    let expected = result_context
        .record
        .get()
        .ok_or_else(|| anyhow!("sample record unavailable"))?;
    let actual = result_context
        .record_result
        .with_ref(|result| result.payload().cloned())
        .ok_or_else(|| anyhow!("record result unavailable"))?;
    ensure!(
        actual.as_ref() == Some(&expected),
        "expected payload {expected:?}, got {actual:?}"
    );
    Ok(())
}
