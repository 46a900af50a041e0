//! Human-readable summary of a batch run.

use std::io::Write;

use operation_result::OperationResult;

use crate::config::DemoConfig;

/// Write the values produced by `outcome` and every error it recorded.
///
/// # Errors
///
/// Propagates failures from `out`.
pub fn write_summary<W: Write>(
    out: &mut W,
    config: &DemoConfig,
    outcome: &OperationResult<Vec<u32>>,
) -> std::io::Result<()> {
    let values = outcome.payload().map_or(&[][..], Vec::as_slice);
    writeln!(
        out,
        "completed {} of {} steps",
        values.len(),
        config.steps
    )?;
    if !values.is_empty() {
        let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
        writeln!(out, "values: {}", rendered.join(", "))?;
    }
    for error in outcome.errors() {
        writeln!(out, "error: {error}")?;
    }
    Ok(())
}
