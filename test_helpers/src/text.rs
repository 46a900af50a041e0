//! Text helpers for parsing behavioural step placeholders.

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    if let Some(stripped) = trimmed.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return stripped;
    }
    if let Some(stripped) = trimmed
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
    {
        return stripped;
    }
    trimmed
}

/// Splits a comma-separated list of (optionally quoted) messages.
///
/// Blank entries are skipped, so an empty string yields an empty list.
#[must_use]
pub fn message_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(unquote)
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}
