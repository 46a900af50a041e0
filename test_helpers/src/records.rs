//! Payload types used by the sample operations.

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

/// Marker payload for operations that return no meaningful value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoPayload;

/// Structured payload returned by the record-producing sample operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRecord {
    /// Arbitrary counter, seeded from the wall clock.
    pub count_of_stuff: i64,
    /// Identifier; always the nil UUID for freshly created records.
    pub id: Uuid,
}

impl SampleRecord {
    /// Build a record with a nil id and a clock-derived count.
    #[must_use]
    pub fn new() -> Self {
        let count_of_stuff = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| {
                i64::try_from(elapsed.as_nanos()).unwrap_or(i64::MAX)
            });
        Self {
            count_of_stuff,
            id: Uuid::nil(),
        }
    }
}

impl Default for SampleRecord {
    fn default() -> Self {
        Self::new()
    }
}
