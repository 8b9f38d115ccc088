//! Canonical in-memory representation of a subscriber-count sample.
//!
//! This struct is the standard output of the collection loop, regardless of
//! which archival source produced it.

use chrono::{DateTime, Utc};

/// A single (timestamp, subscriber count) observation.
///
/// Timestamps are whole-second UTC instants; the collector only ever emits
/// timestamps that are a whole number of days apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// The instant this count was recorded for (UTC).
    pub timestamp: DateTime<Utc>,

    /// Total subscriber count at that instant. Sources that omit the count
    /// for a record are represented as zero upstream of this type.
    pub subscribers: u64,
}
