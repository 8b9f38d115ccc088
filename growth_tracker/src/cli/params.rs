use std::error::Error;

use chrono::{DateTime, Utc};

/// Parses the `--start` argument.
///
/// Accepts either epoch seconds ("1577836800") or an RFC3339 datetime
/// ("2020-01-01T00:00:00Z").
pub fn parse_start(input: &str) -> Result<DateTime<Utc>, Box<dyn Error + Send + Sync>> {
    let trimmed = input.trim();

    if let Ok(epoch) = trimmed.parse::<i64>() {
        return DateTime::from_timestamp(epoch, 0)
            .ok_or_else(|| format!("epoch timestamp out of range: {epoch}").into());
    }

    trimmed
        .parse::<DateTime<Utc>>()
        .map_err(|e| format!("invalid start datetime '{trimmed}': {e}").into())
}
