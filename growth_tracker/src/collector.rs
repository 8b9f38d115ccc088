//! The day-by-day collection loop.
//!
//! Walks forward from a start instant, one 24-hour window at a time, asking a
//! [`SubmissionSource`] for the first submission in each window and recording
//! that submission's reported subscriber count. Collection stops as soon as
//! the most recently recorded count reaches the goal.

use chrono::Duration;
use tracing::{debug, info};

use crate::models::request_params::HistoryRequestParams;
use crate::models::sample::Sample;
use crate::models::series::SampleSeries;
use crate::providers::{ProviderError, SubmissionSource, ValidationSnafu};

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Rejects requests no source could answer meaningfully.
fn validate_request(params: &HistoryRequestParams) -> Result<(), ProviderError> {
    snafu::ensure!(
        !params.forum.trim().is_empty(),
        ValidationSnafu {
            message: "forum name must not be empty".to_string(),
        }
    );
    snafu::ensure!(
        params.goal_subscribers > 0,
        ValidationSnafu {
            message: "goal subscriber count must be nonzero".to_string(),
        }
    );
    Ok(())
}

/// Collects the subscriber history described by `params` from `source`.
///
/// The returned series is seeded with a zero-count sample at `params.start`.
/// Every recorded timestamp after that is the previous timestamp advanced by
/// a whole number of days:
///
/// - A window with a submission appends a sample one multiplier-worth of days
///   after the previous one, carrying the submission's subscriber count
///   (zero when the archive recorded none), and resets the multiplier.
/// - An empty window appends a carried-forward count at the same advanced
///   timestamp and widens the multiplier by one more day.
///
/// Runs until the goal is met; a source error aborts the run.
pub async fn collect_history<S>(
    source: &S,
    params: &HistoryRequestParams,
) -> Result<SampleSeries, ProviderError>
where
    S: SubmissionSource + ?Sized,
{
    validate_request(params)?;

    let mut series = SampleSeries::new(params.forum.as_str());
    let mut last = Sample {
        timestamp: params.start,
        subscribers: 0,
    };
    series.push(last);

    let mut multiplier: i64 = 1;
    while last.subscribers < params.goal_subscribers {
        let after = last.timestamp;
        let before = after + Duration::seconds(SECONDS_PER_DAY);
        let found = source.first_in_window(&params.forum, after, before).await?;

        let stamp = after + Duration::seconds(multiplier * SECONDS_PER_DAY);
        let next = match found {
            Some(meta) => {
                debug!(
                    forum = %params.forum,
                    created = %meta.created_utc,
                    subscribers = meta.subscribers.unwrap_or(0),
                    "window submission found"
                );
                multiplier = 1;
                Sample {
                    timestamp: stamp,
                    subscribers: meta.subscribers.unwrap_or(0),
                }
            }
            None => {
                debug!(forum = %params.forum, %after, "empty window, carrying count forward");
                multiplier += 1;
                Sample {
                    timestamp: stamp,
                    subscribers: last.subscribers,
                }
            }
        };

        series.push(next);
        last = next;
    }

    info!(
        forum = %params.forum,
        samples = series.len(),
        goal = params.goal_subscribers,
        "collection finished"
    );
    Ok(series)
}
