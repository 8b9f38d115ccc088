use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::providers::pushshift::PushshiftParams;

/// Universal parameters for collecting a forum's subscriber history from any
/// archival source.
///
/// This struct is designed to be source-agnostic. It is the standard input
/// for the collection loop; **validation of allowed values is performed
/// before the first request**, and any source-specific options live in
/// [`ProviderParams`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryRequestParams {
    /// The forum (subreddit) whose subscriber count is tracked.
    pub forum: String,

    /// Start of collection (inclusive, UTC). The series is seeded with a
    /// zero-count sample at this instant.
    pub start: DateTime<Utc>,

    /// Collection stops once the most recently recorded count reaches this
    /// value.
    pub goal_subscribers: u64,

    /// Optional, source-specific parameters.
    #[serde(default)]
    pub provider_specific: ProviderParams,
}

/// An enum to hold source-specific request parameters.
///
/// This keeps per-source options out of the universal
/// [`HistoryRequestParams`] while still letting callers tune a particular
/// source's queries.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub enum ProviderParams {
    #[default]
    None,
    Pushshift(PushshiftParams),
}
