//! Source abstraction for archival forum data.
//!
//! This module defines the [`SubmissionSource`] trait, which serves as a
//! unified interface for asking an archival search service for the first
//! submission posted to a forum within a time window. The collection loop in
//! [`crate::collector`] is written against this trait, so the loop's
//! semantics can be tested with synthetic in-memory sources.
//!
//! Each concrete source implementation (such as Pushshift) should implement
//! [`SubmissionSource`] to handle vendor-specific API logic.
//!
//! The trait is designed for async usage and supports dynamic dispatch
//! (`dyn SubmissionSource`) for runtime selection of sources.

pub mod pushshift;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use snafu::{Backtrace, Snafu};

/// Metadata extracted from the first submission found in a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionMeta {
    /// Creation time reported by the archive (UTC).
    pub created_utc: DateTime<Utc>,

    /// The forum's subscriber count at creation time, when the archive
    /// recorded one.
    pub subscribers: Option<u64>,
}

/// Trait for querying an archival source for the first submission in a
/// window.
///
/// Implement this trait for each concrete archive (e.g., Pushshift). The
/// window is the half-open interval `[after, before)`.
#[async_trait]
pub trait SubmissionSource {
    /// Returns the earliest submission created in `[after, before)`, or
    /// `None` when the window holds no submission at all.
    async fn first_in_window(
        &self,
        forum: &str,
        after: DateTime<Utc>,
        before: DateTime<Utc>,
    ) -> Result<Option<SubmissionMeta>, ProviderError>;
}

/// Errors that can occur during the creation of a source instance.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// the configured request rate is unusable
    #[snafu(display("Invalid request rate: {message}"))]
    InvalidRate { message: String, backtrace: Backtrace },
}

/// Errors that can occur within a `SubmissionSource` implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout).
    #[snafu(display("API request failed: {source}"))]
    Reqwest {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The archive's API returned a specific error message.
    #[snafu(display("API error: {message}"))]
    Api { message: String, backtrace: Backtrace },

    /// The request parameters were invalid for this specific source.
    #[snafu(display("Invalid parameters for source: {message}"))]
    Validation { message: String, backtrace: Backtrace },

    /// An internal error occurred while processing data within the source.
    #[snafu(display("Internal source error: {message}"))]
    Internal { message: String, backtrace: Backtrace },
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    struct AlwaysEmpty;
    struct AlwaysFound;

    #[async_trait]
    impl SubmissionSource for AlwaysEmpty {
        async fn first_in_window(
            &self,
            _forum: &str,
            _after: DateTime<Utc>,
            _before: DateTime<Utc>,
        ) -> Result<Option<SubmissionMeta>, ProviderError> {
            Ok(None)
        }
    }

    #[async_trait]
    impl SubmissionSource for AlwaysFound {
        async fn first_in_window(
            &self,
            _forum: &str,
            after: DateTime<Utc>,
            _before: DateTime<Utc>,
        ) -> Result<Option<SubmissionMeta>, ProviderError> {
            Ok(Some(SubmissionMeta {
                created_utc: after,
                subscribers: Some(42),
            }))
        }
    }

    // Sources are selected at runtime behind a `Box<dyn SubmissionSource>`.
    fn get_source(name: &str) -> Box<dyn SubmissionSource + Send + Sync> {
        if name == "empty" {
            Box::new(AlwaysEmpty)
        } else {
            Box::new(AlwaysFound)
        }
    }

    #[tokio::test]
    async fn test_dynamic_source() {
        let after = Utc.timestamp_opt(1_577_836_800, 0).unwrap();
        let before = after + Duration::seconds(86_400);

        let source = get_source("empty");
        assert_eq!(
            source.first_in_window("rust", after, before).await.unwrap(),
            None
        );

        let source = get_source("found");
        let meta = source
            .first_in_window("rust", after, before)
            .await
            .unwrap()
            .expect("submission");
        assert_eq!(meta.subscribers, Some(42));
    }
}
