use std::num::NonZeroU32;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use nonzero_ext::nonzero;
use reqwest::Client;
use snafu::ResultExt;
use tracing::debug;

use crate::config::ProviderConfig;
use crate::providers::pushshift::params::{PushshiftParams, construct_params};
use crate::providers::pushshift::response::PushshiftResponse;
use crate::providers::{
    ApiSnafu, ClientBuildSnafu, InternalSnafu, InvalidRateSnafu, ProviderError, ProviderInitError,
    ReqwestSnafu, SubmissionMeta, SubmissionSource,
};

pub const BASE_URL: &str = "https://api.pushshift.io/reddit/search/submission/";

/// Queries the public Pushshift archive for the first submission in a day
/// window.
///
/// Pushshift is keyless but rate limited, so every request first waits on a
/// local limiter (default one request per second).
pub struct PushshiftProvider {
    client: Client,
    base_url: String,
    limiter: DefaultDirectRateLimiter,
    params: PushshiftParams,
}

impl PushshiftProvider {
    /// Creates a provider against the public endpoint at the default polite
    /// request rate.
    pub fn new() -> Result<Self, ProviderInitError> {
        Self::with_base_url(BASE_URL, nonzero!(1u32))
    }

    /// Creates a provider from the `[provider]` section of the config file.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderInitError> {
        let rate = NonZeroU32::new(config.requests_per_second).ok_or_else(|| {
            InvalidRateSnafu {
                message: "requests_per_second must be nonzero".to_string(),
            }
            .build()
        })?;
        Self::with_base_url(&config.base_url, rate)
    }

    /// Creates a provider against an arbitrary endpoint. Used by tests and by
    /// deployments that run a Pushshift mirror.
    pub fn with_base_url(
        base_url: &str,
        requests_per_second: NonZeroU32,
    ) -> Result<Self, ProviderInitError> {
        let client = Client::builder()
            .user_agent(concat!("growth-tracker/", env!("CARGO_PKG_VERSION")))
            .build()
            .context(ClientBuildSnafu)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string() + "/",
            limiter: RateLimiter::direct(Quota::per_second(requests_per_second)),
            params: PushshiftParams::default(),
        })
    }

    /// Applies source-specific query options to every subsequent request.
    pub fn with_params(mut self, params: PushshiftParams) -> Self {
        self.params = params;
        self
    }
}

#[async_trait]
impl SubmissionSource for PushshiftProvider {
    async fn first_in_window(
        &self,
        forum: &str,
        after: DateTime<Utc>,
        before: DateTime<Utc>,
    ) -> Result<Option<SubmissionMeta>, ProviderError> {
        self.limiter.until_ready().await;

        let query = construct_params(forum, after, before, &self.params);
        debug!(forum, %after, %before, "querying pushshift window");

        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .context(ReqwestSnafu)?;

        if !response.status().is_success() {
            let error_msg = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return ApiSnafu { message: error_msg }.fail();
        }

        let body = response
            .json::<PushshiftResponse>()
            .await
            .context(ReqwestSnafu)?;

        match body.data.into_iter().next() {
            Some(submission) => {
                let created_utc = DateTime::from_timestamp(submission.created_utc, 0)
                    .ok_or_else(|| {
                        InternalSnafu {
                            message: format!(
                                "unrepresentable created_utc: {}",
                                submission.created_utc
                            ),
                        }
                        .build()
                    })?;
                Ok(Some(SubmissionMeta {
                    created_utc,
                    subscribers: submission.subreddit_subscribers,
                }))
            }
            None => Ok(None),
        }
    }
}
