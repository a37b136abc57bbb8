//! HTTP client for the stats backend.

use crate::error::{ClientError, FetchError};
use crate::model::StatsResponse;
use async_trait::async_trait;
use incbot_common::UserId;
use incbot_config::ApiConfig;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Path of the per-user stats endpoint, relative to the base URL.
pub const STATS_PATH: &str = "/api/bot/stats/discord";

/// Anything that can look up a user's stats.
///
/// Commands depend on this trait rather than on [`StatsClient`] so lookups
/// can be mocked in tests.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Fetches the stats document for `user_id`.
    async fn fetch(&self, user_id: UserId) -> Result<StatsResponse, FetchError>;
}

/// Stats backend client.
///
/// Each call is a single GET; there is no retry, backoff, or caching. The
/// underlying connection pool is shared by all concurrent lookups.
#[derive(Debug, Clone)]
pub struct StatsClient {
    client: Client,
    base_url: String,
}

impl StatsClient {
    /// Builds a client from the `[api]` configuration section.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full endpoint URL for `user_id`.
    pub fn endpoint(&self, user_id: UserId) -> String {
        format!("{}{STATS_PATH}/{user_id}", self.base_url)
    }

    async fn request(&self, url: &str) -> Result<StatsResponse, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        match serde_json::from_str::<Value>(&body)? {
            Value::Null => Err(FetchError::EmptyBody),
            value => Ok(StatsResponse::new(value)),
        }
    }
}

#[async_trait]
impl StatsSource for StatsClient {
    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn fetch(&self, user_id: UserId) -> Result<StatsResponse, FetchError> {
        let url = self.endpoint(user_id);
        debug!("Requesting stats from {}", url);

        let result = self.request(&url).await;
        match &result {
            Ok(_) => debug!("Stats request succeeded"),
            Err(e) => warn!(status = ?e.status(), "Stats request failed: {}", e),
        }
        result
    }
}
