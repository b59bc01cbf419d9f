use std::time::Duration;

use reqwest::StatusCode;
use url::Url;

use super::types::{Query, QueryError, QueryResult};

pub const DEFAULT_API_BASE: &str = "https://uapis.cn";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub(crate) fn http_client() -> Result<reqwest::Client, String> {
    reqwest::Client::builder()
        .user_agent(concat!("mc-status/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {}", e))
}

/// Issues the single GET request behind a query.
///
/// Cloning is cheap: the underlying `reqwest::Client` is shared.
#[derive(Debug, Clone)]
pub struct QueryDispatcher {
    client: reqwest::Client,
    api_base: String,
    timeout: Duration,
}

impl QueryDispatcher {
    pub fn with_client(client: reqwest::Client, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the endpoint URL for `query`, with the input URL-encoded
    pub fn request_url(&self, query: &Query) -> Result<Url, QueryError> {
        let base = self.api_base.trim_end_matches('/');
        let mut url = Url::parse(&format!("{}{}", base, query.kind().endpoint()))
            .map_err(|e| QueryError::Unknown(format!("invalid API base {}: {}", base, e)))?;

        url.query_pairs_mut()
            .append_pair(query.kind().query_param(), query.input());

        Ok(url)
    }

    /// Run `query` to completion. Never retries.
    pub async fn execute(&self, query: &Query) -> QueryResult {
        let result = self.fetch(query).await;

        match &result {
            Ok(payload) => {
                let pretty = serde_json::to_string_pretty(payload).unwrap_or_default();
                tracing::info!("{} response: {}", query.kind(), pretty);
            }
            Err(e) => tracing::warn!("{} query for {} failed: {}", query.kind(), query.input(), e),
        }

        QueryResult::from(result)
    }

    async fn fetch(&self, query: &Query) -> Result<serde_json::Value, QueryError> {
        let url = self.request_url(query)?;
        tracing::info!("Requesting {}", url);

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(QueryError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(QueryError::InvalidResponse)
    }
}
