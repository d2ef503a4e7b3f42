use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::types::{DetailResponse, SearchResponse};
use crate::config::OmdbConfig;

/// The remote movie database, as seen by `MovieService`.
///
/// Implementations return the decoded body for any well-formed answer,
/// including `"Response": "False"`. Only failures to get a well-formed
/// answer are errors.
#[async_trait]
pub trait MovieApi: Send + Sync {
    async fn search(&self, term: &str) -> Result<SearchResponse, ApiError>;
    async fn by_id(&self, id: &str) -> Result<DetailResponse, ApiError>;
    async fn by_title(&self, title: &str) -> Result<DetailResponse, ApiError>;
}

pub struct OmdbClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("cinesearch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn from_config(config: &OmdbConfig) -> Result<Self, ApiError> {
        let api_key = config.apikey.as_deref().unwrap_or_default();
        Self::new(&config.baseurl, api_key, Duration::from_secs(config.timeout))
    }

    async fn get<T: DeserializeOwned>(&self, param: &str, value: &str) -> Result<T, ApiError> {
        debug!(param = param, value = value, "OMDb request");

        let url = build_url(&self.base_url, param, value, &self.api_key);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl MovieApi for OmdbClient {
    async fn search(&self, term: &str) -> Result<SearchResponse, ApiError> {
        self.get("s", term).await
    }

    async fn by_id(&self, id: &str) -> Result<DetailResponse, ApiError> {
        self.get("i", id).await
    }

    async fn by_title(&self, title: &str) -> Result<DetailResponse, ApiError> {
        self.get("t", title).await
    }
}

fn build_url(base: &str, param: &str, value: &str, api_key: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!(
        "{}{}{}={}&apikey={}",
        base,
        separator,
        param,
        urlencoding::encode(value),
        urlencoding::encode(api_key)
    )
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Stored without its URL, which carries the API key.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Http(e.without_url())
    }
}
