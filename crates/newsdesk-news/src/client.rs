//! HTTP client for the NewsAPI REST API.
//!
//! Wraps `reqwest` with NewsAPI-specific error handling, API key management,
//! and typed response deserialization. The `"status"` field of every JSON
//! envelope is checked and API-level failures surface as [`NewsError::Api`].

use std::time::Duration;

use reqwest::{Client, Url};

use newsdesk_sentiment::RawArticle;

use crate::error::NewsError;
use crate::types::EverythingResponse;

const DEFAULT_BASE_URL: &str = "https://newsapi.org/";

/// Client for the NewsAPI `everything` endpoint.
///
/// Use [`NewsApiClient::new`] for production or
/// [`NewsApiClient::with_base_url`] to point at a mock server in tests.
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl NewsApiClient {
    /// Creates a new client pointed at the production NewsAPI.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, NewsError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`NewsError::InvalidBaseUrl`] if `base_url`
    /// does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, NewsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("newsdesk/0.1 (news-triage)")
            .build()?;

        // Exactly one trailing slash, so `join` appends instead of replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| NewsError::InvalidBaseUrl(format!("'{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Searches recent English-language articles matching `query`, newest
    /// first, returning at most `page_size` of them.
    ///
    /// # Errors
    ///
    /// - [`NewsError::Api`] if the API returns an error status.
    /// - [`NewsError::Http`] on network failure.
    /// - [`NewsError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn fetch_everything(
        &self,
        query: &str,
        page_size: usize,
    ) -> Result<Vec<RawArticle>, NewsError> {
        let page_size = page_size.to_string();
        let url = self.build_url(
            "v2/everything",
            &[
                ("q", query),
                ("pageSize", page_size.as_str()),
                ("sortBy", "publishedAt"),
                ("language", "en"),
            ],
        )?;
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let envelope: EverythingResponse =
            serde_json::from_value(body).map_err(|e| NewsError::Deserialize {
                context: format!("everything(q={query})"),
                source: e,
            })?;

        tracing::debug!(
            query,
            total_results = envelope.total_results.unwrap_or_default(),
            returned = envelope.articles.len(),
            "fetched NewsAPI articles"
        );

        Ok(envelope.articles.into_iter().map(RawArticle::from).collect())
    }

    /// Builds the request URL for `path` with percent-encoded query
    /// parameters, appending the API key last.
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, NewsError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| NewsError::InvalidBaseUrl(e.to_string()))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("apiKey", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request and parses the body as JSON.
    ///
    /// NewsAPI reports failures with a 4xx status *and* a JSON error body, so
    /// the body is parsed regardless of status. A non-JSON body on an error
    /// status becomes [`NewsError::Api`].
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, NewsError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            if status.is_success() {
                NewsError::Deserialize {
                    context: format!("{}{}", url.origin().ascii_serialization(), url.path()),
                    source: e,
                }
            } else {
                NewsError::Api(format!("HTTP {status}"))
            }
        })
    }

    /// Checks the top-level `"status"` field and returns an error unless it
    /// is `"ok"`.
    fn check_api_error(body: &serde_json::Value) -> Result<(), NewsError> {
        match body.get("status").and_then(serde_json::Value::as_str) {
            Some("ok") => Ok(()),
            _ => {
                let msg = body
                    .get("message")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or("unknown error")
                    .to_string();
                Err(NewsError::Api(msg))
            }
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
