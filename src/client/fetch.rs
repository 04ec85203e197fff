//! Fetch Module
//!
//! HTTP calls against the catalog API, raced against a cancellation token.
//! A cancelled call never applies its response: the token is checked before
//! the request goes out and again after the response arrives.

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::models::{ErrorResponse, PageResponse, StatsResponse};
use crate::query::{FindOptions, Page};

// == Client Error Enum ==
/// Failures surfaced by the API client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The call was cancelled before its result was applied
    #[error("Request cancelled")]
    Cancelled,

    /// Transport-level failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with an error payload
    #[error("Server error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    /// True for cancellation-induced failures.
    ///
    /// Callers ignore these; any other variant is a user-visible error.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ClientError::Cancelled)
    }
}

// == Items Client ==
/// HTTP client for the catalog API.
pub struct ItemsClient {
    /// Shared connection pool
    http: reqwest::Client,
    /// Server base URL without trailing slash
    base_url: String,
}

impl ItemsClient {
    // == Constructor ==
    /// Creates a client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    // == Fetch Items ==
    /// Fetches one page of records.
    ///
    /// Cancelling the token while the request is in flight resolves to
    /// `ClientError::Cancelled` instead of a page.
    pub async fn fetch_items(
        &self,
        opts: &FindOptions,
        cancel: &CancellationToken,
    ) -> Result<Page, ClientError> {
        let mut query: Vec<(&str, String)> = vec![("offset", opts.offset.to_string())];
        if let Some(q) = &opts.query {
            query.push(("q", q.clone()));
        }
        if let Some(limit) = opts.limit {
            query.push(("limit", limit.to_string()));
        }

        let url = format!("{}/api/items", self.base_url);
        let response: PageResponse = self.get_json(url, query, cancel).await?;
        Ok(response.into_page())
    }

    // == Fetch Stats ==
    /// Fetches the cached record stats.
    pub async fn fetch_stats(
        &self,
        cancel: &CancellationToken,
    ) -> Result<StatsResponse, ClientError> {
        let url = format!("{}/api/stats", self.base_url);
        self.get_json(url, Vec::new(), cancel).await
    }

    // == Get Json ==
    /// Issues a GET raced against the cancellation token and decodes the
    /// JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        query: Vec<(&str, String)>,
        cancel: &CancellationToken,
    ) -> Result<T, ClientError> {
        if cancel.is_cancelled() {
            return Err(ClientError::Cancelled);
        }

        let request = async {
            let response = self.http.get(&url).query(&query).send().await?;
            let status = response.status();
            if !status.is_success() {
                let message = match response.json::<ErrorResponse>().await {
                    Ok(body) => body.error,
                    Err(_) => format!("HTTP {}", status),
                };
                return Err(ClientError::Api {
                    status: status.as_u16(),
                    message,
                });
            }
            Ok(response.json::<T>().await?)
        };

        let value = tokio::select! {
            _ = cancel.cancelled() => return Err(ClientError::Cancelled),
            result = request => result?,
        };

        // The caller may have torn down while the response was in flight
        if cancel.is_cancelled() {
            return Err(ClientError::Cancelled);
        }

        Ok(value)
    }
}
