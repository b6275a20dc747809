//! Search client trait and its error type
//!
//! This module defines the `SearchClient` trait every client implementation
//! must satisfy, and the `SearchError` taxonomy callers use to decide how a
//! failed request is reported.

use crate::types::SearchPage;
use async_trait::async_trait;
use thiserror::Error;

/// Why a single search request failed
///
/// Every variant is recoverable from the caller's point of view: a failed
/// request affects only the query that issued it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// GitHub refused the request because the rate limit is exhausted
    /// (HTTP 429, or HTTP 403 carrying a rate limit message)
    #[error("rate limited by GitHub (HTTP {status}): {message}")]
    RateLimited { status: u16, message: String },

    /// Any other non-success HTTP status
    #[error("GitHub returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded as a search result
    #[error("malformed search response: {0}")]
    Decode(String),

    /// Connection, TLS or timeout failure before a response arrived
    #[error("request failed: {0}")]
    Transport(String),
}

impl SearchError {
    /// Build the error for a non-success HTTP status
    ///
    /// 429 is always a rate limit. 403 is only treated as one when GitHub's
    /// message says so, because 403 is also returned for missing scopes.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        let rate_limited =
            status == 429 || (status == 403 && message.to_lowercase().contains("rate limit"));

        if rate_limited {
            SearchError::RateLimited { status, message }
        } else {
            SearchError::Status { status, message }
        }
    }

    /// Whether this failure was caused by rate limiting
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, SearchError::RateLimited { .. })
    }
}

/// GitHub search API client trait
///
/// Implementations issue exactly one request per call and return the first
/// page of results only. There is no retry, caching or pagination at this
/// layer.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so one client can be shared by all
/// per-handle tasks.
///
/// # Example
///
/// ```rust,ignore
/// use gh_search_client::{SearchClient, SearchError};
///
/// async fn count(client: &dyn SearchClient) -> Result<usize, SearchError> {
///     let page = client.search_pull_requests("author:octocat is:pr is:open").await?;
///     Ok(page.items.len())
/// }
/// ```
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Run one issue/PR search
    ///
    /// # Arguments
    ///
    /// * `query` - The raw search query (e.g. `author:octocat is:pr is:merged`).
    ///   Implementations are responsible for percent-encoding it.
    ///
    /// # Returns
    ///
    /// The first page of matching pull requests, or the reason the request
    /// failed.
    async fn search_pull_requests(&self, query: &str) -> Result<SearchPage, SearchError>;
}
