//! GitHub search data transfer objects
//!
//! `SearchIssuesResponse` mirrors the JSON returned by `GET /search/issues`.
//! It is converted into the slimmer `PullRequest`/`SearchPage` types the
//! rest of the application works with.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pull request found by a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// API URL of the issue/PR
    pub url: String,

    /// PR title
    pub title: String,

    /// Whether the PR has been merged
    pub merged: bool,

    /// Browser URL, when GitHub included it
    pub html_url: Option<String>,
}

impl PullRequest {
    /// Link to show a human: the browser URL if known, else the API URL
    pub fn link(&self) -> &str {
        self.html_url.as_deref().unwrap_or(&self.url)
    }
}

/// First page of a search result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    /// Total number of matches GitHub reports for the query
    pub total_count: u64,

    /// GitHub gave up before finding every match
    pub incomplete_results: bool,

    /// Pull requests on this page, in API order
    pub items: Vec<PullRequest>,
}

impl SearchPage {
    /// A complete page holding exactly `items`
    pub fn from_items(items: Vec<PullRequest>) -> Self {
        Self {
            total_count: items.len() as u64,
            incomplete_results: false,
            items,
        }
    }

    /// Whether more matches exist than this page holds
    pub fn is_truncated(&self) -> bool {
        self.incomplete_results || self.total_count > self.items.len() as u64
    }
}

/// Raw `GET /search/issues` response body
#[derive(Debug, Deserialize)]
pub(crate) struct SearchIssuesResponse {
    #[serde(default)]
    pub total_count: u64,

    #[serde(default)]
    pub incomplete_results: bool,

    pub items: Vec<SearchItem>,
}

/// One entry of the `items` array
#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    pub url: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub html_url: Option<String>,

    /// Not part of the search schema, honoured when present
    #[serde(default)]
    pub merged: Option<bool>,

    #[serde(default)]
    pub pull_request: Option<PullRequestLinks>,
}

/// The `pull_request` object GitHub attaches to PR search hits
#[derive(Debug, Deserialize)]
pub(crate) struct PullRequestLinks {
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
}

impl From<SearchItem> for PullRequest {
    fn from(item: SearchItem) -> Self {
        let merged_at = item
            .pull_request
            .as_ref()
            .and_then(|pr| pr.merged_at)
            .is_some();

        PullRequest {
            url: item.url,
            title: item.title,
            merged: item.merged.unwrap_or(false) || merged_at,
            html_url: item.html_url,
        }
    }
}

impl From<SearchIssuesResponse> for SearchPage {
    fn from(response: SearchIssuesResponse) -> Self {
        SearchPage {
            total_count: response.total_count,
            incomplete_results: response.incomplete_results,
            items: response.items.into_iter().map(PullRequest::from).collect(),
        }
    }
}
