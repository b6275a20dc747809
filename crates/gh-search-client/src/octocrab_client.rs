//! Octocrab-based search client
//!
//! Direct implementation of the `SearchClient` trait using the octocrab
//! library. Every call is one `GET /search/issues` request.

use crate::client::{SearchClient, SearchError};
use crate::types::{SearchIssuesResponse, SearchPage};
use crate::{ACCEPT_V3, DEFAULT_API_URL};
use anyhow::Context;
use async_trait::async_trait;
use log::{debug, info};
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

const SEARCH_ROUTE: &str = "/search/issues";

/// Connection settings for `OctocrabClient::connect`
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Personal access token
    pub token: String,

    /// API base URL; `None` means public GitHub
    pub base_url: Option<String>,

    /// Connect and read timeout applied to every request
    pub timeout: Duration,
}

impl ClientSettings {
    /// Settings for public GitHub with a 30 second timeout
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Query string parameters of the search endpoint
#[derive(Debug, Serialize)]
struct SearchParams<'a> {
    q: &'a str,
}

/// Direct GitHub search client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Build an authenticated octocrab instance from `settings`
    ///
    /// Octocrab's retry layer is switched off: a failed search surfaces
    /// after a single request.
    pub fn connect(settings: &ClientSettings) -> anyhow::Result<Self> {
        let base_url = settings.base_url.as_deref().unwrap_or(DEFAULT_API_URL);
        info!("Creating GitHub search client for {}", base_url);

        let mut builder = Octocrab::builder()
            .add_header(
                http::header::AUTHORIZATION,
                format!("token {}", settings.token),
            )
            .add_header(http::header::ACCEPT, ACCEPT_V3.to_string())
            .add_retry_config(RetryConfig::None)
            .set_connect_timeout(Some(settings.timeout))
            .set_read_timeout(Some(settings.timeout));

        if base_url != DEFAULT_API_URL {
            builder = builder
                .base_uri(base_url)
                .with_context(|| format!("Invalid API base URL: {}", base_url))?;
        }

        let octocrab = builder.build().context("Failed to build Octocrab client")?;
        Ok(Self::new(Arc::new(octocrab)))
    }
}

#[async_trait]
impl SearchClient for OctocrabClient {
    async fn search_pull_requests(&self, query: &str) -> Result<SearchPage, SearchError> {
        debug!("Searching: {}", query);

        let response: SearchIssuesResponse = self
            .octocrab
            .get(SEARCH_ROUTE, Some(&SearchParams { q: query }))
            .await
            .map_err(convert_error)?;

        let page = SearchPage::from(response);
        debug!(
            "Search returned {} of {} matches for: {}",
            page.items.len(),
            page.total_count,
            query
        );
        Ok(page)
    }
}

/// Convert an octocrab error into our error taxonomy
fn convert_error(err: octocrab::Error) -> SearchError {
    match err {
        octocrab::Error::GitHub { source, .. } => {
            SearchError::from_status(source.status_code.as_u16(), source.message.clone())
        }
        octocrab::Error::Serde { source, .. } => SearchError::Decode(source.to_string()),
        octocrab::Error::Json { source, .. } => SearchError::Decode(source.to_string()),
        other => SearchError::Transport(other.to_string()),
    }
}
