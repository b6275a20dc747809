//! GitHub issue/PR search client
//!
//! This crate provides a trait-based client for the GitHub search API.
//! The rest of pullpanda only talks to the `SearchClient` trait, so the
//! octocrab-backed implementation can be swapped for a mock in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              SearchClient trait                  │
//! │  - search_pull_requests()                        │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ OctocrabClient  │         │ test doubles        │
//! │ (direct API)    │         │ (canned pages)      │
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_search_client::{ClientSettings, OctocrabClient, SearchClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = OctocrabClient::connect(&ClientSettings::new("token"))?;
//! let page = client
//!     .search_pull_requests("author:octocat is:pr is:merged")
//!     .await?;
//! println!("{} PRs", page.items.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod octocrab_client;
pub mod token;
pub mod types;

/// Default GitHub API base URL (public GitHub)
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Accept header value sent with every search request
pub const ACCEPT_V3: &str = "application/vnd.github.v3+json";

pub use client::{SearchClient, SearchError};
pub use octocrab_client::{ClientSettings, OctocrabClient};
pub use token::{TokenError, TokenResolver};
pub use types::{PullRequest, SearchPage};
