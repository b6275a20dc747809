//! Count the pull requests a list of GitHub handles authored
//!
//! The pipeline is:
//!
//! ```text
//! config + flags ──► QueryPlan ──► Coordinator ──► Vec<Summary> ──► SummaryTable
//!                                     │
//!                        one task per handle, each running
//!                        summarize_handle() over statuses × scopes
//! ```
//!
//! Everything that talks to GitHub goes through the `SearchClient` trait from
//! `gh-search-client`, which keeps this crate testable without a network.

pub mod coordinator;
pub mod duration;
pub mod query;
pub mod report;
pub mod summary;
pub mod window;

pub use coordinator::{Coordinator, DEFAULT_MAX_CONCURRENCY};
pub use duration::{parse_duration, DurationError};
pub use query::{build_query, QueryPlan, Scope};
pub use report::{render_detailed_prs, render_failures, SummaryTable};
pub use summary::{summarize_handle, ScopeFailure, Summary};
pub use window::{DateWindow, WindowError};
