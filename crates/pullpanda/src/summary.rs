//! Per-handle aggregation
//!
//! `summarize_handle` runs every planned search for one handle, one after
//! the other, and folds the results into a `Summary`. A failed search is
//! recorded on the summary and the remaining searches still run.

use crate::query::{QueryPlan, Scope};
use gh_search_client::{PullRequest, SearchClient, SearchError};
use log::{debug, warn};
use std::collections::HashMap;

/// A search that did not produce results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeFailure {
    pub status: String,
    /// `None` for an unscoped search, or when the whole handle task died
    pub scope: Option<Scope>,
    pub error: SearchError,
}

/// Aggregated pull request activity of one handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub handle: String,
    /// Count per configured status
    pub counts: HashMap<String, usize>,
    /// Every PR found, status-major then scope-major; only filled when
    /// details were requested
    pub prs: Vec<PullRequest>,
    pub failures: Vec<ScopeFailure>,
}

impl Summary {
    /// An empty summary with a zero count for every status
    pub fn new(handle: impl Into<String>, statuses: &[String]) -> Self {
        Self {
            handle: handle.into(),
            counts: statuses.iter().map(|s| (s.clone(), 0)).collect(),
            prs: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Count for `status`, zero if it was never searched
    pub fn count(&self, status: &str) -> usize {
        self.counts.get(status).copied().unwrap_or(0)
    }

    /// Whether at least one search for this handle failed
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Run every search of `plan` for `handle` and aggregate the results
pub async fn summarize_handle(
    client: &dyn SearchClient,
    plan: &QueryPlan,
    handle: &str,
    collect_prs: bool,
) -> Summary {
    let mut summary = Summary::new(handle, plan.statuses());

    for planned in plan.queries_for(handle) {
        debug!("Fetching {} PRs for {}: {}", planned.status, handle, planned.query);

        match client.search_pull_requests(&planned.query).await {
            Ok(page) => {
                if page.is_truncated() {
                    warn!(
                        "Only the first page was fetched ({} of {} matches) for: {}",
                        page.items.len(),
                        page.total_count,
                        planned.query
                    );
                }

                *summary.counts.entry(planned.status).or_insert(0) += page.items.len();
                if collect_prs {
                    summary.prs.extend(page.items);
                }
            }
            Err(error) => {
                warn!("Search failed for {}: {} ({})", handle, planned.query, error);
                summary.failures.push(ScopeFailure {
                    status: planned.status,
                    scope: planned.scope,
                    error,
                });
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::DateWindow;
    use async_trait::async_trait;
    use gh_search_client::SearchPage;
    use std::sync::{Arc, Mutex};

    fn pr(title: &str) -> PullRequest {
        PullRequest {
            url: format!("https://api.github.com/repos/o/r/issues/{}", title),
            title: title.to_string(),
            merged: false,
            html_url: None,
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    /// Mock client answering by substring of the query
    struct MockClient {
        responses: Vec<(&'static str, Result<Vec<PullRequest>, SearchError>)>,
        queries: Arc<Mutex<Vec<String>>>,
    }

    impl MockClient {
        fn new(responses: Vec<(&'static str, Result<Vec<PullRequest>, SearchError>)>) -> Self {
            Self {
                responses,
                queries: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn queries(&self) -> Vec<String> {
            self.queries.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SearchClient for MockClient {
        async fn search_pull_requests(&self, query: &str) -> Result<SearchPage, SearchError> {
            self.queries.lock().unwrap().push(query.to_string());
            self.responses
                .iter()
                .find(|(needle, _)| query.contains(needle))
                .map(|(_, response)| response.clone().map(SearchPage::from_items))
                .unwrap_or_else(|| Ok(SearchPage::default()))
        }
    }

    #[tokio::test]
    async fn test_counts_per_status() {
        let client = MockClient::new(vec![
            ("is:merged", Ok(vec![pr("m1"), pr("m2")])),
            ("is:open", Ok(vec![pr("o1")])),
        ]);
        let plan = QueryPlan::new(strings(&["merged", "open"]), &[], &[], DateWindow::default());

        let summary = summarize_handle(&client, &plan, "alice", false).await;

        assert_eq!(summary.handle, "alice");
        assert_eq!(summary.count("merged"), 2);
        assert_eq!(summary.count("open"), 1);
        assert!(summary.prs.is_empty());
        assert!(!summary.is_partial());
        assert_eq!(client.queries().len(), 2);
    }

    #[tokio::test]
    async fn test_scopes_accumulate_in_order() {
        let client = MockClient::new(vec![
            ("is:merged org:a", Ok(vec![pr("a1")])),
            ("is:merged org:b", Ok(vec![pr("b1"), pr("b2")])),
            ("is:open org:a", Ok(vec![pr("a3")])),
        ]);
        let orgs = strings(&["a", "b"]);
        let plan = QueryPlan::new(strings(&["merged", "open"]), &orgs, &[], DateWindow::default());

        let summary = summarize_handle(&client, &plan, "alice", true).await;

        assert_eq!(summary.count("merged"), 3);
        assert_eq!(summary.count("open"), 1);
        let titles: Vec<_> = summary.prs.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["a1", "b1", "b2", "a3"]);
        assert_eq!(
            client.queries(),
            vec![
                "author:alice is:pr is:merged org:a",
                "author:alice is:pr is:merged org:b",
                "author:alice is:pr is:open org:a",
                "author:alice is:pr is:open org:b",
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_scope_does_not_stop_the_rest() {
        let client = MockClient::new(vec![
            (
                "org:a",
                Err(SearchError::from_status(429, "slow down")),
            ),
            ("org:b", Ok(vec![pr("b1")])),
        ]);
        let orgs = strings(&["a", "b"]);
        let plan = QueryPlan::new(strings(&["merged"]), &orgs, &[], DateWindow::default());

        let summary = summarize_handle(&client, &plan, "alice", true).await;

        assert_eq!(summary.count("merged"), 1);
        assert!(summary.is_partial());
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].scope, Some(Scope::Org("a".to_string())));
        assert!(summary.failures[0].error.is_rate_limited());
    }

    #[tokio::test]
    async fn test_unconfigured_status_is_zero() {
        let client = MockClient::new(vec![]);
        let plan = QueryPlan::new(strings(&["merged"]), &[], &[], DateWindow::default());

        let summary = summarize_handle(&client, &plan, "bob", false).await;

        assert_eq!(summary.count("merged"), 0);
        assert_eq!(summary.count("open"), 0);
    }
}
