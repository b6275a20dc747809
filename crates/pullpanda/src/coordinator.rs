//! Concurrent fan-out over handles
//!
//! Each handle gets its own tokio task. A semaphore caps how many handles
//! are fetched at once. Results land in a slot indexed by the handle's
//! position in the configuration, so the output order never depends on
//! which task finished first.

use crate::query::QueryPlan;
use crate::summary::{summarize_handle, ScopeFailure, Summary};
use gh_search_client::{SearchClient, SearchError};
use log::{debug, error};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Handles fetched at once when nothing else is configured
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Runs `summarize_handle` for every handle
pub struct Coordinator {
    client: Arc<dyn SearchClient>,
    plan: Arc<QueryPlan>,
    max_concurrency: usize,
    collect_prs: bool,
}

impl Coordinator {
    pub fn new(client: Arc<dyn SearchClient>, plan: QueryPlan) -> Self {
        Self {
            client,
            plan: Arc::new(plan),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            collect_prs: false,
        }
    }

    /// Cap the number of handles fetched at once (minimum 1)
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    /// Keep every fetched PR on the summaries, for the detail listing
    pub fn with_pull_requests(mut self, collect_prs: bool) -> Self {
        self.collect_prs = collect_prs;
        self
    }

    pub fn plan(&self) -> &QueryPlan {
        &self.plan
    }

    /// Fetch every handle and return one summary per handle, in input order
    ///
    /// Dropping the returned future aborts all in-flight handle tasks.
    pub async fn run(&self, handles: &[String]) -> Vec<Summary> {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));
        let mut tasks = JoinSet::new();

        for (index, handle) in handles.iter().enumerate() {
            let client = Arc::clone(&self.client);
            let plan = Arc::clone(&self.plan);
            let semaphore = Arc::clone(&semaphore);
            let handle = handle.clone();
            let collect_prs = self.collect_prs;

            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await;
                debug!("Fetching PRs for {} (slot {})", handle, index);
                let summary = summarize_handle(client.as_ref(), &plan, &handle, collect_prs).await;
                (index, summary)
            });
        }

        let mut slots: Vec<Option<Summary>> = handles.iter().map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, summary)) => slots[index] = Some(summary),
                Err(err) => error!("Handle task failed: {}", err),
            }
        }

        slots
            .into_iter()
            .zip(handles)
            .map(|(slot, handle)| slot.unwrap_or_else(|| self.lost_summary(handle)))
            .collect()
    }

    /// Summary for a handle whose task panicked before reporting
    fn lost_summary(&self, handle: &str) -> Summary {
        let mut summary = Summary::new(handle, self.plan.statuses());
        summary.failures.push(ScopeFailure {
            status: self.plan.statuses().join(","),
            scope: None,
            error: SearchError::Transport("handle task terminated unexpectedly".to_string()),
        });
        summary
    }
}
