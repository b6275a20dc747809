use async_trait::async_trait;
use gh_search_client::{PullRequest, SearchClient, SearchError, SearchPage};
use pullpanda::{render_detailed_prs, Coordinator, DateWindow, QueryPlan, SummaryTable};
use std::sync::{Arc, Mutex};

/// Canned results keyed by (handle, status)
struct FakeGitHub {
    queries: Mutex<Vec<String>>,
}

impl FakeGitHub {
    fn new() -> Self {
        Self {
            queries: Mutex::new(Vec::new()),
        }
    }

    fn pr(handle: &str, n: u32, merged: bool) -> PullRequest {
        PullRequest {
            url: format!("https://api.github.com/repos/acme/app/issues/{}", n),
            title: format!("{} change {}", handle, n),
            merged,
            html_url: Some(format!("https://github.com/acme/app/pull/{}", n)),
        }
    }
}

#[async_trait]
impl SearchClient for FakeGitHub {
    async fn search_pull_requests(&self, query: &str) -> Result<SearchPage, SearchError> {
        self.queries.lock().unwrap().push(query.to_string());

        let items = if query.starts_with("author:alice ") && query.contains("is:merged") {
            vec![Self::pr("alice", 1, true), Self::pr("alice", 2, true)]
        } else if query.starts_with("author:alice ") && query.contains("is:open") {
            vec![Self::pr("alice", 3, false)]
        } else {
            Vec::new()
        };
        Ok(SearchPage::from_items(items))
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

async fn run_scenario(show_prs: bool) -> (Vec<pullpanda::Summary>, Vec<String>, Arc<FakeGitHub>) {
    let handles = strings(&["alice", "bob"]);
    let statuses = strings(&["merged", "open"]);
    let client = Arc::new(FakeGitHub::new());

    let plan = QueryPlan::new(statuses.clone(), &[], &[], DateWindow::default());
    let summaries = Coordinator::new(client.clone(), plan)
        .with_pull_requests(show_prs)
        .run(&handles)
        .await;

    (summaries, statuses, client)
}

#[tokio::test]
async fn test_summary_table_rows_and_totals() {
    let (summaries, statuses, client) = run_scenario(false).await;

    let table = SummaryTable::from_summaries(&summaries, &statuses);

    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].label, "alice");
    assert_eq!(table.rows[0].counts, vec![2, 1]);
    assert_eq!(table.rows[0].total, 3);
    assert_eq!(table.rows[1].label, "bob");
    assert_eq!(table.rows[1].counts, vec![0, 0]);
    assert_eq!(table.rows[1].total, 0);
    assert_eq!(table.totals.counts, vec![2, 1]);
    assert_eq!(table.totals.total, 3);

    // One unscoped search per (handle, status)
    let queries = client.queries.lock().unwrap().clone();
    assert_eq!(queries.len(), 4);
    assert!(queries
        .iter()
        .all(|q| !q.contains("org:") && !q.contains("repo:")));

    let rendered = table.render();
    assert!(rendered.lines().any(|l| l.contains("alice") && l.contains('3')));
    assert!(rendered.lines().any(|l| l.contains("bob") && l.contains('0')));
}

#[tokio::test]
async fn test_detail_listing() {
    let (summaries, _, _) = run_scenario(true).await;

    let listing = render_detailed_prs(&summaries);

    let mut per_handle: Vec<(String, Vec<String>)> = Vec::new();
    for line in listing.lines().skip(1) {
        if let Some(entry) = line.strip_prefix("- ") {
            per_handle
                .last_mut()
                .expect("PR line before any handle header")
                .1
                .push(entry.to_string());
        } else if let Some(handle) = line.strip_suffix(':') {
            per_handle.push((handle.to_string(), Vec::new()));
        }
    }

    assert_eq!(per_handle.len(), 2);
    assert_eq!(per_handle[0].0, "alice");
    assert_eq!(
        per_handle[0].1,
        vec![
            "[alice change 1] https://github.com/acme/app/pull/1",
            "[alice change 2] https://github.com/acme/app/pull/2",
            "[alice change 3] https://github.com/acme/app/pull/3",
        ]
    );
    assert_eq!(per_handle[1].0, "bob");
    assert!(per_handle[1].1.is_empty());
}

#[tokio::test]
async fn test_prs_not_collected_without_detail_mode() {
    let (summaries, _, _) = run_scenario(false).await;

    assert!(summaries.iter().all(|s| s.prs.is_empty()));
}
