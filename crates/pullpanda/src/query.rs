//! Search query construction
//!
//! A `QueryPlan` captures everything that is identical for every handle
//! (statuses, scopes, date window). Expanding it for one handle yields the
//! exact list of searches to run, in status-major, scope-minor order.

use crate::window::{DateWindow, DATE_FORMAT};
use std::fmt;

/// Restricts a search to one organization or one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Org(String),
    Repo(String),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Org(org) => write!(f, "org:{}", org),
            Scope::Repo(repo) => write!(f, "repo:{}", repo),
        }
    }
}

/// Scopes to search, in configuration order
///
/// Orgs win over repos when both are configured. With neither, a single
/// unscoped pass (`None`) is returned.
pub fn scopes_for(orgs: &[String], repos: &[String]) -> Vec<Option<Scope>> {
    if !orgs.is_empty() {
        orgs.iter().cloned().map(Scope::Org).map(Some).collect()
    } else if !repos.is_empty() {
        repos.iter().cloned().map(Scope::Repo).map(Some).collect()
    } else {
        vec![None]
    }
}

/// Date qualifier used for `status`
///
/// Only merged PRs have a merge date, every other state filters on creation.
pub fn date_field(status: &str) -> &'static str {
    if status == "merged" {
        "merged"
    } else {
        "created"
    }
}

/// Compose the search query for one (handle, status, scope) triple
pub fn build_query(
    handle: &str,
    status: &str,
    window: &DateWindow,
    scope: Option<&Scope>,
) -> String {
    let mut query = format!("author:{} is:pr is:{}", handle, status);
    let field = date_field(status);

    if let Some(start) = window.start {
        query.push_str(&format!(" {}:>={}", field, start.format(DATE_FORMAT)));
    }
    if let Some(end) = window.end {
        query.push_str(&format!(" {}:<={}", field, end.format(DATE_FORMAT)));
    }
    if let Some(scope) = scope {
        query.push_str(&format!(" {}", scope));
    }

    query
}

/// One search to run for a handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedQuery {
    pub status: String,
    pub scope: Option<Scope>,
    pub query: String,
}

/// Handle-independent part of every search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    statuses: Vec<String>,
    scopes: Vec<Option<Scope>>,
    window: DateWindow,
}

impl QueryPlan {
    pub fn new(
        statuses: Vec<String>,
        orgs: &[String],
        repos: &[String],
        window: DateWindow,
    ) -> Self {
        Self {
            statuses,
            scopes: scopes_for(orgs, repos),
            window,
        }
    }

    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }

    pub fn scopes(&self) -> &[Option<Scope>] {
        &self.scopes
    }

    pub fn window(&self) -> &DateWindow {
        &self.window
    }

    /// Every search for `handle`, statuses outer, scopes inner
    pub fn queries_for(&self, handle: &str) -> Vec<PlannedQuery> {
        self.statuses
            .iter()
            .flat_map(|status| {
                self.scopes.iter().map(move |scope| PlannedQuery {
                    status: status.clone(),
                    scope: scope.clone(),
                    query: build_query(handle, status, &self.window, scope.as_ref()),
                })
            })
            .collect()
    }
}
