//! Command line flags

use clap::{ArgAction, Parser};
use pullpanda_config::DEFAULT_CONFIG_FILE;
use std::path::PathBuf;

/// Count the pull requests of the configured GitHub handles
#[derive(Debug, Parser)]
#[command(name = "pullpanda", version, about)]
pub struct Cli {
    /// Config file listing handles, orgs, repos and statuses
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// GitHub personal access token (falls back to GITHUB_TOKEN / GH_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Start date in YYYY-MM-DD format
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub start_date: Option<String>,

    /// End date in YYYY-MM-DD format
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub end_date: Option<String>,

    /// Look back this far instead of --start-date, e.g. 1mo, 2w, 7d, 12h, 30m, 10s
    #[arg(long)]
    pub duration: Option<String>,

    /// Enable debug logging on stderr
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub enable_log: bool,

    /// Show detailed PRs after the summary table
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub show_prs: bool,

    /// Maximum number of handles fetched at once (overrides the config file)
    #[arg(long, value_parser = parse_concurrency)]
    pub max_concurrency: Option<usize>,

    /// Per-request connect and read timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// GitHub API base URL, for GitHub Enterprise
    #[arg(long)]
    pub api_url: Option<String>,
}

fn parse_concurrency(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
