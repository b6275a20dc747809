use anyhow::{bail, Context, Result};
use clap::Parser;
use gh_search_client::{ClientSettings, OctocrabClient, TokenResolver};
use pullpanda::{
    render_detailed_prs, render_failures, Coordinator, DateWindow, QueryPlan, SummaryTable,
    DEFAULT_MAX_CONCURRENCY,
};
use pullpanda_config::AppConfig;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

mod cli;
mod logger;

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.enable_log);

    log::info!("Starting pullpanda");

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            log::error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every search succeeded
async fn run(cli: Cli) -> Result<bool> {
    let token = TokenResolver::new(cli.token.clone()).resolve()?;

    let config = AppConfig::load(&cli.config)?;
    log::debug!("Loaded config: {:?}", config);

    let window = DateWindow::resolve(
        cli.start_date.as_deref(),
        cli.end_date.as_deref(),
        cli.duration.as_deref(),
        chrono::Local::now().naive_local(),
    )?;

    let settings = ClientSettings {
        token,
        base_url: cli.api_url.clone(),
        timeout: Duration::from_secs(cli.timeout),
    };
    let client =
        OctocrabClient::connect(&settings).context("Failed to initialize GitHub client")?;

    let max_concurrency = cli
        .max_concurrency
        .or(config.max_concurrency)
        .unwrap_or(DEFAULT_MAX_CONCURRENCY);
    let plan = QueryPlan::new(
        config.statuses.clone(),
        &config.orgs,
        &config.repos,
        window,
    );
    let coordinator = Coordinator::new(Arc::new(client), plan)
        .with_max_concurrency(max_concurrency)
        .with_pull_requests(cli.show_prs);

    let plan = coordinator.plan();
    log::info!(
        "Searching {} handle(s) x {} status(es) x {} scope(s), date window {}, {} at a time",
        config.handles.len(),
        plan.statuses().len(),
        plan.scopes().len(),
        plan.window(),
        max_concurrency
    );

    let summaries = tokio::select! {
        summaries = coordinator.run(&config.handles) => summaries,
        _ = tokio::signal::ctrl_c() => bail!("Interrupted, in-flight searches were aborted"),
    };

    let table = SummaryTable::from_summaries(&summaries, &config.statuses);
    println!("{}", table.render());

    if cli.show_prs {
        println!();
        print!("{}", render_detailed_prs(&summaries));
    }

    match render_failures(&summaries) {
        Some(report) => {
            eprintln!();
            eprint!("{}", report);
            Ok(false)
        }
        None => Ok(true),
    }
}
