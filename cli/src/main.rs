//! CLI for the Jira timeline renderer.
//!
//! This tool runs a Jira search and draws the matching issues as an SVG
//! Gantt-style timeline in a standalone HTML document.

use chrono::NaiveDate;
use clap::{ArgGroup, Parser};
use jira_timeline::{
    load_config, ConfigError, RunOutcome, RunSummary, Runner, RunnerConfig, RunnerError,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Jira Timeline - Draw Jira search results as a Gantt-style timeline.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("query").required(true).args(["page_url", "jql"])))]
struct Args {
    /// Path to a timeline.toml settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Jira page URL carrying a `jql` query parameter.
    #[arg(long)]
    page_url: Option<String>,

    /// JQL query to run.
    #[arg(long)]
    jql: Option<String>,

    /// Jira base URL; overrides the settings file.
    #[arg(long, env = "JIRA_BASE_URL")]
    base_url: Option<String>,

    /// Jira API token; defaults to the variable named by `token-env`.
    #[arg(long)]
    token: Option<String>,

    /// Username for basic auth; bearer auth is used without it.
    #[arg(long)]
    username: Option<String>,

    /// Where to write the timeline document.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Date to treat as today (YYYY-MM-DD).
    #[arg(long)]
    today: Option<NaiveDate>,
}

/// Failures that stop the CLI.
#[derive(Debug)]
enum CliError {
    Config(ConfigError),
    Setup(RunnerError),
    Runner(RunnerError),
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    ExitCode::from(report(run(args).await))
}

/// Reports the result of a run and returns the process exit status.
///
/// Only load failures, which leave a failure notice on the surface, exit
/// with 1. Setup and render failures exit with 2.
fn report(result: Result<RunOutcome, CliError>) -> u8 {
    match result {
        Ok(RunOutcome::Rendered(summary)) => {
            print_summary(&summary);
            0
        }
        Ok(RunOutcome::Superseded { generation }) => {
            println!("Trigger {generation} was superseded; nothing rendered.");
            0
        }
        Err(CliError::Runner(RunnerError::Load(e))) => {
            error!(error = %e, "Failed to load issues");
            1
        }
        Err(CliError::Runner(e)) => {
            error!(error = %e, "Critical failure");
            2
        }
        Err(CliError::Setup(e)) => {
            error!(error = %e, "Failed to set up runner");
            2
        }
        Err(CliError::Config(e)) => {
            error!(error = %e, "Invalid configuration");
            2
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunOutcome, CliError> {
    let mut settings =
        load_config(args.config.as_deref(), args.base_url.as_deref()).map_err(CliError::Config)?;
    if args.username.is_some() {
        settings.username = args.username;
    }

    let mut config = RunnerConfig::new(settings);
    if let Some(token) = args.token {
        config = config.with_token(token);
    }
    if let Some(output) = args.output {
        config = config.with_output(output);
    }
    if let Some(today) = args.today {
        config = config.with_today(today);
    }

    let runner = Runner::new(config).map_err(CliError::Setup)?;
    let outcome = match (args.page_url, args.jql) {
        (Some(page_url), _) => runner.trigger_from_page(&page_url).await,
        (None, jql) => runner.trigger(jql.as_deref().unwrap_or_default()).await,
    };
    outcome.map_err(CliError::Runner)
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Query: {}", summary.jql);
    println!("  Today: {}", summary.today);
    println!("  Issues: {}", summary.issues);
    println!("  Bars: {}", summary.bars);
    println!("  Markers: {}", summary.markers);
    println!(
        "  Gridlines: {} month, {} week",
        summary.month_lines, summary.week_lines
    );
    println!("  Written to: {}", summary.surface.display());
}
