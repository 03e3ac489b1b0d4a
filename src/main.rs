// src/main.rs

//! procwatch CLI
//!
//! Each invocation performs at most one check; scheduling is external
//! (cron, systemd timers). The exit code reflects the run outcome so a
//! scheduler can alert on failures while treating "not published yet" as
//! normal.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use procwatch::models::Config;
use procwatch::services::{Fetcher, HttpFetcher, MailgunNotifier, Monitor, RenderedFetcher};
use procwatch::storage::StateFile;

/// procwatch - proceedings publication monitor
#[derive(Parser, Debug)]
#[command(
    name = "procwatch",
    version,
    about = "Watches a proceedings page and notifies once when the target publication appears"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Perform one monitoring run (the default)
    Check,

    /// Validate the configuration file
    Validate,

    /// Show the persisted notification state
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);

    match cli.command.unwrap_or(Command::Check) {
        Command::Check => run_check(config).await,
        Command::Validate => run_validate(&config),
        Command::Info => run_info(&config).await,
    }
}

/// Run the monitor once and map the outcome to an exit code.
async fn run_check(config: Config) -> ExitCode {
    let config = Arc::new(config);

    let fetcher: Box<dyn Fetcher> = match config.http.render_endpoint.as_deref() {
        Some(endpoint) => Box::new(RenderedFetcher::new(&config.http, endpoint)),
        None => Box::new(HttpFetcher::new(&config.http)),
    };
    let notifier = Box::new(MailgunNotifier::new(&config.email));
    let store = StateFile::new(&config.monitor.state_file);

    let monitor = Monitor::new(Arc::clone(&config), fetcher, notifier, store);
    let outcome = monitor.run().await;
    log::info!("Run finished: {:?}", outcome);

    ExitCode::from(outcome.exit_code())
}

fn run_validate(config: &Config) -> ExitCode {
    match config.validate() {
        Ok(()) => {
            log::info!("Configuration is valid");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_info(config: &Config) -> ExitCode {
    let store = StateFile::new(&config.monitor.state_file);
    let state = store.load().await;

    println!("state file:  {}", store.path().display());
    println!("notified:    {}", state.notified);
    if let Some(at) = state.notified_at {
        println!("notified at: {}", at);
    }
    ExitCode::SUCCESS
}
