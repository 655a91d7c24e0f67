//! autopr binary entry point

mod cli;

use autopr::config::Config;
use autopr::error::Result;
use autopr::event;
use autopr::git::GitCli;
use autopr::host::GitHubApi;
use autopr::output;
use autopr::run::{self, RunOutcome};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Publish local working-tree changes as a pull request
#[derive(Debug, Parser)]
#[command(name = "autopr", version, about)]
struct Cli {
    /// Repository to operate on
    #[arg(long, default_value = ".")]
    path: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match execute(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            cli::report_error(&error);
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: &Cli) -> Result<()> {
    let config = Config::from_env()?;

    let payload = event::read_payload(&config.event_path)?;
    if config.debug_event {
        anstream::println!("{}", config.event_name);
        anstream::println!("{}", event::pretty_payload(&payload)?);
    }
    let trigger = event::parse_trigger_event(&config.event_name, &payload)?;

    let git = GitCli::new(&cli.path);
    let host = GitHubApi::new(&config.github_token, &config.github_repository, None)?;
    let progress = cli::ConsoleProgress;

    let outcome = run::run(&config, &trigger, &git, &host, &progress).await?;

    if let RunOutcome::PullRequestCreated { pull_request } = &outcome {
        output::set_output("pull-request-number", &pull_request.number.to_string())?;
    }
    cli::report_outcome(&outcome);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
