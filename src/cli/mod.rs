//! Console reporting for the autopr binary

mod style;

use style::{Stylize, check};

use anstream::{eprintln, println};
use autopr::error::Error;
use autopr::progress::Progress;
use autopr::run::RunOutcome;

/// Progress sink that prints each decision line as it happens
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn say(&self, message: &str) {
        println!("{message}");
    }
}

/// Print the final line for a finished run.
pub fn report_outcome(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::Skipped(reason) => println!("{}", reason.to_string().muted()),
        RunOutcome::BranchUpdated { branch } => {
            println!("{} Updated pull request branch {}.", check(), branch.accent());
        }
        RunOutcome::PullRequestCreated { pull_request } => {
            println!(
                "{} Pull request #{}: {}",
                check(),
                pull_request.number.accent(),
                pull_request.html_url.emphasis()
            );
        }
        RunOutcome::PullRequestExists { branch } => {
            println!(
                "{} Branch {} updated; a pull request for it already exists.",
                check(),
                branch.accent()
            );
        }
    }
}

/// Print a fatal error to stderr.
pub fn report_error(error: &Error) {
    eprintln!("{} {error}", "error:".failure());
}
