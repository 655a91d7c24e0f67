//! Error types for autopr

use thiserror::Error;

/// Errors that can abort a run
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid configuration value
    #[error("configuration error: {0}")]
    Config(String),

    /// The trigger event payload could not be read or validated
    #[error("event payload error: {0}")]
    Event(String),

    /// A git command failed
    #[error("git {command} failed: {detail}")]
    Git {
        /// The git subcommand and arguments that failed
        command: String,
        /// Stderr from git, or the spawn failure
        detail: String,
    },

    /// GitHub API error from the octocrab client
    #[error("GitHub API error: {0}")]
    GitHub(#[from] octocrab::Error),

    /// GitHub API error from raw HTTP requests or client setup
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Pull request creation was rejected because one already exists
    ///
    /// This is the one hosting error a run recovers from: it means a
    /// concurrent run for the same branch won the creation race.
    #[error("a pull request already exists for branch '{head}'")]
    PullRequestExists {
        /// Head branch of the rejected pull request
        head: String,
    },

    /// The configured milestone does not exist in the repository
    #[error("milestone {0} not found in repository")]
    MilestoneNotFound(u64),

    /// I/O failure on run inputs or outputs
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout autopr
pub type Result<T> = std::result::Result<T, Error>;
