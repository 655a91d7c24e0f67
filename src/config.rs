//! Run configuration
//!
//! Everything a run needs arrives through environment variables set by the
//! workflow runner. [`Config::from_vars`] does the resolution from an
//! explicit variable set so tests never touch the process environment.

use crate::branch::SuffixStrategy;
use crate::error::{Error, Result};
use crate::types::HEADS_PREFIX;
use std::collections::HashMap;
use std::path::PathBuf;

/// Resolved configuration for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// Workflow token used for pushes and API calls
    pub github_token: String,
    /// Repository in `owner/repo` form
    pub github_repository: String,
    /// Fully qualified ref the workflow ran on
    pub github_ref: String,
    /// User that triggered the workflow
    pub github_actor: String,
    /// Name of the trigger event
    pub event_name: String,
    /// Path to the JSON event payload
    pub event_path: PathBuf,
    /// Base name for the pull request branch
    pub branch: String,
    /// Strategy for making the branch name run-specific
    pub branch_suffix: SuffixStrategy,
    /// Message for the automated commit
    pub commit_message: String,
    /// Pull request title
    pub title: String,
    /// Pull request body
    pub body: String,
    /// Labels to apply to a created pull request
    pub labels: Vec<String>,
    /// Users to assign to a created pull request
    pub assignees: Vec<String>,
    /// Milestone number to assign to a created pull request
    pub milestone: Option<u64>,
    /// Users to request review from
    pub reviewers: Vec<String>,
    /// Teams to request review from
    pub team_reviewers: Vec<String>,
    /// Dump the event payload before doing anything else
    pub debug_event: bool,
    /// Bypass the event classifier and process the event regardless
    pub skip_ignore: bool,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Resolve configuration from an explicit set of variables.
    ///
    /// Unset and empty values are treated the same, matching how workflow
    /// runners pass absent inputs through as empty strings.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: HashMap<String, String> = vars.into_iter().collect();

        let branch_suffix = match vars.get("BRANCH_SUFFIX").map(String::as_str) {
            None | Some("") => SuffixStrategy::ShortCommitHash,
            Some(value) => value.parse()?,
        };

        let milestone = match vars.get("PULL_REQUEST_MILESTONE").map(String::as_str) {
            None | Some("") => None,
            Some(value) => Some(value.parse().map_err(|e| {
                Error::Config(format!("invalid PULL_REQUEST_MILESTONE '{value}': {e}"))
            })?),
        };

        Ok(Self {
            github_token: required(&vars, "GITHUB_TOKEN")?,
            github_repository: required(&vars, "GITHUB_REPOSITORY")?,
            github_ref: required(&vars, "GITHUB_REF")?,
            github_actor: required(&vars, "GITHUB_ACTOR")?,
            event_name: required(&vars, "GITHUB_EVENT_NAME")?,
            event_path: PathBuf::from(required(&vars, "GITHUB_EVENT_PATH")?),
            branch: or_default(&vars, "PULL_REQUEST_BRANCH", "create-pull-request/patch"),
            branch_suffix,
            commit_message: or_default(
                &vars,
                "COMMIT_MESSAGE",
                "Auto-committed changes by autopr",
            ),
            title: or_default(&vars, "PULL_REQUEST_TITLE", "Auto-generated by autopr"),
            body: or_default(
                &vars,
                "PULL_REQUEST_BODY",
                "Auto-generated pull request by [autopr](https://github.com/autopr/autopr)",
            ),
            labels: list(&vars, "PULL_REQUEST_LABELS"),
            assignees: list(&vars, "PULL_REQUEST_ASSIGNEES"),
            milestone,
            reviewers: list(&vars, "PULL_REQUEST_REVIEWERS"),
            team_reviewers: list(&vars, "PULL_REQUEST_TEAM_REVIEWERS"),
            debug_event: flag(&vars, "DEBUG_EVENT"),
            skip_ignore: flag(&vars, "SKIP_IGNORE"),
        })
    }

    /// The branch the workflow ran on, with the heads prefix stripped.
    ///
    /// This is the merge target of the created pull request.
    #[must_use]
    pub fn target_base(&self) -> &str {
        self.github_ref
            .strip_prefix(HEADS_PREFIX)
            .unwrap_or(&self.github_ref)
    }
}

fn required(vars: &HashMap<String, String>, key: &str) -> Result<String> {
    vars.get(key)
        .filter(|value| !value.is_empty())
        .cloned()
        .ok_or_else(|| Error::Config(format!("{key} is not set")))
}

fn or_default(vars: &HashMap<String, String>, key: &str, default: &str) -> String {
    vars.get(key)
        .filter(|value| !value.is_empty())
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

fn list(vars: &HashMap<String, String>, key: &str) -> Vec<String> {
    vars.get(key).map(|value| split_list(value)).unwrap_or_default()
}

fn flag(vars: &HashMap<String, String>, key: &str) -> bool {
    vars.get(key).is_some_and(|value| !value.is_empty())
}

/// Split a comma-separated value, trimming whitespace and dropping empties.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}
