//! The run decision procedure
//!
//! A run is one linear pass: classify the event, resolve the branch name,
//! look for it on the remote, reconcile the working tree onto it, publish
//! the changes, and create or skip the pull request. Every decision point
//! reports through the [`Progress`] sink.

use crate::branch::{self, SuffixStrategy};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::git::VersionControl;
use crate::host::HostingApi;
use crate::orchestrate::{self, PullRequestMetadata};
use crate::progress::Progress;
use crate::publish;
use crate::reconcile;
use crate::types::{PullRequestRef, TriggerEvent};

/// Why a run ended without publishing anything
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// A push that deleted its branch; closing an automated pull request
    /// fires one of these
    DeletedBranchPush,
    /// A push outside the heads namespace
    IgnoredRef {
        /// The ref the push was for
        git_ref: String,
    },
    /// The workflow ran on a branch this tool created
    SelfReferentialBranch {
        /// The branch the workflow ran on
        current: String,
    },
    /// Deterministic naming and the branch already exists for this commit
    BranchExistsForCommit {
        /// The resolved branch name
        branch: String,
    },
    /// Nothing to commit
    CleanWorkingTree,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeletedBranchPush => write!(f, "Ignoring delete branch event."),
            Self::IgnoredRef { git_ref } => {
                write!(f, "Ignoring event for non-branch ref '{git_ref}'.")
            }
            Self::SelfReferentialBranch { current } => {
                write!(f, "Branch '{current}' was created by this tool. Skipping.")
            }
            Self::BranchExistsForCommit { branch } => write!(
                f,
                "Pull request branch '{branch}' already exists for this commit. Skipping."
            ),
            Self::CleanWorkingTree => {
                write!(f, "Repository has no modified or untracked files. Skipping.")
            }
        }
    }
}

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The run decided there was nothing to do; this is a success
    Skipped(SkipReason),
    /// The branch pre-existed and its contents were refreshed; the pull
    /// request from an earlier run is still open against it
    BranchUpdated {
        /// The resolved branch name
        branch: String,
    },
    /// A new pull request was created
    PullRequestCreated {
        /// The created pull request
        pull_request: PullRequestRef,
    },
    /// A concurrent run created the pull request first; the push still
    /// landed
    PullRequestExists {
        /// The resolved branch name
        branch: String,
    },
}

/// Execute one complete run.
///
/// Skips are reported as [`RunOutcome::Skipped`], never as errors; any
/// `Err` from here means the run failed and the process should exit
/// non-zero.
pub async fn run(
    config: &Config,
    event: &TriggerEvent,
    git: &dyn VersionControl,
    host: &dyn HostingApi,
    progress: &dyn Progress,
) -> Result<RunOutcome> {
    if !config.skip_ignore && event.should_ignore() {
        let reason = if event.deleted {
            SkipReason::DeletedBranchPush
        } else {
            SkipReason::IgnoredRef { git_ref: event.git_ref.clone() }
        };
        return Ok(RunOutcome::Skipped(reason));
    }

    // The branch the workflow ran on is the merge target. A run on a
    // branch this tool created must stop here, or every run would chain a
    // new pull request off the previous run's branch.
    let base = config.target_base();
    if branch::is_self_referential(base, &config.branch) {
        return Ok(RunOutcome::Skipped(SkipReason::SelfReferentialBranch {
            current: base.to_string(),
        }));
    }

    let resolved = branch::resolve_branch(&config.branch, config.branch_suffix, git)?;

    // The existence check and the later force push are not atomic across
    // concurrent runs: two runs can both see the branch as new. Last push
    // wins the branch, and the loser's create call is downgraded below.
    let branch_exists = branch::remote_branch_exists(git, &resolved.name)?;

    // Deterministic naming makes reruns on the same commit no-ops.
    if resolved.strategy == SuffixStrategy::ShortCommitHash && branch_exists {
        return Ok(RunOutcome::Skipped(SkipReason::BranchExistsForCommit {
            branch: resolved.name,
        }));
    }

    let author = event.author_or_actor(&config.github_actor);
    git.set_identity(&author.email, &author.name)?;

    reconcile::reconcile(git, &resolved.name, branch_exists, progress)?;

    // The tree is inspected after reconciliation: a conflicting pop can
    // leave nothing to commit once the branch's versions are kept.
    if !git.workspace_state()?.has_changes() {
        return Ok(RunOutcome::Skipped(SkipReason::CleanWorkingTree));
    }
    progress.say("Repository has modified or untracked files.");

    git.set_remote_url(&config.github_token, &config.github_repository)?;
    publish::publish(git, &resolved.name, &config.commit_message, progress)?;

    let metadata = PullRequestMetadata::from_config(config, base, &resolved.name);
    match orchestrate::publish_pull_request(host, &metadata, branch_exists, progress).await {
        Ok(Some(pull_request)) => Ok(RunOutcome::PullRequestCreated { pull_request }),
        Ok(None) => Ok(RunOutcome::BranchUpdated { branch: resolved.name }),
        Err(Error::PullRequestExists { head }) => {
            progress.say(&format!("A pull request already exists for {head}."));
            Ok(RunOutcome::PullRequestExists { branch: resolved.name })
        }
        Err(e) => Err(e),
    }
}
