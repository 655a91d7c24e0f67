//! Version-control capability
//!
//! The run depends on this narrow trait instead of shelling out directly,
//! so the reconciliation and idempotency logic can be exercised against an
//! in-memory fake. [`GitCli`] is the real subprocess adapter.

mod cli;

pub use cli::GitCli;

use crate::error::Result;
use crate::types::WorkspaceState;

/// Outcome of popping the reconciliation stash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StashPop {
    /// The stash applied cleanly
    Applied,
    /// The stash conflicted with the checked-out branch; the entry is kept
    Conflict,
}

/// Version-control operations the run needs
pub trait VersionControl {
    /// 7-character abbreviated hash of HEAD.
    fn current_short_sha(&self) -> Result<String>;

    /// Remote-qualified branch names known locally, e.g. `origin/main`.
    fn remote_branch_names(&self) -> Result<Vec<String>>;

    /// Whether tracked files have uncommitted modifications.
    fn is_dirty(&self) -> Result<bool>;

    /// Paths of untracked files.
    fn untracked_files(&self) -> Result<Vec<String>>;

    /// Stash working-tree changes, untracked files included.
    ///
    /// Returns false when the tree was clean and no stash entry was
    /// created, so callers know there is nothing to pop.
    fn stash(&self) -> Result<bool>;

    /// Pop the most recent stash entry.
    ///
    /// A conflicting pop is a normal outcome, not an error. The entry
    /// stays in the stash list when it does not apply cleanly.
    fn stash_pop(&self) -> Result<StashPop>;

    /// Check out `branch`, creating it at HEAD when `create` is set.
    fn checkout(&self, branch: &str, create: bool) -> Result<()>;

    /// Unstage everything, leaving the working tree as it is.
    fn reset_index(&self) -> Result<()>;

    /// Resolve unmerged paths under `pathspec` to the checked-out branch's
    /// version, discarding the stashed side of the conflict.
    fn take_branch_version(&self, pathspec: &str) -> Result<()>;

    /// Stage all changes, untracked files included, and commit them.
    fn commit_all(&self, message: &str) -> Result<()>;

    /// Force-push `branch` to origin with upstream tracking.
    fn force_push(&self, branch: &str) -> Result<()>;

    /// Point the origin remote at a token-authenticated URL for
    /// `repository`, so pushes authenticate without credential helpers.
    fn set_remote_url(&self, token: &str, repository: &str) -> Result<()>;

    /// Set the commit identity for this repository.
    fn set_identity(&self, email: &str, name: &str) -> Result<()>;

    /// Snapshot whether the working tree has anything to publish.
    fn workspace_state(&self) -> Result<WorkspaceState> {
        Ok(WorkspaceState {
            is_dirty: self.is_dirty()?,
            untracked_count: self.untracked_files()?.len(),
        })
    }
}
