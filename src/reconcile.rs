//! Workspace reconciliation onto the target branch

use crate::error::Result;
use crate::git::{StashPop, VersionControl};
use crate::progress::Progress;

/// How reconciliation completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Local changes landed on the branch without conflict
    Clean,
    /// The stash pop conflicted; conflicting paths were resolved to the
    /// branch's version and the rest of the local changes survived
    ConflictResolved,
}

/// Carry the local working tree, untracked files included, onto `branch`.
///
/// A new branch is created at the current HEAD with the working tree left
/// untouched. An existing branch is entered via stash, checkout, pop; a
/// conflicting pop falls back to keeping the branch's version of every
/// conflicting path and unstaging the rest, so the branch's history wins
/// where both sides changed a file. Stash and checkout failures abort the
/// run; a failed pop keeps its stash entry, so the local changes are never
/// lost.
pub fn reconcile(
    git: &dyn VersionControl,
    branch: &str,
    branch_exists: bool,
    progress: &dyn Progress,
) -> Result<ReconcileOutcome> {
    if !branch_exists {
        git.checkout(branch, true)?;
        return Ok(ReconcileOutcome::Clean);
    }

    let stashed = git.stash()?;
    git.checkout(branch, false)?;
    if !stashed {
        return Ok(ReconcileOutcome::Clean);
    }

    match git.stash_pop()? {
        StashPop::Applied => Ok(ReconcileOutcome::Clean),
        StashPop::Conflict => {
            progress.say(&format!(
                "Stash pop conflicted; keeping '{branch}' versions of conflicting files."
            ));
            git.take_branch_version(".")?;
            git.reset_index()?;
            Ok(ReconcileOutcome::ConflictResolved)
        }
    }
}
