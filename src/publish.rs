//! Committing and pushing the outstanding changes

use crate::error::Result;
use crate::git::VersionControl;
use crate::progress::Progress;

/// Commit everything and force-push the branch with upstream tracking.
///
/// The branch belongs to this automation and is rewritten wholesale on
/// every run for a given commit, hence the force push. Callers check the
/// working tree for changes first; committing a clean tree is an error.
pub fn publish(
    git: &dyn VersionControl,
    branch: &str,
    message: &str,
    progress: &dyn Progress,
) -> Result<()> {
    progress.say("Pushing changes.");
    git.commit_all(message)?;
    git.force_push(branch)?;
    Ok(())
}
