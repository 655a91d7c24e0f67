//! Core types shared across the run

use serde::{Deserialize, Serialize};

/// Ref namespace for branches; pushes outside it (tags, notes) are ignored
pub const HEADS_PREFIX: &str = "refs/heads/";

/// Kind of workflow event that triggered the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// A push to the repository
    Push,
    /// Any other trigger, kept by name for logging
    Other(String),
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Push => write!(f, "push"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

/// Commit identity used for the automated commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitAuthor {
    /// Author email
    pub email: String,
    /// Author name
    pub name: String,
}

/// Validated record of the event that triggered the run
///
/// Built once from the payload file; nothing downstream touches raw
/// payload fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerEvent {
    /// What kind of event fired
    pub kind: EventKind,
    /// The git ref the event refers to, empty when the payload has none
    pub git_ref: String,
    /// Whether a push event deleted its branch
    pub deleted: bool,
    /// Author of the head commit, when the payload carries one
    pub head_commit_author: Option<CommitAuthor>,
}

impl TriggerEvent {
    /// Whether this event should be ignored rather than processed.
    ///
    /// Branch-deletion pushes are ignored: closing an automated pull
    /// request and deleting its branch fires a push that would otherwise
    /// recreate the branch from the same commit. Pushes outside the heads
    /// namespace are ignored too. Every other event is processed.
    #[must_use]
    pub fn should_ignore(&self) -> bool {
        if matches!(self.kind, EventKind::Push) {
            if self.deleted {
                return true;
            }
            if !self.git_ref.starts_with(HEADS_PREFIX) {
                return true;
            }
        }
        false
    }

    /// The commit author to use for this run.
    ///
    /// Falls back to a noreply identity for the triggering actor when the
    /// payload names no author.
    #[must_use]
    pub fn author_or_actor(&self, actor: &str) -> CommitAuthor {
        self.head_commit_author.clone().unwrap_or_else(|| CommitAuthor {
            email: format!("{actor}@users.noreply.github.com"),
            name: actor.to_string(),
        })
    }
}

/// A created or pre-existing pull request, as reported by the hosting API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRef {
    /// Pull request number
    pub number: u64,
    /// Web URL of the pull request
    pub html_url: String,
    /// Branch the pull request merges from
    pub head_ref: String,
    /// Branch the pull request merges into
    pub base_ref: String,
}

/// Snapshot of whether the working tree has anything to publish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkspaceState {
    /// Whether tracked files have uncommitted modifications
    pub is_dirty: bool,
    /// Number of untracked files
    pub untracked_count: usize,
}

impl WorkspaceState {
    /// True when there is anything to commit at all.
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.is_dirty || self.untracked_count > 0
    }
}
