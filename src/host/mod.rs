//! Hosting API capability
//!
//! Pull request creation and metadata live behind this trait so the
//! orchestration logic can run against an in-memory mock. [`GitHubApi`] is
//! the real adapter.

mod github;

pub use github::GitHubApi;

use crate::error::Result;
use crate::types::PullRequestRef;
use async_trait::async_trait;

/// Hosting-API operations the run needs
#[async_trait]
pub trait HostingApi: Send + Sync {
    /// Create a pull request merging `head` into `base`.
    ///
    /// Fails with [`Error::PullRequestExists`](crate::error::Error) when
    /// the host already has an open pull request for `head`.
    async fn create_pull_request(
        &self,
        title: &str,
        body: &str,
        base: &str,
        head: &str,
    ) -> Result<PullRequestRef>;

    /// Apply labels to the pull request.
    async fn set_labels(&self, number: u64, labels: &[String]) -> Result<()>;

    /// Assign users to the pull request.
    async fn set_assignees(&self, number: u64, assignees: &[String]) -> Result<()>;

    /// Assign a milestone, resolving it against the repository first.
    async fn set_milestone(&self, number: u64, milestone: u64) -> Result<()>;

    /// Request reviews from individual users.
    async fn request_reviewers(&self, number: u64, reviewers: &[String]) -> Result<()>;

    /// Request reviews from teams.
    async fn request_team_reviewers(&self, number: u64, team_reviewers: &[String]) -> Result<()>;
}
