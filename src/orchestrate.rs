//! Pull request creation and metadata application

use crate::config::Config;
use crate::error::Result;
use crate::host::HostingApi;
use crate::progress::Progress;
use crate::types::PullRequestRef;

/// Everything the hosting API needs to open and decorate the pull request
///
/// Built once from configuration plus the resolved branch names; never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestMetadata {
    /// Pull request title
    pub title: String,
    /// Pull request body
    pub body: String,
    /// Branch the pull request merges into
    pub base: String,
    /// Branch the pull request merges from
    pub head: String,
    /// Labels to apply
    pub labels: Vec<String>,
    /// Users to assign
    pub assignees: Vec<String>,
    /// Milestone number to assign
    pub milestone: Option<u64>,
    /// Users to request review from
    pub reviewers: Vec<String>,
    /// Teams to request review from
    pub team_reviewers: Vec<String>,
}

impl PullRequestMetadata {
    /// Assemble the metadata for this run.
    #[must_use]
    pub fn from_config(config: &Config, base: &str, head: &str) -> Self {
        Self {
            title: config.title.clone(),
            body: config.body.clone(),
            base: base.to_string(),
            head: head.to_string(),
            labels: config.labels.clone(),
            assignees: config.assignees.clone(),
            milestone: config.milestone,
            reviewers: config.reviewers.clone(),
            team_reviewers: config.team_reviewers.clone(),
        }
    }
}

/// Create the pull request and apply its metadata.
///
/// When the branch already existed before this run, an earlier run owns
/// the pull request; nothing is created and `None` is returned. Metadata
/// steps run independently after creation, each skipped when its input is
/// empty. The first failing step aborts the run; the progress log shows
/// which steps completed.
pub async fn publish_pull_request(
    host: &dyn HostingApi,
    metadata: &PullRequestMetadata,
    branch_existed: bool,
    progress: &dyn Progress,
) -> Result<Option<PullRequestRef>> {
    if branch_existed {
        return Ok(None);
    }

    progress.say(&format!(
        "Creating a request to pull {} into {}.",
        metadata.head, metadata.base
    ));
    let pr = host
        .create_pull_request(&metadata.title, &metadata.body, &metadata.base, &metadata.head)
        .await?;
    progress.say(&format!("Created pull request {}.", pr.number));

    if !metadata.labels.is_empty() {
        progress.say("Applying labels");
        host.set_labels(pr.number, &metadata.labels).await?;
    }
    if !metadata.assignees.is_empty() {
        progress.say("Applying assignees");
        host.set_assignees(pr.number, &metadata.assignees).await?;
    }
    if let Some(milestone) = metadata.milestone {
        progress.say("Applying milestone");
        host.set_milestone(pr.number, milestone).await?;
    }
    if !metadata.reviewers.is_empty() {
        progress.say("Requesting reviewers");
        host.request_reviewers(pr.number, &metadata.reviewers).await?;
    }
    if !metadata.team_reviewers.is_empty() {
        progress.say("Requesting team reviewers");
        host.request_team_reviewers(pr.number, &metadata.team_reviewers).await?;
    }

    Ok(Some(pr))
}
