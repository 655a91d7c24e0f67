//! GitHub hosting adapter

use crate::error::{Error, Result};
use crate::host::HostingApi;
use crate::types::PullRequestRef;
use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::debug;

/// GitHub implementation of [`HostingApi`].
///
/// Uses octocrab for the endpoints it models and raw HTTP for the rest
/// (milestones, review requests).
pub struct GitHubApi {
    client: Octocrab,
    owner: String,
    repo: String,
    /// Token for raw API requests
    token: String,
    /// HTTP client for endpoints octocrab does not cover
    http_client: reqwest::Client,
    /// Base URL for raw API requests
    api_base: String,
}

impl std::fmt::Debug for GitHubApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The client and token are omitted: the token must never reach
        // the logs, and octocrab's client is not Debug.
        f.debug_struct("GitHubApi")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl GitHubApi {
    /// Create an adapter for `repository` in `owner/repo` form.
    ///
    /// `api_url` overrides the `https://api.github.com` base, for GitHub
    /// Enterprise hosts and tests.
    pub fn new(token: &str, repository: &str, api_url: Option<&str>) -> Result<Self> {
        let (owner, repo) = repository.split_once('/').ok_or_else(|| {
            Error::Config(format!("GITHUB_REPOSITORY must be 'owner/repo', got '{repository}'"))
        })?;

        let mut builder = Octocrab::builder().personal_token(token.to_string());

        let api_base = match api_url {
            Some(url) => {
                let base = url.trim_end_matches('/').to_string();
                builder = builder
                    .base_uri(base.clone())
                    .map_err(|e| Error::GitHubApi(format!("Invalid API base URL: {e}")))?;
                base
            }
            None => "https://api.github.com".to_string(),
        };

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create GitHub client: {e}")))?;

        let http_client = reqwest::Client::builder()
            .user_agent("autopr")
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            owner: owner.to_string(),
            repo: repo.to_string(),
            token: token.to_string(),
            http_client,
            api_base,
        })
    }

    fn repo_url(&self, path: &str) -> String {
        format!("{}/repos/{}/{}/{path}", self.api_base, self.owner, self.repo)
    }

    async fn post_review_request(&self, number: u64, body: serde_json::Value) -> Result<()> {
        let url = self.repo_url(&format!("pulls/{number}/requested_reviewers"));
        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to request reviewers: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::GitHubApi(format!(
                "Failed to request reviewers: HTTP {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl HostingApi for GitHubApi {
    async fn create_pull_request(
        &self,
        title: &str,
        body: &str,
        base: &str,
        head: &str,
    ) -> Result<PullRequestRef> {
        debug!(head, base, "creating pull request");

        let result = self
            .client
            .pulls(&self.owner, &self.repo)
            .create(title, head, base)
            .body(body)
            .send()
            .await;

        let pr = match result {
            Ok(pr) => pr,
            Err(octocrab::Error::GitHub { source, .. }) if is_duplicate_pr(&source) => {
                return Err(Error::PullRequestExists { head: head.to_string() });
            }
            Err(e) => return Err(e.into()),
        };

        let created = pr_from_octocrab(&pr, base, head);
        debug!(pr_number = created.number, "created pull request");
        Ok(created)
    }

    async fn set_labels(&self, number: u64, labels: &[String]) -> Result<()> {
        debug!(pr_number = number, count = labels.len(), "applying labels");
        self.client.issues(&self.owner, &self.repo).add_labels(number, labels).await?;
        Ok(())
    }

    async fn set_assignees(&self, number: u64, assignees: &[String]) -> Result<()> {
        debug!(pr_number = number, count = assignees.len(), "applying assignees");
        let assignees: Vec<&str> = assignees.iter().map(String::as_str).collect();
        self.client.issues(&self.owner, &self.repo).add_assignees(number, &assignees).await?;
        Ok(())
    }

    async fn set_milestone(&self, number: u64, milestone: u64) -> Result<()> {
        debug!(pr_number = number, milestone, "applying milestone");

        // Resolve the milestone first so a bad number fails with a clear
        // error instead of a generic validation failure from the update.
        let url = self.repo_url(&format!("milestones/{milestone}"));
        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to fetch milestone {milestone}: {e}")))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::MilestoneNotFound(milestone));
        }
        if !response.status().is_success() {
            return Err(Error::GitHubApi(format!(
                "Failed to fetch milestone {milestone}: HTTP {}",
                response.status()
            )));
        }

        let url = self.repo_url(&format!("issues/{number}"));
        let response = self
            .http_client
            .patch(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .json(&serde_json::json!({ "milestone": milestone }))
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to apply milestone: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::GitHubApi(format!(
                "Failed to apply milestone: HTTP {}",
                response.status()
            )));
        }

        debug!(pr_number = number, milestone, "applied milestone");
        Ok(())
    }

    async fn request_reviewers(&self, number: u64, reviewers: &[String]) -> Result<()> {
        debug!(pr_number = number, count = reviewers.len(), "requesting reviewers");
        self.post_review_request(number, serde_json::json!({ "reviewers": reviewers })).await
    }

    async fn request_team_reviewers(&self, number: u64, team_reviewers: &[String]) -> Result<()> {
        debug!(pr_number = number, count = team_reviewers.len(), "requesting team reviewers");
        self.post_review_request(number, serde_json::json!({ "team_reviewers": team_reviewers }))
            .await
    }
}

/// GitHub reports a duplicate pull request as a 422 whose error detail
/// says one already exists for the head branch.
fn is_duplicate_pr(source: &octocrab::GitHubError) -> bool {
    if source.message.contains("already exists") {
        return true;
    }
    source.errors.as_ref().is_some_and(|errors| {
        errors.iter().any(|error| {
            error
                .get("message")
                .and_then(serde_json::Value::as_str)
                .is_some_and(|message| message.contains("already exists"))
        })
    })
}

/// Convert an octocrab pull request into our [`PullRequestRef`].
///
/// The requested branch names are used as a fallback; GitHub echoes them
/// back, but several response fields are optional in the model.
fn pr_from_octocrab(
    pr: &octocrab::models::pulls::PullRequest,
    base: &str,
    head: &str,
) -> PullRequestRef {
    PullRequestRef {
        number: pr.number,
        html_url: pr.html_url.as_ref().map(ToString::to_string).unwrap_or_default(),
        head_ref: if pr.head.ref_field.is_empty() {
            head.to_string()
        } else {
            pr.head.ref_field.clone()
        },
        base_ref: if pr.base.ref_field.is_empty() {
            base.to_string()
        } else {
            pr.base.ref_field.clone()
        },
    }
}
