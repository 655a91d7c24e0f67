//! Mock hosting API for run-level tests

#![allow(dead_code)]

use async_trait::async_trait;
use autopr::error::{Error, Result};
use autopr::host::HostingApi;
use autopr::types::PullRequestRef;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Recorded `create_pull_request` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCall {
    pub title: String,
    pub body: String,
    pub base: String,
    pub head: String,
}

/// Recorded list-valued metadata call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCall {
    pub number: u64,
    pub items: Vec<String>,
}

/// In-memory [`HostingApi`] that records every call and supports error
/// injection.
pub struct MockHost {
    next_pr_number: AtomicU64,
    create_calls: Mutex<Vec<CreateCall>>,
    label_calls: Mutex<Vec<ListCall>>,
    assignee_calls: Mutex<Vec<ListCall>>,
    milestone_calls: Mutex<Vec<(u64, u64)>>,
    reviewer_calls: Mutex<Vec<ListCall>>,
    team_reviewer_calls: Mutex<Vec<ListCall>>,
    duplicate_create: Mutex<bool>,
    create_error: Mutex<Option<String>>,
    label_error: Mutex<Option<String>>,
    assignee_error: Mutex<Option<String>>,
    reviewer_error: Mutex<Option<String>>,
    missing_milestone: Mutex<Option<u64>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            next_pr_number: AtomicU64::new(1),
            create_calls: Mutex::new(Vec::new()),
            label_calls: Mutex::new(Vec::new()),
            assignee_calls: Mutex::new(Vec::new()),
            milestone_calls: Mutex::new(Vec::new()),
            reviewer_calls: Mutex::new(Vec::new()),
            team_reviewer_calls: Mutex::new(Vec::new()),
            duplicate_create: Mutex::new(false),
            create_error: Mutex::new(None),
            label_error: Mutex::new(None),
            assignee_error: Mutex::new(None),
            reviewer_error: Mutex::new(None),
            missing_milestone: Mutex::new(None),
        }
    }

    // ==================== Error injection ====================

    /// Reject creation as a duplicate, the way GitHub answers when a pull
    /// request for the head branch already exists.
    pub fn reject_creates_as_duplicate(&self) {
        *self.duplicate_create.lock().unwrap() = true;
    }

    pub fn fail_create(&self, message: &str) {
        *self.create_error.lock().unwrap() = Some(message.to_string());
    }

    pub fn fail_labels(&self, message: &str) {
        *self.label_error.lock().unwrap() = Some(message.to_string());
    }

    pub fn fail_assignees(&self, message: &str) {
        *self.assignee_error.lock().unwrap() = Some(message.to_string());
    }

    pub fn fail_reviewers(&self, message: &str) {
        *self.reviewer_error.lock().unwrap() = Some(message.to_string());
    }

    /// Make `set_milestone` report `number` as absent from the repository.
    pub fn missing_milestone(&self, number: u64) {
        *self.missing_milestone.lock().unwrap() = Some(number);
    }

    // ==================== Inspection helpers ====================

    pub fn create_calls(&self) -> Vec<CreateCall> {
        self.create_calls.lock().unwrap().clone()
    }

    pub fn create_count(&self) -> usize {
        self.create_calls.lock().unwrap().len()
    }

    pub fn labels_applied(&self) -> Vec<ListCall> {
        self.label_calls.lock().unwrap().clone()
    }

    pub fn assignees_applied(&self) -> Vec<ListCall> {
        self.assignee_calls.lock().unwrap().clone()
    }

    pub fn milestones_applied(&self) -> Vec<(u64, u64)> {
        self.milestone_calls.lock().unwrap().clone()
    }

    pub fn reviewers_requested(&self) -> Vec<ListCall> {
        self.reviewer_calls.lock().unwrap().clone()
    }

    pub fn team_reviewers_requested(&self) -> Vec<ListCall> {
        self.team_reviewer_calls.lock().unwrap().clone()
    }

    pub fn assert_created(&self, head: &str, base: &str) {
        let calls = self.create_calls();
        assert!(
            calls.iter().any(|call| call.head == head && call.base == base),
            "Expected a pull request from '{head}' into '{base}', but got: {calls:?}"
        );
    }

    pub fn assert_nothing_created(&self) {
        let calls = self.create_calls();
        assert!(calls.is_empty(), "Expected no pull request creation, but got: {calls:?}");
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostingApi for MockHost {
    async fn create_pull_request(
        &self,
        title: &str,
        body: &str,
        base: &str,
        head: &str,
    ) -> Result<PullRequestRef> {
        self.create_calls.lock().unwrap().push(CreateCall {
            title: title.to_string(),
            body: body.to_string(),
            base: base.to_string(),
            head: head.to_string(),
        });

        if let Some(message) = self.create_error.lock().unwrap().clone() {
            return Err(Error::GitHubApi(message));
        }
        if *self.duplicate_create.lock().unwrap() {
            return Err(Error::PullRequestExists { head: head.to_string() });
        }

        let number = self.next_pr_number.fetch_add(1, Ordering::SeqCst);
        Ok(PullRequestRef {
            number,
            html_url: format!("https://github.com/octocat/widgets/pull/{number}"),
            head_ref: head.to_string(),
            base_ref: base.to_string(),
        })
    }

    async fn set_labels(&self, number: u64, labels: &[String]) -> Result<()> {
        self.label_calls.lock().unwrap().push(ListCall { number, items: labels.to_vec() });
        if let Some(message) = self.label_error.lock().unwrap().clone() {
            return Err(Error::GitHubApi(message));
        }
        Ok(())
    }

    async fn set_assignees(&self, number: u64, assignees: &[String]) -> Result<()> {
        self.assignee_calls.lock().unwrap().push(ListCall { number, items: assignees.to_vec() });
        if let Some(message) = self.assignee_error.lock().unwrap().clone() {
            return Err(Error::GitHubApi(message));
        }
        Ok(())
    }

    async fn set_milestone(&self, number: u64, milestone: u64) -> Result<()> {
        self.milestone_calls.lock().unwrap().push((number, milestone));
        if *self.missing_milestone.lock().unwrap() == Some(milestone) {
            return Err(Error::MilestoneNotFound(milestone));
        }
        Ok(())
    }

    async fn request_reviewers(&self, number: u64, reviewers: &[String]) -> Result<()> {
        self.reviewer_calls.lock().unwrap().push(ListCall { number, items: reviewers.to_vec() });
        if let Some(message) = self.reviewer_error.lock().unwrap().clone() {
            return Err(Error::GitHubApi(message));
        }
        Ok(())
    }

    async fn request_team_reviewers(&self, number: u64, team_reviewers: &[String]) -> Result<()> {
        self.team_reviewer_calls
            .lock()
            .unwrap()
            .push(ListCall { number, items: team_reviewers.to_vec() });
        Ok(())
    }
}
