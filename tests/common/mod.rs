//! Shared fixtures for run-level tests

#![allow(dead_code)]

pub mod mock_host;

pub use fake_git::{FakeGit, GitCall};
pub use mock_host::MockHost;

use autopr::config::Config;
use autopr::types::{CommitAuthor, EventKind, TriggerEvent};

/// Required workflow variables for a push on main.
pub fn base_vars() -> Vec<(String, String)> {
    [
        ("GITHUB_TOKEN", "ghs_testtoken"),
        ("GITHUB_REPOSITORY", "octocat/widgets"),
        ("GITHUB_REF", "refs/heads/main"),
        ("GITHUB_ACTOR", "octocat"),
        ("GITHUB_EVENT_NAME", "push"),
        ("GITHUB_EVENT_PATH", "/github/workflow/event.json"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Config for a push on main with everything else defaulted.
pub fn test_config() -> Config {
    config_with(&[])
}

/// Config for a push on main with `extra` variables on top.
pub fn config_with(extra: &[(&str, &str)]) -> Config {
    let mut vars = base_vars();
    vars.extend(extra.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())));
    Config::from_vars(vars).unwrap()
}

/// A branch push with a head commit author.
pub fn push_event() -> TriggerEvent {
    TriggerEvent {
        kind: EventKind::Push,
        git_ref: "refs/heads/main".to_string(),
        deleted: false,
        head_commit_author: Some(CommitAuthor {
            email: "dev@example.com".to_string(),
            name: "Dev".to_string(),
        }),
    }
}

/// A push that deleted its branch.
pub fn deleted_push_event() -> TriggerEvent {
    TriggerEvent {
        kind: EventKind::Push,
        git_ref: "refs/heads/main".to_string(),
        deleted: true,
        head_commit_author: None,
    }
}

/// A push to a tag ref.
pub fn tag_push_event() -> TriggerEvent {
    TriggerEvent {
        kind: EventKind::Push,
        git_ref: "refs/tags/v1.0.0".to_string(),
        deleted: false,
        head_commit_author: None,
    }
}

/// An event without a commit, e.g. a manual dispatch.
pub fn dispatch_event() -> TriggerEvent {
    TriggerEvent {
        kind: EventKind::Other("workflow_dispatch".to_string()),
        git_ref: String::new(),
        deleted: false,
        head_commit_author: None,
    }
}
