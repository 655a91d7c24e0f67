//! Trigger event parsing
//!
//! Turns the JSON event payload the workflow runner writes to disk into a
//! typed [`TriggerEvent`] up front, so the rest of the run never inspects
//! raw payload fields.

use crate::error::{Error, Result};
use crate::types::{CommitAuthor, EventKind, TriggerEvent};
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
struct RawEvent {
    #[serde(rename = "ref")]
    git_ref: Option<String>,
    deleted: Option<bool>,
    head_commit: Option<RawHeadCommit>,
}

#[derive(Deserialize)]
struct RawHeadCommit {
    author: Option<RawAuthor>,
}

#[derive(Deserialize)]
struct RawAuthor {
    email: Option<String>,
    name: Option<String>,
}

/// Read the raw event payload from the file the runner wrote.
pub fn read_payload(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| Error::Event(format!("failed to read {}: {e}", path.display())))
}

/// Parse the JSON payload into a validated [`TriggerEvent`].
///
/// Push payloads must carry a `ref`; `deleted` defaults to false when
/// omitted. Only push payloads are mined for the head commit author, since
/// other events do not describe a commit; those runs fall back to the
/// actor identity at commit time.
pub fn parse_trigger_event(event_name: &str, payload: &str) -> Result<TriggerEvent> {
    let raw: RawEvent = serde_json::from_str(payload)
        .map_err(|e| Error::Event(format!("invalid event payload: {e}")))?;

    if event_name == "push" {
        let git_ref = raw
            .git_ref
            .ok_or_else(|| Error::Event("push event payload has no ref".to_string()))?;
        let head_commit_author = raw
            .head_commit
            .and_then(|commit| commit.author)
            .and_then(|author| match (author.email, author.name) {
                (Some(email), Some(name)) => Some(CommitAuthor { email, name }),
                _ => None,
            });

        return Ok(TriggerEvent {
            kind: EventKind::Push,
            git_ref,
            deleted: raw.deleted.unwrap_or(false),
            head_commit_author,
        });
    }

    Ok(TriggerEvent {
        kind: EventKind::Other(event_name.to_string()),
        git_ref: raw.git_ref.unwrap_or_default(),
        deleted: false,
        head_commit_author: None,
    })
}

/// Render the raw payload as indented JSON for the `DEBUG_EVENT` dump.
pub fn pretty_payload(payload: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(payload)
        .map_err(|e| Error::Event(format!("invalid event payload: {e}")))?;
    serde_json::to_string_pretty(&value)
        .map_err(|e| Error::Event(format!("failed to render event payload: {e}")))
}
