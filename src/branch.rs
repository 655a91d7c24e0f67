//! Branch naming and remote branch lookup
//!
//! The branch name for a run is resolved exactly once; the remote
//! existence check, the reconciliation, the push, and the pull request all
//! join on that single name.

use crate::error::{Error, Result};
use crate::git::VersionControl;
use chrono::Utc;
use rand::Rng;
use rand::distributions::Alphanumeric;
use std::str::FromStr;

/// Remote-qualified prefix used for exact-match branch lookups
const ORIGIN_PREFIX: &str = "origin/";

/// Strategy for making the branch name run-specific
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixStrategy {
    /// Suffix with the abbreviated hash of HEAD; one branch per commit
    ShortCommitHash,
    /// Suffix with seconds since the epoch; a fresh branch every run
    Timestamp,
    /// Suffix with seven random lowercase alphanumerics; a fresh branch
    /// every run
    Random,
    /// Use the configured name unchanged
    None,
}

impl FromStr for SuffixStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "short-commit-hash" => Ok(Self::ShortCommitHash),
            "timestamp" => Ok(Self::Timestamp),
            "random" => Ok(Self::Random),
            "none" => Ok(Self::None),
            other => Err(Error::Config(format!(
                "unknown branch suffix '{other}' (expected short-commit-hash, timestamp, random, or none)"
            ))),
        }
    }
}

impl std::fmt::Display for SuffixStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ShortCommitHash => "short-commit-hash",
            Self::Timestamp => "timestamp",
            Self::Random => "random",
            Self::None => "none",
        };
        write!(f, "{name}")
    }
}

/// The branch name resolved for this run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBranch {
    /// Configured base name
    pub base: String,
    /// Strategy that produced `name`
    pub strategy: SuffixStrategy,
    /// The run-specific branch name
    pub name: String,
}

/// Resolve the branch name for this run.
pub fn resolve_branch(
    base: &str,
    strategy: SuffixStrategy,
    git: &dyn VersionControl,
) -> Result<ResolvedBranch> {
    let name = match strategy {
        SuffixStrategy::ShortCommitHash => format!("{base}-{}", git.current_short_sha()?),
        SuffixStrategy::Timestamp => format!("{base}-{}", Utc::now().timestamp()),
        SuffixStrategy::Random => format!("{base}-{}", random_suffix(7)),
        SuffixStrategy::None => base.to_string(),
    };
    Ok(ResolvedBranch { base: base.to_string(), strategy, name })
}

fn random_suffix(len: usize) -> String {
    let mut rng = rand::thread_rng();
    std::iter::repeat_with(|| rng.sample(Alphanumeric))
        .map(char::from)
        .take(len)
        .collect::<String>()
        .to_lowercase()
}

/// Whether the branch the workflow ran on was itself created by this tool.
///
/// A run on such a branch must abort before touching the remote: its pull
/// request would chain off the previous run's branch instead of the real
/// target.
#[must_use]
pub fn is_self_referential(current_branch: &str, branch_base: &str) -> bool {
    current_branch.starts_with(branch_base)
}

/// Whether `name` already exists on the origin remote.
///
/// Exact match against `origin/<name>`; a branch whose name merely starts
/// with `name` does not count.
pub fn remote_branch_exists(git: &dyn VersionControl, name: &str) -> Result<bool> {
    let target = format!("{ORIGIN_PREFIX}{name}");
    Ok(git.remote_branch_names()?.iter().any(|remote| *remote == target))
}
