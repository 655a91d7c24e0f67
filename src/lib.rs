//! autopr publishes local working-tree changes as a pull request.
//!
//! Built for one-shot CI runs: classify the trigger event, resolve a
//! branch name for this run, reconcile the working tree onto that branch,
//! commit and force-push, then create the pull request, or recognize that
//! an earlier run already did.

pub mod branch;
pub mod config;
pub mod error;
pub mod event;
pub mod git;
pub mod host;
pub mod orchestrate;
pub mod output;
pub mod progress;
pub mod publish;
pub mod reconcile;
pub mod run;
pub mod types;
