//! Decision-point reporting
//!
//! The run core never prints directly; it reports each decision through
//! this sink. The binary installs a console reporter, tests pass
//! [`NoopProgress`].

/// Sink for the human-readable decision lines a run produces
pub trait Progress {
    /// Report one decision or step.
    fn say(&self, message: &str);
}

/// Progress sink that discards every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

impl Progress for NoopProgress {
    fn say(&self, _message: &str) {}
}
