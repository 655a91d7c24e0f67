//! Terminal styling helpers
//!
//! Colors degrade to plain text automatically when the stream is not a
//! terminal, so CI logs stay clean.

use owo_colors::{OwoColorize, Stream};

/// Styling for the run's console lines
pub trait Stylize: std::fmt::Display + Sized {
    /// Bold, for the load-bearing fragment of a line
    fn emphasis(&self) -> String {
        self.if_supports_color(Stream::Stdout, |text| text.bold()).to_string()
    }

    /// Dimmed, for skip lines
    fn muted(&self) -> String {
        self.if_supports_color(Stream::Stdout, |text| text.dimmed()).to_string()
    }

    /// Cyan, for branch names and numbers
    fn accent(&self) -> String {
        self.if_supports_color(Stream::Stdout, |text| text.cyan()).to_string()
    }

    /// Green, for success markers
    fn success(&self) -> String {
        self.if_supports_color(Stream::Stdout, |text| text.green()).to_string()
    }

    /// Red, for the fatal error prefix on stderr
    fn failure(&self) -> String {
        self.if_supports_color(Stream::Stderr, |text| text.red()).to_string()
    }
}

impl<T: std::fmt::Display> Stylize for T {}

/// Styled check mark for final success lines.
pub fn check() -> String {
    "✓".success()
}
