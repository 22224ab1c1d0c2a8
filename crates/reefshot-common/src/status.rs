//! Glyph-prefixed progress lines for the command-line tools.
//!
//! All diagnostics are human readable and go to standard output; there is
//! no machine-readable format.

use std::fmt;

use owo_colors::OwoColorize;

/// Kind of a status line, which selects its glyph and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A single step completed (`✓`).
    Ok,
    /// A step completed but produced something suspicious (`⚠`).
    Warning,
    /// A step failed (`❌`).
    Error,
    /// A whole run finished (`✅`).
    Done,
    /// Where the outputs ended up (`📁`).
    Folder,
    /// Banner for the screenshot tool (`📸`).
    Camera,
}

impl Status {
    /// The glyph printed in front of the message.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Ok => "✓",
            Self::Warning => "⚠",
            Self::Error => "❌",
            Self::Done => "✅",
            Self::Folder => "📁",
            Self::Camera => "📸",
        }
    }
}

/// A formatted status line, without color.
///
/// Kept separate from [`report`] so callers and tests can inspect the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// Line kind.
    pub status: Status,
    /// Message after the glyph.
    pub message: String,
}

impl StatusLine {
    /// Create a new status line.
    #[must_use]
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status.glyph(), self.message)
    }
}

/// Print a status line to stdout, colored by kind.
pub fn report(status: Status, message: impl Into<String>) {
    let line = StatusLine::new(status, message).to_string();
    match status {
        Status::Ok | Status::Done => println!("{}", line.green()),
        Status::Warning => println!("{}", line.yellow()),
        Status::Error => println!("{}", line.red()),
        Status::Folder | Status::Camera => println!("{}", line.bold()),
    }
}
