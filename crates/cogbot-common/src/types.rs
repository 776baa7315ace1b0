//! Common type definitions for presence entries and errors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of activity shown in the bot's presence.
///
/// `Playing` is also the fallback for status lines without a recognized prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// "Playing <label>".
    Playing,
    /// "Watching <label>".
    Watching,
    /// "Listening to <label>".
    Listening,
    /// "Competing in <label>".
    Competing,
}

impl ActivityKind {
    /// All kinds in the order their prefixes are matched.
    pub const ALL: [Self; 4] = [
        Self::Playing,
        Self::Watching,
        Self::Listening,
        Self::Competing,
    ];

    /// The status-file prefix for this kind, trailing space included.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Playing => "playing ",
            Self::Watching => "watching ",
            Self::Listening => "listening ",
            Self::Competing => "competing ",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Playing => "playing",
            Self::Watching => "watching",
            Self::Listening => "listening",
            Self::Competing => "competing",
        };
        f.write_str(name)
    }
}

/// A single line of the status list, split into activity kind and label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusEntry {
    /// Activity kind selected by the line prefix.
    pub kind: ActivityKind,
    /// Text displayed after the activity verb.
    pub label: String,
}

impl StatusEntry {
    /// Creates an entry from its parts.
    pub fn new(kind: ActivityKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
        }
    }

    /// Parses a status line.
    ///
    /// Prefixes are case-sensitive and include the trailing space. Lines
    /// without a recognized prefix become `Playing` with the whole line as
    /// the label.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        ActivityKind::ALL
            .iter()
            .find_map(|kind| {
                line.strip_prefix(kind.prefix())
                    .map(|label| Self::new(*kind, label))
            })
            .unwrap_or_else(|| Self::new(ActivityKind::Playing, line))
    }
}

impl fmt::Display for StatusEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.label)
    }
}

/// Common result type for the application.
pub type Result<T> = std::result::Result<T, CogbotError>;

/// Application-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum CogbotError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Cog loading error.
    #[error("{0}")]
    Cog(String),

    /// Presence update error.
    #[error("Presence update error: {0}")]
    Presence(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
