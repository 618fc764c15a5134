//! Editorial status and the editor note log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Editorial status of an article.
///
/// `current` is the primary state ("DRAFT", "PUBLISHED", ...); `other` holds
/// secondary states the article also carries.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Status {
    pub current: String,
    pub other: Vec<String>,
}

impl Status {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            other: Vec::new(),
        }
    }

    /// Builder method to add a secondary state
    pub fn with_other(mut self, state: impl Into<String>) -> Self {
        self.other.push(state.into());
        self
    }

    /// True if `state` is the current state or one of the secondary ones
    pub fn has_state(&self, state: &str) -> bool {
        self.current == state || self.other.iter().any(|s| s == state)
    }
}

/// An entry in an article's editor log. Entries are appended, never edited.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EditorNote {
    pub note: String,
    pub user: String,
    pub status: Status,
    pub timestamp: DateTime<Utc>,
}

impl EditorNote {
    pub fn new(
        note: impl Into<String>,
        user: impl Into<String>,
        status: Status,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            note: note.into(),
            user: user.into(),
            status,
            timestamp,
        }
    }
}

/// True if the notes are in non-decreasing timestamp order
pub fn notes_in_order(notes: &[EditorNote]) -> bool {
    notes.windows(2).all(|w| w[0].timestamp <= w[1].timestamp)
}
