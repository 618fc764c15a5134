//! Author representation

use serde::{Deserialize, Serialize};

/// A contributor credited in copyright metadata.
///
/// `author_type` is the contributor's role ("writer", "photographer",
/// "rightsholder", ...). The service does not publish a closed set of roles,
/// so it stays a plain string.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Author {
    #[serde(rename = "type")]
    pub author_type: String,
    pub name: String,
}

impl Author {
    /// Create a new author with a role and a display name
    pub fn new(author_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            author_type: author_type.into(),
            name: name.into(),
        }
    }

    /// Case-insensitive role comparison
    pub fn has_type(&self, author_type: &str) -> bool {
        self.author_type.eq_ignore_ascii_case(author_type)
    }

    /// Format as "Name (role)" for display
    pub fn display_name(&self) -> String {
        if self.author_type.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.author_type)
        }
    }
}
