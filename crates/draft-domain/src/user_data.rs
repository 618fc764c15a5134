//! Per-user editor preferences

use super::UpdatedUserData;
use serde::{Deserialize, Serialize};

/// Preferences stored for one editor
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_searches: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_edited_articles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_subjects: Option<Vec<String>>,
}

impl UserData {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            saved_searches: None,
            latest_edited_articles: None,
            favorite_subjects: None,
        }
    }

    /// The update that would replace every stored list with this record's lists
    pub fn to_update(&self) -> UpdatedUserData {
        UpdatedUserData {
            saved_searches: self.saved_searches.clone(),
            latest_edited_articles: self.latest_edited_articles.clone(),
            favorite_subjects: self.favorite_subjects.clone(),
        }
    }
}
