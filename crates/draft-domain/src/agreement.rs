//! Licensing agreements

use super::Copyright;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored agreement with a rightsholder. Articles refer to it through
/// `Copyright::agreement_id`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Agreement {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub copyright: Copyright,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub updated_by: String,
}

impl Agreement {
    /// True if the agreement's copyright window covers `at`
    pub fn is_valid_at(&self, at: DateTime<Utc>) -> bool {
        let after_start = self.copyright.valid_from.map_or(true, |from| from <= at);
        let before_end = self.copyright.valid_to.map_or(true, |to| at <= to);
        after_start && before_end
    }
}
