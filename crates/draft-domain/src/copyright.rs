//! Copyright and license metadata

use super::Author;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A license reference (e.g. "CC-BY-SA-4.0")
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub license: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl License {
    pub fn new(license: impl Into<String>) -> Self {
        Self {
            license: license.into(),
            description: None,
            url: None,
        }
    }

    /// Builder method to add a human readable description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to add the license deed url
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Copyright metadata attached to articles and agreements.
///
/// The three author lists are ordered; credit order is significant.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Copyright {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    pub creators: Vec<Author>,
    pub processors: Vec<Author>,
    pub rightsholders: Vec<Author>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agreement_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<DateTime<Utc>>,
}

impl Copyright {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_license(mut self, license: License) -> Self {
        self.license = Some(license);
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_creator(mut self, author: Author) -> Self {
        self.creators.push(author);
        self
    }

    pub fn with_processor(mut self, author: Author) -> Self {
        self.processors.push(author);
        self
    }

    pub fn with_rightsholder(mut self, author: Author) -> Self {
        self.rightsholders.push(author);
        self
    }

    pub fn with_agreement(mut self, agreement_id: i64) -> Self {
        self.agreement_id = Some(agreement_id);
        self
    }

    /// Builder method to set the validity window
    pub fn with_validity(
        mut self,
        valid_from: Option<DateTime<Utc>>,
        valid_to: Option<DateTime<Utc>>,
    ) -> Self {
        self.valid_from = valid_from;
        self.valid_to = valid_to;
        self
    }

    /// All credited authors, creators first, then processors, then rightsholders
    pub fn all_authors(&self) -> impl Iterator<Item = &Author> {
        self.creators
            .iter()
            .chain(self.processors.iter())
            .chain(self.rightsholders.iter())
    }

    /// False only when both bounds are set and `valid_from` is after `valid_to`
    pub fn has_consistent_validity(&self) -> bool {
        match (self.valid_from, self.valid_to) {
            (Some(from), Some(to)) => from <= to,
            _ => true,
        }
    }
}

/// Copyright block sent when creating or updating an agreement.
///
/// Same fields as [`Copyright`], kept as its own type because the service
/// declares it separately and may change it independently.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAgreementCopyright {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    pub creators: Vec<Author>,
    pub processors: Vec<Author>,
    pub rightsholders: Vec<Author>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agreement_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<DateTime<Utc>>,
}

impl From<Copyright> for NewAgreementCopyright {
    fn from(c: Copyright) -> Self {
        Self {
            license: c.license,
            origin: c.origin,
            creators: c.creators,
            processors: c.processors,
            rightsholders: c.rightsholders,
            agreement_id: c.agreement_id,
            valid_from: c.valid_from,
            valid_to: c.valid_to,
        }
    }
}

impl From<NewAgreementCopyright> for Copyright {
    fn from(c: NewAgreementCopyright) -> Self {
        Self {
            license: c.license,
            origin: c.origin,
            creators: c.creators,
            processors: c.processors,
            rightsholders: c.rightsholders,
            agreement_id: c.agreement_id,
            valid_from: c.valid_from,
            valid_to: c.valid_to,
        }
    }
}
