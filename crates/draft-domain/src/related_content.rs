//! Related content entries

use serde::{Deserialize, Serialize};

/// An external link shown as related content.
///
/// Extra keys are rejected so an object carrying both link fields and an id
/// matches neither alternative of [`RelatedContent`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(deny_unknown_fields)]
pub struct RelatedContentLink {
    pub title: String,
    pub url: String,
}

impl RelatedContentLink {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// One entry in an article's related content list.
///
/// On the wire an entry is either a link object or a bare article id; there is
/// no tag field. Variants are tried in declaration order, so an object is
/// always matched against the link shape first.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum RelatedContent {
    Link(RelatedContentLink),
    Id(i64),
}

impl RelatedContent {
    pub fn as_link(&self) -> Option<&RelatedContentLink> {
        match self {
            RelatedContent::Link(link) => Some(link),
            RelatedContent::Id(_) => None,
        }
    }

    pub fn as_id(&self) -> Option<i64> {
        match self {
            RelatedContent::Id(id) => Some(*id),
            RelatedContent::Link(_) => None,
        }
    }
}

impl From<RelatedContentLink> for RelatedContent {
    fn from(link: RelatedContentLink) -> Self {
        RelatedContent::Link(link)
    }
}

impl From<i64> for RelatedContent {
    fn from(id: i64) -> Self {
        RelatedContent::Id(id)
    }
}
