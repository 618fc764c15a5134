//! Partial update payloads
//!
//! Every optional field means "leave unchanged" when absent.

use super::{
    Copyright, NewAgreementCopyright, NewArticleMetaImage, Patch, RelatedContent, RequiredLibrary,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Partial update of a draft article.
///
/// `revision` must equal the revision the client last read; the service
/// rejects the update otherwise. `meta_image` distinguishes "no change" from
/// "remove the image" (see [`Patch`]).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedArticle {
    pub revision: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub meta_image: Patch<NewArticleMetaImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_element: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<Copyright>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_libraries: Option<Vec<RequiredLibrary>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grep_codes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept_ids: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_new_version: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_content: Option<Vec<RelatedContent>>,
}

impl UpdatedArticle {
    /// An update that changes nothing yet, against `revision`
    pub fn new(revision: i32) -> Self {
        Self {
            revision,
            ..Self::default()
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn set_meta_image(mut self, image_id: impl Into<String>) -> Self {
        self.meta_image = Patch::Set(NewArticleMetaImage::new(image_id));
        self
    }

    pub fn clear_meta_image(mut self) -> Self {
        self.meta_image = Patch::Clear;
        self
    }

    pub fn with_new_version(mut self) -> Self {
        self.create_new_version = Some(true);
        self
    }

    /// True if nothing besides the revision would be sent
    pub fn is_noop(&self) -> bool {
        *self == Self::new(self.revision)
    }
}

/// Partial update of an agreement
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedAgreement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<NewAgreementCopyright>,
}

/// Partial update of a user's stored preferences
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedUserData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_searches: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_edited_articles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_subjects: Option<Vec<String>>,
}
