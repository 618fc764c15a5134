//! Payload for creating a draft article

use super::{Copyright, RelatedContent, RequiredLibrary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Meta image reference used before the image is resolved to a url
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewArticleMetaImage {
    pub id: String,
}

impl NewArticleMetaImage {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// A new draft article in a single language.
///
/// Content fields are plain strings here; the service wraps them in the
/// localized records when it returns the created [`crate::Article`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
    pub language: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_image: Option<NewArticleMetaImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_element: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<Copyright>,
    pub required_libraries: Vec<RequiredLibrary>,
    pub article_type: String,
    pub notes: Vec<String>,
    pub editor_labels: Vec<String>,
    pub grep_codes: Vec<String>,
    pub concept_ids: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    pub related_content: Vec<RelatedContent>,
}

impl NewArticle {
    /// Create a new article with required fields; every list starts empty
    pub fn new(
        language: impl Into<String>,
        title: impl Into<String>,
        article_type: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            title: title.into(),
            published: None,
            content: None,
            tags: Vec::new(),
            introduction: None,
            meta_description: None,
            meta_image: None,
            visual_element: None,
            copyright: None,
            required_libraries: Vec::new(),
            article_type: article_type.into(),
            notes: Vec::new(),
            editor_labels: Vec::new(),
            grep_codes: Vec::new(),
            concept_ids: Vec::new(),
            availability: None,
            related_content: Vec::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_introduction(mut self, introduction: impl Into<String>) -> Self {
        self.introduction = Some(introduction.into());
        self
    }

    pub fn with_meta_image(mut self, image_id: impl Into<String>) -> Self {
        self.meta_image = Some(NewArticleMetaImage::new(image_id));
        self
    }

    pub fn with_copyright(mut self, copyright: Copyright) -> Self {
        self.copyright = Some(copyright);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_related(mut self, related: impl Into<RelatedContent>) -> Self {
        self.related_content.push(related.into());
        self
    }
}
