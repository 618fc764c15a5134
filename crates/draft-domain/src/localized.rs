//! Per-language article fields
//!
//! Each record pairs a payload with the language code it is written in. An
//! article carries one of each for the language it was fetched in.

use serde::{Deserialize, Serialize};

/// A record tagged with a language code
pub trait Localized {
    fn language(&self) -> &str;

    /// True if the record is written in `language`
    fn is_in(&self, language: &str) -> bool {
        self.language() == language
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleTitle {
    pub title: String,
    pub language: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleContent {
    pub content: String,
    pub language: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleIntroduction {
    pub introduction: String,
    pub language: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleMetaDescription {
    pub meta_description: String,
    pub language: String,
}

/// A resolved meta image. Compare `NewArticleMetaImage`, which only carries
/// the image id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleMetaImage {
    pub url: String,
    pub alt: String,
    pub language: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleTag {
    pub tags: Vec<String>,
    pub language: String,
}

/// Embed markup for the article's lead image or video
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VisualElement {
    pub visual_element: String,
    pub language: String,
}

impl ArticleTitle {
    pub fn new(title: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            language: language.into(),
        }
    }
}

impl ArticleContent {
    pub fn new(content: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            language: language.into(),
        }
    }
}

impl ArticleIntroduction {
    pub fn new(introduction: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            introduction: introduction.into(),
            language: language.into(),
        }
    }
}

impl ArticleMetaDescription {
    pub fn new(meta_description: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            meta_description: meta_description.into(),
            language: language.into(),
        }
    }
}

impl ArticleMetaImage {
    pub fn new(
        url: impl Into<String>,
        alt: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
            language: language.into(),
        }
    }
}

impl ArticleTag {
    pub fn new(tags: Vec<String>, language: impl Into<String>) -> Self {
        Self {
            tags,
            language: language.into(),
        }
    }
}

impl VisualElement {
    pub fn new(visual_element: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            visual_element: visual_element.into(),
            language: language.into(),
        }
    }
}

impl Localized for ArticleTitle {
    fn language(&self) -> &str {
        &self.language
    }
}

impl Localized for ArticleContent {
    fn language(&self) -> &str {
        &self.language
    }
}

impl Localized for ArticleIntroduction {
    fn language(&self) -> &str {
        &self.language
    }
}

impl Localized for ArticleMetaDescription {
    fn language(&self) -> &str {
        &self.language
    }
}

impl Localized for ArticleMetaImage {
    fn language(&self) -> &str {
        &self.language
    }
}

impl Localized for ArticleTag {
    fn language(&self) -> &str {
        &self.language
    }
}

impl Localized for VisualElement {
    fn language(&self) -> &str {
        &self.language
    }
}
