//! Article domain model

use super::{
    ArticleContent, ArticleIntroduction, ArticleMetaDescription, ArticleMetaImage, ArticleTag,
    ArticleTitle, Copyright, EditorNote, Localized, RelatedContent, Status, VisualElement,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A script or stylesheet an article needs to render (e.g. an H5P runtime)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct RequiredLibrary {
    pub media_type: String,
    pub name: String,
    pub url: String,
}

impl RequiredLibrary {
    pub fn new(
        media_type: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            media_type: media_type.into(),
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A draft article as returned by the service, in one language
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_ndla_url: Option<String>,
    pub revision: i32,
    pub status: Status,

    // Localized content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<ArticleTitle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ArticleContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<Copyright>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<ArticleTag>,
    pub required_libraries: Vec<RequiredLibrary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_element: Option<VisualElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<ArticleIntroduction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<ArticleMetaDescription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_image: Option<ArticleMetaImage>,

    // Metadata
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub updated_by: String,
    pub published: DateTime<Utc>,
    pub article_type: String,
    pub supported_languages: Vec<String>,

    // Editorial
    pub notes: Vec<EditorNote>,
    pub editor_labels: Vec<String>,
    pub grep_codes: Vec<String>,
    pub concept_ids: Vec<i64>,
    pub availability: String,
    pub related_content: Vec<RelatedContent>,
}

impl Article {
    /// Language tags of every localized field that is present, keyed by wire name
    pub fn localized_languages(&self) -> Vec<(&'static str, &str)> {
        let fields: [(&'static str, Option<&dyn Localized>); 7] = [
            ("title", self.title.as_ref().map(|f| f as &dyn Localized)),
            ("content", self.content.as_ref().map(|f| f as &dyn Localized)),
            ("tags", self.tags.as_ref().map(|f| f as &dyn Localized)),
            (
                "visualElement",
                self.visual_element.as_ref().map(|f| f as &dyn Localized),
            ),
            (
                "introduction",
                self.introduction.as_ref().map(|f| f as &dyn Localized),
            ),
            (
                "metaDescription",
                self.meta_description.as_ref().map(|f| f as &dyn Localized),
            ),
            ("metaImage", self.meta_image.as_ref().map(|f| f as &dyn Localized)),
        ];
        fields
            .into_iter()
            .filter_map(|(name, field)| field.map(|f| (name, f.language())))
            .collect()
    }

    /// True if `language` is one of the article's supported languages
    pub fn supports_language(&self, language: &str) -> bool {
        self.supported_languages.iter().any(|l| l == language)
    }

    /// The most recent editor note, if any
    pub fn latest_note(&self) -> Option<&EditorNote> {
        self.notes.last()
    }

    /// Ids of other articles listed as related content
    pub fn related_article_ids(&self) -> Vec<i64> {
        self.related_content.iter().filter_map(|r| r.as_id()).collect()
    }

    /// Title text, or an empty string when the article has no title in this language
    pub fn title_text(&self) -> &str {
        self.title.as_ref().map(|t| t.title.as_str()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RelatedContentLink;
    use chrono::TimeZone;

    fn article() -> Article {
        let ts = Utc.with_ymd_and_hms(2019, 3, 1, 12, 0, 0).unwrap();
        Article {
            id: 1,
            old_ndla_url: None,
            revision: 3,
            status: Status::new("DRAFT"),
            title: Some(ArticleTitle::new("Fotosyntese", "nb")),
            content: Some(ArticleContent::new("<section></section>", "nb")),
            copyright: None,
            tags: None,
            required_libraries: vec![],
            visual_element: None,
            introduction: Some(ArticleIntroduction::new("Intro", "nb")),
            meta_description: None,
            meta_image: Some(ArticleMetaImage::new("https://img/1", "Blad", "nb")),
            created: ts,
            updated: ts,
            updated_by: "editor-1".into(),
            published: ts,
            article_type: "standard".into(),
            supported_languages: vec!["nb".into(), "en".into()],
            notes: vec![],
            editor_labels: vec![],
            grep_codes: vec![],
            concept_ids: vec![],
            availability: "everyone".into(),
            related_content: vec![
                RelatedContentLink::new("Wiki", "https://wiki").into(),
                RelatedContent::Id(99),
            ],
        }
    }

    #[test]
    fn test_localized_languages() {
        let binding = article();
        let langs = binding.localized_languages();
        assert_eq!(
            langs,
            vec![
                ("title", "nb"),
                ("content", "nb"),
                ("introduction", "nb"),
                ("metaImage", "nb")
            ]
        );
    }

    #[test]
    fn test_supports_language() {
        let a = article();
        assert!(a.supports_language("en"));
        assert!(!a.supports_language("nn"));
    }

    #[test]
    fn test_related_article_ids() {
        assert_eq!(article().related_article_ids(), vec![99]);
    }

    #[test]
    fn test_camel_case_keys() {
        let json = serde_json::to_value(article()).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("requiredLibraries"));
        assert!(obj.contains_key("supportedLanguages"));
        assert!(obj.contains_key("updatedBy"));
        assert!(!obj.contains_key("oldNdlaUrl"));
        assert!(!obj.contains_key("copyright"));
    }

    #[test]
    fn test_title_text() {
        let mut a = article();
        assert_eq!(a.title_text(), "Fotosyntese");
        a.title = None;
        assert_eq!(a.title_text(), "");
    }

    #[test]
    fn test_required_library_keys() {
        let lib = RequiredLibrary::new("text/javascript", "H5P-Resizer", "https://h5p/resizer.js");
        let json = serde_json::to_value(&lib).unwrap();
        assert_eq!(json["mediaType"], "text/javascript");
    }
}
