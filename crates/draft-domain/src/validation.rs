//! Cross-field checks for decoded entities
//!
//! Decoding guarantees shape; these checks cover relations between fields
//! that the types cannot express.

use super::{
    notes_in_order, Agreement, Article, Copyright, NewArticle, RelatedContent, UpdatedArticle,
    ValidationConfig,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Severity of a validation error
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

/// A validation error or warning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

impl ValidationError {
    fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: ValidationSeverity::Error,
        }
    }

    fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: ValidationSeverity::Warning,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: field '{}': {}", self.severity, self.field, self.message)
    }
}

/// Validate an article and return errors/warnings
pub fn validate_article(article: &Article, config: &ValidationConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if article.status.current.trim().is_empty() {
        errors.push(ValidationError::error("status.current", "Status is required"));
    }

    if article.supported_languages.is_empty() {
        errors.push(ValidationError::warning(
            "supportedLanguages",
            "Article lists no supported languages",
        ));
    }

    // Every localized field must be in a language the article supports
    for (field, language) in article.localized_languages() {
        if !article.supports_language(language) {
            errors.push(ValidationError::error(
                format!("{}.language", field),
                format!("Language '{}' is not in supportedLanguages", language),
            ));
        }
    }

    let mut seen = HashSet::new();
    for language in &article.supported_languages {
        if !seen.insert(language.as_str()) {
            errors.push(ValidationError::warning(
                "supportedLanguages",
                format!("Language '{}' is listed more than once", language),
            ));
        }
        if !config.accepts_language(language) {
            errors.push(ValidationError::warning(
                "supportedLanguages",
                format!("Unknown language code '{}'", language),
            ));
        }
    }

    if config.check_note_order && !notes_in_order(&article.notes) {
        errors.push(ValidationError::warning(
            "notes",
            "Editor notes are not in timestamp order",
        ));
    }

    errors.extend(validate_related_content(&article.related_content));

    if let Some(ref copyright) = article.copyright {
        errors.extend(validate_copyright("copyright", copyright));
    }

    errors
}

/// Validate an agreement and return errors/warnings
pub fn validate_agreement(agreement: &Agreement) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if agreement.title.trim().is_empty() {
        errors.push(ValidationError::error("title", "Title is required"));
    }

    if agreement.updated < agreement.created {
        errors.push(ValidationError::warning(
            "updated",
            "Agreement was updated before it was created",
        ));
    }

    errors.extend(validate_copyright("copyright", &agreement.copyright));
    errors
}

/// Validate a new article payload and return errors/warnings
pub fn validate_new_article(
    article: &NewArticle,
    config: &ValidationConfig,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if article.title.trim().is_empty() {
        errors.push(ValidationError::error("title", "Title is required"));
    }

    if article.language.trim().is_empty() {
        errors.push(ValidationError::error("language", "Language is required"));
    } else if !config.accepts_language(&article.language) {
        errors.push(ValidationError::error(
            "language",
            format!("Unknown language code '{}'", article.language),
        ));
    }

    if article.article_type.trim().is_empty() {
        errors.push(ValidationError::error("articleType", "Article type is required"));
    }

    if let Some(ref image) = article.meta_image {
        if image.id.trim().is_empty() {
            errors.push(ValidationError::error("metaImage.id", "Image id is empty"));
        }
    }

    errors.extend(validate_related_content(&article.related_content));

    if let Some(ref copyright) = article.copyright {
        errors.extend(validate_copyright("copyright", copyright));
    }

    errors
}

/// Validate a partial article update and return errors/warnings
pub fn validate_updated_article(
    update: &UpdatedArticle,
    config: &ValidationConfig,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if update.revision < 1 {
        errors.push(ValidationError::error(
            "revision",
            "Revision must be the positive revision last read",
        ));
    }

    if let Some(ref language) = update.language {
        if !config.accepts_language(language) {
            errors.push(ValidationError::error(
                "language",
                format!("Unknown language code '{}'", language),
            ));
        }
    } else if update.title.is_some() || update.content.is_some() || update.introduction.is_some() {
        errors.push(ValidationError::warning(
            "language",
            "Localized fields are updated without a language",
        ));
    }

    if let Some(image) = update.meta_image.as_set() {
        if image.id.trim().is_empty() {
            errors.push(ValidationError::error("metaImage.id", "Image id is empty"));
        }
    }

    if let Some(ref related) = update.related_content {
        errors.extend(validate_related_content(related));
    }

    if let Some(ref copyright) = update.copyright {
        errors.extend(validate_copyright("copyright", copyright));
    }

    if update.is_noop() {
        errors.push(ValidationError {
            field: "revision".to_string(),
            message: "Update changes nothing".to_string(),
            severity: ValidationSeverity::Info,
        });
    }

    errors
}

fn validate_related_content(related: &[RelatedContent]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (i, entry) in related.iter().enumerate() {
        match entry {
            RelatedContent::Link(link) => {
                if link.title.trim().is_empty() {
                    errors.push(ValidationError::error(
                        format!("relatedContent[{}].title", i),
                        "Link title is empty",
                    ));
                }
                if link.url.trim().is_empty() {
                    errors.push(ValidationError::error(
                        format!("relatedContent[{}].url", i),
                        "Link url is empty",
                    ));
                }
            }
            RelatedContent::Id(id) => {
                if *id <= 0 {
                    errors.push(ValidationError::error(
                        format!("relatedContent[{}]", i),
                        format!("Article id {} is not positive", id),
                    ));
                }
            }
        }
    }
    errors
}

fn validate_copyright(field: &str, copyright: &Copyright) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !copyright.has_consistent_validity() {
        errors.push(ValidationError::error(
            format!("{}.validFrom", field),
            "validFrom is after validTo",
        ));
    }

    for (i, author) in copyright.all_authors().enumerate() {
        if author.name.trim().is_empty() {
            errors.push(ValidationError::warning(
                format!("{}.authors[{}]", field, i),
                "Author name is empty",
            ));
        }
    }

    errors
}

/// Check if a validation report has no errors
pub fn is_valid(report: &[ValidationError]) -> bool {
    report
        .iter()
        .all(|e| !matches!(e.severity, ValidationSeverity::Error))
}
