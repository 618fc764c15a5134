//! JSON decode/encode boundary for the wire types

use super::{
    Agreement, Article, ArticleContent, ArticleIntroduction, ArticleMetaDescription,
    ArticleMetaImage, ArticleTag, ArticleTitle, Author, Copyright, EditorNote, License,
    NewAgreementCopyright, NewArticle, NewArticleMetaImage, RelatedContentLink, RequiredLibrary,
    Status, UpdatedAgreement, UpdatedArticle, UpdatedUserData, UserData, VisualElement,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::error::Category;
use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;

/// What went wrong in a [`DecodeError::ShapeMismatch`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MismatchKind {
    /// Missing required field, wrong primitive kind, or a union element that
    /// matches none of its alternatives
    Data,
    /// Input is not syntactically valid JSON
    Syntax,
    /// Input ends before the value is complete
    Truncated,
}

impl std::fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MismatchKind::Data => write!(f, "shape mismatch"),
            MismatchKind::Syntax => write!(f, "shape mismatch (invalid JSON)"),
            MismatchKind::Truncated => write!(f, "shape mismatch (truncated JSON)"),
        }
    }
}

/// Error at the boundary where JSON becomes a typed entity
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The input does not have the entity's shape
    #[error("{entity}: {kind} at line {line}, column {column}: {message}")]
    ShapeMismatch {
        entity: &'static str,
        kind: MismatchKind,
        line: usize,
        column: usize,
        message: String,
    },
    #[error("{entity}: encode failed: {message}")]
    Encode {
        entity: &'static str,
        message: String,
    },
    #[error("Unknown entity: {0}")]
    UnknownEntity(String),
}

impl DecodeError {
    fn from_json(entity: &'static str, err: serde_json::Error) -> Self {
        let kind = match err.classify() {
            Category::Data => MismatchKind::Data,
            Category::Syntax | Category::Io => MismatchKind::Syntax,
            Category::Eof => MismatchKind::Truncated,
        };
        DecodeError::ShapeMismatch {
            entity,
            kind,
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }

    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, DecodeError::ShapeMismatch { .. })
    }

    /// The mismatch kind, if this is a shape mismatch
    pub fn mismatch_kind(&self) -> Option<MismatchKind> {
        match self {
            DecodeError::ShapeMismatch { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// A named wire type
pub trait Entity: Serialize + DeserializeOwned {
    /// Name used in errors and logs
    const NAME: &'static str;
}

macro_rules! entities {
    ($($ty:ident => $name:literal),* $(,)?) => {
        $(impl Entity for $ty {
            const NAME: &'static str = $name;
        })*
    };
}

entities! {
    Agreement => "Agreement",
    Article => "Article",
    ArticleContent => "ArticleContent",
    ArticleIntroduction => "ArticleIntroduction",
    ArticleMetaDescription => "ArticleMetaDescription",
    ArticleMetaImage => "ArticleMetaImage",
    ArticleTag => "ArticleTag",
    ArticleTitle => "ArticleTitle",
    Author => "Author",
    Copyright => "Copyright",
    EditorNote => "EditorNote",
    License => "License",
    NewAgreementCopyright => "NewAgreementCopyright",
    NewArticle => "NewArticle",
    NewArticleMetaImage => "NewArticleMetaImage",
    RelatedContentLink => "RelatedContentLink",
    RequiredLibrary => "RequiredLibrary",
    Status => "Status",
    UpdatedAgreement => "UpdatedAgreement",
    UpdatedArticle => "UpdatedArticle",
    UpdatedUserData => "UpdatedUserData",
    UserData => "UserData",
    VisualElement => "VisualElement",
}

/// Decode a JSON string as entity `E`
pub fn decode<E: Entity>(json: &str) -> Result<E, DecodeError> {
    finish(serde_json::from_str(json))
}

/// Decode JSON bytes as entity `E`
pub fn decode_slice<E: Entity>(json: &[u8]) -> Result<E, DecodeError> {
    finish(serde_json::from_slice(json))
}

/// Decode an already parsed JSON value as entity `E`
pub fn decode_value<E: Entity>(value: Value) -> Result<E, DecodeError> {
    finish(serde_json::from_value(value))
}

fn finish<E: Entity>(result: Result<E, serde_json::Error>) -> Result<E, DecodeError> {
    match result {
        Ok(entity) => {
            tracing::debug!(entity = E::NAME, "decoded");
            Ok(entity)
        }
        Err(e) => {
            let err = DecodeError::from_json(E::NAME, e);
            tracing::warn!(entity = E::NAME, "decode failed: {}", err);
            Err(err)
        }
    }
}

/// Encode an entity as compact JSON
pub fn encode<E: Entity>(entity: &E) -> Result<String, DecodeError> {
    serde_json::to_string(entity).map_err(|e| encode_error::<E>(e))
}

/// Encode an entity as pretty-printed JSON
pub fn encode_pretty<E: Entity>(entity: &E) -> Result<String, DecodeError> {
    serde_json::to_string_pretty(entity).map_err(|e| encode_error::<E>(e))
}

/// Encode an entity as a JSON value
pub fn encode_value<E: Entity>(entity: &E) -> Result<Value, DecodeError> {
    serde_json::to_value(entity).map_err(|e| encode_error::<E>(e))
}

fn encode_error<E: Entity>(e: serde_json::Error) -> DecodeError {
    DecodeError::Encode {
        entity: E::NAME,
        message: e.to_string(),
    }
}

/// Every entity, for callers that pick the type at runtime
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Agreement,
    Article,
    ArticleContent,
    ArticleIntroduction,
    ArticleMetaDescription,
    ArticleMetaImage,
    ArticleTag,
    ArticleTitle,
    Author,
    Copyright,
    EditorNote,
    License,
    NewAgreementCopyright,
    NewArticle,
    NewArticleMetaImage,
    RelatedContentLink,
    RequiredLibrary,
    Status,
    UpdatedAgreement,
    UpdatedArticle,
    UpdatedUserData,
    UserData,
    VisualElement,
}

impl EntityKind {
    pub const ALL: [EntityKind; 23] = [
        EntityKind::Agreement,
        EntityKind::Article,
        EntityKind::ArticleContent,
        EntityKind::ArticleIntroduction,
        EntityKind::ArticleMetaDescription,
        EntityKind::ArticleMetaImage,
        EntityKind::ArticleTag,
        EntityKind::ArticleTitle,
        EntityKind::Author,
        EntityKind::Copyright,
        EntityKind::EditorNote,
        EntityKind::License,
        EntityKind::NewAgreementCopyright,
        EntityKind::NewArticle,
        EntityKind::NewArticleMetaImage,
        EntityKind::RelatedContentLink,
        EntityKind::RequiredLibrary,
        EntityKind::Status,
        EntityKind::UpdatedAgreement,
        EntityKind::UpdatedArticle,
        EntityKind::UpdatedUserData,
        EntityKind::UserData,
        EntityKind::VisualElement,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Agreement => Agreement::NAME,
            EntityKind::Article => Article::NAME,
            EntityKind::ArticleContent => ArticleContent::NAME,
            EntityKind::ArticleIntroduction => ArticleIntroduction::NAME,
            EntityKind::ArticleMetaDescription => ArticleMetaDescription::NAME,
            EntityKind::ArticleMetaImage => ArticleMetaImage::NAME,
            EntityKind::ArticleTag => ArticleTag::NAME,
            EntityKind::ArticleTitle => ArticleTitle::NAME,
            EntityKind::Author => Author::NAME,
            EntityKind::Copyright => Copyright::NAME,
            EntityKind::EditorNote => EditorNote::NAME,
            EntityKind::License => License::NAME,
            EntityKind::NewAgreementCopyright => NewAgreementCopyright::NAME,
            EntityKind::NewArticle => NewArticle::NAME,
            EntityKind::NewArticleMetaImage => NewArticleMetaImage::NAME,
            EntityKind::RelatedContentLink => RelatedContentLink::NAME,
            EntityKind::RequiredLibrary => RequiredLibrary::NAME,
            EntityKind::Status => Status::NAME,
            EntityKind::UpdatedAgreement => UpdatedAgreement::NAME,
            EntityKind::UpdatedArticle => UpdatedArticle::NAME,
            EntityKind::UpdatedUserData => UpdatedUserData::NAME,
            EntityKind::UserData => UserData::NAME,
            EntityKind::VisualElement => VisualElement::NAME,
        }
    }

    /// Decode `json` as this entity and re-encode it.
    ///
    /// The result has optional keys that were absent dropped and timestamps in
    /// canonical RFC 3339 form.
    pub fn normalize(&self, json: &str) -> Result<Value, DecodeError> {
        match self {
            EntityKind::Agreement => roundtrip::<Agreement>(json),
            EntityKind::Article => roundtrip::<Article>(json),
            EntityKind::ArticleContent => roundtrip::<ArticleContent>(json),
            EntityKind::ArticleIntroduction => roundtrip::<ArticleIntroduction>(json),
            EntityKind::ArticleMetaDescription => roundtrip::<ArticleMetaDescription>(json),
            EntityKind::ArticleMetaImage => roundtrip::<ArticleMetaImage>(json),
            EntityKind::ArticleTag => roundtrip::<ArticleTag>(json),
            EntityKind::ArticleTitle => roundtrip::<ArticleTitle>(json),
            EntityKind::Author => roundtrip::<Author>(json),
            EntityKind::Copyright => roundtrip::<Copyright>(json),
            EntityKind::EditorNote => roundtrip::<EditorNote>(json),
            EntityKind::License => roundtrip::<License>(json),
            EntityKind::NewAgreementCopyright => roundtrip::<NewAgreementCopyright>(json),
            EntityKind::NewArticle => roundtrip::<NewArticle>(json),
            EntityKind::NewArticleMetaImage => roundtrip::<NewArticleMetaImage>(json),
            EntityKind::RelatedContentLink => roundtrip::<RelatedContentLink>(json),
            EntityKind::RequiredLibrary => roundtrip::<RequiredLibrary>(json),
            EntityKind::Status => roundtrip::<Status>(json),
            EntityKind::UpdatedAgreement => roundtrip::<UpdatedAgreement>(json),
            EntityKind::UpdatedArticle => roundtrip::<UpdatedArticle>(json),
            EntityKind::UpdatedUserData => roundtrip::<UpdatedUserData>(json),
            EntityKind::UserData => roundtrip::<UserData>(json),
            EntityKind::VisualElement => roundtrip::<VisualElement>(json),
        }
    }
}

fn roundtrip<E: Entity>(json: &str) -> Result<Value, DecodeError> {
    let entity: E = decode(json)?;
    encode_value(&entity)
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for EntityKind {
    type Err = DecodeError;

    /// Accepts "UpdatedArticle", "updatedArticle", "updated-article" and "updated_article"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        EntityKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().to_lowercase() == wanted)
            .ok_or_else(|| DecodeError::UnknownEntity(s.to_string()))
    }
}
