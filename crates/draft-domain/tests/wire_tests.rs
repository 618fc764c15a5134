//! Wire format integration tests
//!
//! Decodes the JSON fixtures the way a client would receive them from the
//! draft service and checks the shapes survive encoding.

mod common;

use common::fixtures::load_fixture;
use draft_domain::{
    decode, encode, encode_value, is_valid, validate_agreement, validate_article,
    validate_new_article, validate_updated_article, Agreement, Article, ArticleContent,
    ArticleIntroduction, ArticleMetaDescription, ArticleMetaImage, ArticleTag, ArticleTitle,
    Author, Copyright, DecodeError, EditorNote, Entity, EntityKind, License, Localized,
    NewAgreementCopyright, NewArticle, NewArticleMetaImage, Patch, RelatedContent,
    RelatedContentLink, RequiredLibrary, Status, UpdatedAgreement, UpdatedArticle,
    UpdatedUserData, UserData, ValidationConfig, VisualElement,
};
use rstest::rstest;
use std::fmt::Debug;

fn roundtrip<E: Entity + PartialEq + Debug>(fixture: &str) -> E {
    let original: E = decode(&load_fixture(fixture)).unwrap();
    let json = encode(&original).unwrap();
    let back: E = decode(&json).unwrap();
    assert_eq!(original, back, "{} did not survive a round trip", E::NAME);
    back
}

/// Round trip `json` through the entity `E` and return the re-encoded value
fn roundtrip_json<E: Entity + PartialEq + Debug>(json: &str) -> serde_json::Value {
    let original: E = decode(json).unwrap();
    let value = encode_value(&original).unwrap();
    let back: E = decode(&value.to_string()).unwrap();
    assert_eq!(original, back, "{} did not survive a round trip", E::NAME);
    value
}

fn roundtrip_kind(kind: EntityKind, json: &str) -> serde_json::Value {
    match kind {
        EntityKind::Agreement => roundtrip_json::<Agreement>(json),
        EntityKind::Article => roundtrip_json::<Article>(json),
        EntityKind::ArticleContent => roundtrip_json::<ArticleContent>(json),
        EntityKind::ArticleIntroduction => roundtrip_json::<ArticleIntroduction>(json),
        EntityKind::ArticleMetaDescription => roundtrip_json::<ArticleMetaDescription>(json),
        EntityKind::ArticleMetaImage => roundtrip_json::<ArticleMetaImage>(json),
        EntityKind::ArticleTag => roundtrip_json::<ArticleTag>(json),
        EntityKind::ArticleTitle => roundtrip_json::<ArticleTitle>(json),
        EntityKind::Author => roundtrip_json::<Author>(json),
        EntityKind::Copyright => roundtrip_json::<Copyright>(json),
        EntityKind::EditorNote => roundtrip_json::<EditorNote>(json),
        EntityKind::License => roundtrip_json::<License>(json),
        EntityKind::NewAgreementCopyright => roundtrip_json::<NewAgreementCopyright>(json),
        EntityKind::NewArticle => roundtrip_json::<NewArticle>(json),
        EntityKind::NewArticleMetaImage => roundtrip_json::<NewArticleMetaImage>(json),
        EntityKind::RelatedContentLink => roundtrip_json::<RelatedContentLink>(json),
        EntityKind::RequiredLibrary => roundtrip_json::<RequiredLibrary>(json),
        EntityKind::Status => roundtrip_json::<Status>(json),
        EntityKind::UpdatedAgreement => roundtrip_json::<UpdatedAgreement>(json),
        EntityKind::UpdatedArticle => roundtrip_json::<UpdatedArticle>(json),
        EntityKind::UpdatedUserData => roundtrip_json::<UpdatedUserData>(json),
        EntityKind::UserData => roundtrip_json::<UserData>(json),
        EntityKind::VisualElement => roundtrip_json::<VisualElement>(json),
    }
}

// === Round trips ===

/// Every entity survives decode/encode/decode, and every key set in the
/// fixture (optional ones included) comes back with the same value.
#[rstest]
#[case(EntityKind::Agreement, "agreement.json")]
#[case(EntityKind::Article, "article.json")]
#[case(EntityKind::Article, "article_minimal.json")]
#[case(EntityKind::ArticleContent, "entities/article_content.json")]
#[case(EntityKind::ArticleIntroduction, "entities/article_introduction.json")]
#[case(EntityKind::ArticleMetaDescription, "entities/article_meta_description.json")]
#[case(EntityKind::ArticleMetaImage, "entities/article_meta_image.json")]
#[case(EntityKind::ArticleTag, "entities/article_tag.json")]
#[case(EntityKind::ArticleTitle, "entities/article_title.json")]
#[case(EntityKind::Author, "entities/author.json")]
#[case(EntityKind::Copyright, "entities/copyright.json")]
#[case(EntityKind::EditorNote, "entities/editor_note.json")]
#[case(EntityKind::License, "entities/license.json")]
#[case(EntityKind::NewAgreementCopyright, "entities/new_agreement_copyright.json")]
#[case(EntityKind::NewArticle, "new_article.json")]
#[case(EntityKind::NewArticleMetaImage, "entities/new_article_meta_image.json")]
#[case(EntityKind::RelatedContentLink, "entities/related_content_link.json")]
#[case(EntityKind::RequiredLibrary, "entities/required_library.json")]
#[case(EntityKind::Status, "entities/status.json")]
#[case(EntityKind::UpdatedAgreement, "entities/updated_agreement.json")]
#[case(EntityKind::UpdatedArticle, "updated_article.json")]
#[case(EntityKind::UpdatedUserData, "entities/updated_user_data.json")]
#[case(EntityKind::UserData, "user_data.json")]
#[case(EntityKind::VisualElement, "entities/visual_element.json")]
fn test_entity_round_trip(#[case] kind: EntityKind, #[case] fixture: &str) {
    let json = load_fixture(fixture);
    let encoded = roundtrip_kind(kind, &json);
    let expected: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(encoded, expected, "{} changed on the wire", kind);
}

#[rstest]
#[case("{}")]
#[case(r#"{"savedSearches": []}"#)]
#[case(r#"{"favoriteSubjects": ["urn:subject:20"], "latestEditedArticles": ["1"]}"#)]
fn test_updated_user_data_round_trip(#[case] json: &str) {
    let encoded = roundtrip_kind(EntityKind::UpdatedUserData, json);
    let expected: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(encoded, expected);
}

#[test]
fn test_updated_agreement_set_copyright_round_trip() {
    let update: UpdatedAgreement = roundtrip("entities/updated_agreement.json");
    let copyright = update.copyright.unwrap();
    assert_eq!(copyright.rightsholders[0].name, "NTB");
    assert!(copyright.valid_to.is_some());
    assert!(copyright.valid_from.is_none());
}

#[test]
fn test_article_round_trip() {
    let article: Article = roundtrip("article.json");
    assert_eq!(article.id, 1234);
    assert_eq!(article.revision, 4);
    assert_eq!(article.old_ndla_url.as_deref(), Some("//red.ndla.no/node/5678"));
    assert_eq!(article.notes.len(), 2);
    assert_eq!(article.notes[1].user, "editor-2");
}

#[test]
fn test_minimal_article_round_trip() {
    let article: Article = roundtrip("article_minimal.json");
    assert!(article.title.is_none());
    assert!(article.copyright.is_none());
    assert!(article.meta_image.is_none());

    let value = encode_value(&article).unwrap();
    let obj = value.as_object().unwrap();
    for key in ["title", "content", "copyright", "tags", "metaImage", "oldNdlaUrl"] {
        assert!(!obj.contains_key(key), "{} should be omitted", key);
    }
}

#[test]
fn test_agreement_round_trip() {
    let agreement: Agreement = roundtrip("agreement.json");
    assert_eq!(agreement.copyright.rightsholders[0].name, "NTB");
    assert!(agreement.copyright.valid_to.is_none());
}

#[test]
fn test_new_article_round_trip() {
    let article: NewArticle = roundtrip("new_article.json");
    assert_eq!(article.meta_image, Some(NewArticleMetaImage::new("123")));

    // No timestamps, so the encoded form matches the fixture exactly
    let fixture: serde_json::Value =
        serde_json::from_str(&load_fixture("new_article.json")).unwrap();
    assert_eq!(encode_value(&article).unwrap(), fixture);
}

#[test]
fn test_user_data_round_trip() {
    let data: UserData = roundtrip("user_data.json");
    assert_eq!(data.user_id, "auth0|editor-1");
    assert!(data.favorite_subjects.is_none());

    let fixture: serde_json::Value =
        serde_json::from_str(&load_fixture("user_data.json")).unwrap();
    assert_eq!(encode_value(&data).unwrap(), fixture);
}

#[test]
fn test_updated_article_round_trip() {
    let update: UpdatedArticle = roundtrip("updated_article.json");
    assert!(update.meta_image.is_clear());
    assert_eq!(update.status.as_deref(), Some("PROPOSAL"));
    assert_eq!(update.create_new_version, Some(true));
}

// === Ordering ===

#[test]
fn test_author_order_is_preserved() {
    let article: Article = decode(&load_fixture("article.json")).unwrap();
    let copyright = article.copyright.unwrap();
    let names: Vec<_> = copyright.creators.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Ola Nordmann", "Kari Nordmann"]);
}

// === Three-state meta image ===

#[rstest]
#[case(r#"{"revision": 1}"#, Patch::Absent)]
#[case(r#"{"revision": 1, "metaImage": null}"#, Patch::Clear)]
#[case(
    r#"{"revision": 1, "metaImage": {"id": "123"}}"#,
    Patch::Set(NewArticleMetaImage::new("123"))
)]
fn test_meta_image_states(#[case] json: &str, #[case] expected: Patch<NewArticleMetaImage>) {
    let update: UpdatedArticle = decode(json).unwrap();
    assert_eq!(update.meta_image, expected);

    let back: UpdatedArticle = decode(&encode(&update).unwrap()).unwrap();
    assert_eq!(back.meta_image, expected);
}

// === Related content union ===

#[test]
fn test_related_content_link_then_id() {
    let items: Vec<RelatedContent> =
        serde_json::from_str(r#"[{"title":"A","url":"http://x"}, 42]"#).unwrap();
    assert_eq!(
        items,
        vec![
            RelatedContent::Link(RelatedContentLink::new("A", "http://x")),
            RelatedContent::Id(42)
        ]
    );
}

#[rstest]
#[case(r#"[{"title": "A"}]"#)]
#[case(r#"["42"]"#)]
#[case(r#"[true]"#)]
#[case(r#"[{"url": "http://x", "id": 4}]"#)]
#[case(r#"[{"title": "A", "url": "x", "id": 4}]"#)]
#[case(r#"[{"title": "A", "url": "http://x"}, {"title": "B", "url": "http://y", "id": 5}]"#)]
fn test_related_content_hybrids_rejected(#[case] related: &str) {
    let json = format!(
        r#"{{"language": "nb", "title": "T", "tags": [], "requiredLibraries": [],
            "articleType": "standard", "notes": [], "editorLabels": [], "grepCodes": [],
            "conceptIds": [], "relatedContent": {}}}"#,
        related
    );
    let err = decode::<NewArticle>(&json).unwrap_err();
    assert!(err.is_shape_mismatch(), "{}", err);
}

// === Shape mismatches ===

#[test]
fn test_agreement_id_must_be_numeric() {
    let mut value: serde_json::Value =
        serde_json::from_str(&load_fixture("agreement.json")).unwrap();
    value["id"] = serde_json::json!("not-a-number");
    let err = decode::<Agreement>(&value.to_string()).unwrap_err();
    assert!(matches!(err, DecodeError::ShapeMismatch { entity: "Agreement", .. }));
}

#[rstest]
#[case("article.json", "revision")]
#[case("article.json", "status")]
#[case("article.json", "requiredLibraries")]
#[case("article.json", "relatedContent")]
#[case("article.json", "updatedBy")]
fn test_missing_required_field(#[case] fixture: &str, #[case] field: &str) {
    let mut value: serde_json::Value = serde_json::from_str(&load_fixture(fixture)).unwrap();
    value.as_object_mut().unwrap().remove(field);
    let err = decode::<Article>(&value.to_string()).unwrap_err();
    assert!(err.is_shape_mismatch());
    assert!(err.to_string().contains(field), "{}", err);
}

#[test]
fn test_bad_timestamp_is_shape_mismatch() {
    let mut value: serde_json::Value =
        serde_json::from_str(&load_fixture("article.json")).unwrap();
    value["created"] = serde_json::json!("yesterday");
    assert!(decode::<Article>(&value.to_string()).unwrap_err().is_shape_mismatch());
}

// === Optional fields ===

#[rstest]
#[case("{}", UpdatedUserData::default())]
#[case(
    r#"{"favoriteSubjects": ["urn:subject:20"]}"#,
    UpdatedUserData {
        favorite_subjects: Some(vec!["urn:subject:20".into()]),
        ..Default::default()
    }
)]
fn test_updated_user_data(#[case] json: &str, #[case] expected: UpdatedUserData) {
    let update: UpdatedUserData = decode(json).unwrap();
    assert_eq!(update, expected);
}

#[test]
fn test_updated_agreement_copyright_type() {
    let json = r#"{"copyright": {
        "creators": [], "processors": [], "rightsholders": [], "agreementId": 3
    }}"#;
    let update: UpdatedAgreement = decode(json).unwrap();
    let copyright: NewAgreementCopyright = update.copyright.unwrap();
    assert_eq!(copyright.agreement_id, Some(3));
    assert_eq!(Copyright::from(copyright).agreement_id, Some(3));
}

// === Localized fields ===

#[test]
fn test_localized_languages_are_supported() {
    let article: Article = decode(&load_fixture("article.json")).unwrap();
    assert_eq!(article.supported_languages, vec!["en", "nb"]);

    let langs = article.localized_languages();
    assert_eq!(langs.len(), 7);
    for (field, language) in langs {
        assert!(
            article.supported_languages.iter().any(|l| l == language),
            "{} is in '{}'",
            field,
            language
        );
    }
    assert!(article.title.as_ref().unwrap().is_in("en"));
}

// === Validation over fixtures ===

#[test]
fn test_fixtures_validate() {
    let config = ValidationConfig::new().with_known_languages(["nb", "nn", "en"]);

    let article: Article = decode(&load_fixture("article.json")).unwrap();
    let report = validate_article(&article, &config);
    assert!(report.is_empty(), "{:?}", report);

    let agreement: Agreement = decode(&load_fixture("agreement.json")).unwrap();
    assert!(validate_agreement(&agreement).is_empty());

    let new_article: NewArticle = decode(&load_fixture("new_article.json")).unwrap();
    assert!(validate_new_article(&new_article, &config).is_empty());

    let update: UpdatedArticle = decode(&load_fixture("updated_article.json")).unwrap();
    assert!(validate_updated_article(&update, &config).is_empty());
}

#[test]
fn test_foreign_language_field_fails_validation() {
    let mut value: serde_json::Value = serde_json::from_str(&load_fixture("article.json")).unwrap();
    value["introduction"]["language"] = serde_json::json!("de");
    let article: Article = decode(&value.to_string()).unwrap();
    let report = validate_article(&article, &ValidationConfig::default());
    assert!(!is_valid(&report));
    assert!(report.iter().any(|e| e.field == "introduction.language"));
}

// === Runtime dispatch ===

#[rstest]
#[case("article", "article.json")]
#[case("agreement", "agreement.json")]
#[case("new-article", "new_article.json")]
#[case("updated-article", "updated_article.json")]
#[case("user-data", "user_data.json")]
fn test_entity_kind_normalize(#[case] kind: &str, #[case] fixture: &str) {
    let kind: EntityKind = kind.parse().unwrap();
    let normalized = kind.normalize(&load_fixture(fixture)).unwrap();
    // normalising twice is stable
    let again = kind.normalize(&normalized.to_string()).unwrap();
    assert_eq!(normalized, again);
}

#[test]
fn test_entity_kind_rejects_wrong_entity() {
    let err = EntityKind::Agreement
        .normalize(&load_fixture("user_data.json"))
        .unwrap_err();
    assert!(err.is_shape_mismatch());
}
