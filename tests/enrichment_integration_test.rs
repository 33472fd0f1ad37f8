use article_enricher::{
    AppError, Article, ArticleEnricher, EnrichedArticle, ImageRef, ReferenceCatalog, TagRef,
};
use serde_json::json;

/// Helper function to create the catalog backing the sample feed
fn sample_catalog() -> ReferenceCatalog {
    ReferenceCatalog::new(ImageRef::new("image234", "234.png"))
        .with_tag(TagRef::new("tag345", "news"))
        .with_tag(TagRef::new("tag789", "sport"))
}

/// The sample feed: one fully-referenced article, one with an empty tag list
const SAMPLE_DOCUMENT: &str = r#"[{
      "id": 123,
      "title": "News article",
      "body": "The body",
      "mainImage": "image234",
      "tags": [ "tag345", "tag456", "tag789" ]
    },
    {
      "id": 999,
      "title": "Another news article",
      "body": "The other body",
      "tags": [ ]
    }]"#;

/// Test the full document transform end to end
#[test]
fn test_enrich_sample_document() {
    let enricher = ArticleEnricher::new(sample_catalog());

    let output = enricher.enrich_document(SAMPLE_DOCUMENT).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(
        value,
        json!([
            {
                "id": 123,
                "title": "News article",
                "body": "The body",
                "mainImage": { "id": "image234", "filename": "234.png" },
                "tags": [
                    { "id": "tag345", "name": "news" },
                    { "id": "tag789", "name": "sport" }
                ]
            },
            {
                "id": 999,
                "title": "Another news article",
                "body": "The other body"
            }
        ])
    );
}

/// Test that the main image is replaced whatever identifier was given
#[test]
fn test_any_image_identifier_resolves_to_catalog_image() {
    let enricher = ArticleEnricher::new(sample_catalog());

    let output = enricher
        .enrich_document(r#"[{"id": 1, "mainImage": "image000"}]"#)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(
        value[0]["mainImage"],
        json!({ "id": "image234", "filename": "234.png" })
    );
}

/// Test that a record with no resolvable references collapses to its plain fields
#[test]
fn test_empty_tags_and_missing_image_are_absent() {
    let enricher = ArticleEnricher::new(sample_catalog());

    let output = enricher
        .enrich_document(r#"[{"id": 999, "tags": []}]"#)
        .unwrap();

    assert_eq!(output, r#"[{"id":999}]"#);
}

/// Test that survivors keep the relative order of the input identifiers
#[test]
fn test_tag_order_preserved_across_drops() {
    let enricher = ArticleEnricher::new(sample_catalog());

    let article = Article::new(5).with_tags(vec![
        "tag789".to_string(),
        "tag456".to_string(),
        "tag345".to_string(),
    ]);
    let enriched = enricher.enrich(article);

    let ids: Vec<&str> = enriched
        .tags
        .as_deref()
        .unwrap()
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec!["tag789", "tag345"]);
}

/// Test that malformed input fails the whole operation with a parse error
#[test]
fn test_malformed_document_is_a_serialization_error() {
    let enricher = ArticleEnricher::new(sample_catalog());

    let err = enricher.enrich_document(r#"[{"id": 123,"#).unwrap_err();
    assert!(matches!(err, AppError::Serialization(_)));
}

/// Test that the serialized output parses back into records satisfying the
/// enrichment invariants
#[test]
fn test_output_round_trips_with_invariants_intact() {
    let enricher = ArticleEnricher::new(sample_catalog());

    let output = enricher.enrich_document(SAMPLE_DOCUMENT).unwrap();
    let reparsed: Vec<EnrichedArticle> = serde_json::from_str(&output).unwrap();

    assert_eq!(reparsed.len(), 2);
    for article in &reparsed {
        if let Some(tags) = &article.tags {
            assert!(!tags.is_empty());
            for tag in tags {
                assert!(sample_catalog().resolve_tag(&tag.id).is_some());
            }
        }
        if let Some(image) = &article.main_image {
            assert_eq!(image, &ImageRef::new("image234", "234.png"));
        }
    }
}
