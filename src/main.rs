use article_enricher::{Article, ArticleEnricher, ReferenceCatalog};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Bundled article feed; a real deployment would read this from a file or
/// feed endpoint instead.
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

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "article_enricher=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting article enricher v{}", env!("CARGO_PKG_VERSION"));

    let enricher = ArticleEnricher::new(ReferenceCatalog::default());

    let articles: Vec<Article> = serde_json::from_str(SAMPLE_DOCUMENT)?;
    let enriched = enricher.enrich_all(articles);
    tracing::info!("Enriched {} article records", enriched.len());

    println!("{}", serde_json::to_string(&enriched)?);

    Ok(())
}
