use crate::enrichment::catalog::ReferenceCatalog;
use crate::error::Result;
use crate::models::{Article, EnrichedArticle, TagRef};
use tracing::debug;

/// Resolves image and tag references on article records against a catalog.
///
/// Each record is transformed independently and input order is preserved.
pub struct ArticleEnricher {
    /// Catalog backing all lookups
    catalog: ReferenceCatalog,
}

impl ArticleEnricher {
    /// Create an enricher over the given catalog
    pub fn new(catalog: ReferenceCatalog) -> Self {
        Self { catalog }
    }

    /// Enrich a single article record.
    ///
    /// A present `mainImage` is replaced by the catalog's lead image,
    /// whatever identifier the record carried. Tag identifiers resolve in
    /// input order; identifiers the catalog does not know are dropped. A
    /// record whose tags all dropped (or that had none) loses the `tags`
    /// field rather than keeping an empty list.
    pub fn enrich(&self, article: Article) -> EnrichedArticle {
        let main_image = article
            .main_image
            .as_ref()
            .map(|_| self.catalog.main_image().clone());

        let resolved: Vec<TagRef> = article
            .tag_ids()
            .iter()
            .filter_map(|tag_id| match self.catalog.resolve_tag(tag_id) {
                Some(tag) => Some(tag.clone()),
                None => {
                    debug!(tag_id = %tag_id, article_id = ?article.id, "dropping unresolved tag reference");
                    None
                }
            })
            .collect();

        let tags = if resolved.is_empty() {
            None
        } else {
            Some(resolved)
        };

        EnrichedArticle {
            id: article.id,
            title: article.title,
            body: article.body,
            main_image,
            tags,
        }
    }

    /// Enrich a sequence of records, preserving input order
    pub fn enrich_all(&self, articles: Vec<Article>) -> Vec<EnrichedArticle> {
        articles
            .into_iter()
            .map(|article| self.enrich(article))
            .collect()
    }

    /// Parse a JSON document of article records, enrich every record, and
    /// serialize the result back to compact JSON text.
    ///
    /// Fails only when the input text is not a valid JSON array of records;
    /// lookup misses and absent fields are never errors.
    pub fn enrich_document(&self, input: &str) -> Result<String> {
        let articles: Vec<Article> = serde_json::from_str(input)?;
        let enriched = self.enrich_all(articles);
        Ok(serde_json::to_string(&enriched)?)
    }
}

impl Default for ArticleEnricher {
    fn default() -> Self {
        Self::new(ReferenceCatalog::default())
    }
}
