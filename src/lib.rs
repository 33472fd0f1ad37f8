//! Article reference enricher
//!
//! Parses a JSON document holding a list of article records, resolves the
//! `mainImage` and `tags` identifier references against an in-memory
//! [`ReferenceCatalog`], removes tag lists that resolved to nothing, and
//! serializes the records back to JSON.

pub mod enrichment;
pub mod error;
pub mod models;

pub use enrichment::{ArticleEnricher, ReferenceCatalog};
pub use error::{AppError, Result};
pub use models::{Article, EnrichedArticle, ImageRef, TagRef};
