/// Reference enrichment module for article records
///
/// This module resolves the identifier references an article record carries:
/// - Lead image resolution against the catalog's fixed image entry
/// - Tag resolution against the catalog's tag table, dropping unknown ids
/// - Empty tag list normalization (the field is removed, not kept empty)

pub mod catalog;
pub mod enricher;

pub use catalog::ReferenceCatalog;
pub use enricher::ArticleEnricher;
