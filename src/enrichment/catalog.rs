use crate::models::{ImageRef, TagRef};
use std::collections::HashMap;

/// Read-only reference catalog backing enrichment lookups.
///
/// Stands in for an external asset store: one fixed lead image plus a table
/// of known tags keyed by identifier. The catalog is passed explicitly into
/// the enricher rather than living in global state.
#[derive(Debug, Clone)]
pub struct ReferenceCatalog {
    /// The lead image every image reference resolves to
    main_image: ImageRef,

    /// Known tags keyed by identifier
    tags: HashMap<String, TagRef>,
}

impl ReferenceCatalog {
    /// Create a catalog with the given lead image and no tags
    pub fn new(main_image: ImageRef) -> Self {
        Self {
            main_image,
            tags: HashMap::new(),
        }
    }

    /// Register a tag, keyed by its own identifier
    pub fn with_tag(mut self, tag: TagRef) -> Self {
        self.tags.insert(tag.id.clone(), tag);
        self
    }

    /// The single lead image used for any image reference
    pub fn main_image(&self) -> &ImageRef {
        &self.main_image
    }

    /// Look up a tag by identifier; a miss is `None`, never an error
    pub fn resolve_tag(&self, tag_id: &str) -> Option<&TagRef> {
        self.tags.get(tag_id)
    }

    /// Number of registered tags
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }
}

impl Default for ReferenceCatalog {
    /// The built-in catalog used by the bundled sample document.
    ///
    /// Note: `tag456` has no entry here, so references to it drop out of
    /// enriched records.
    fn default() -> Self {
        Self::new(ImageRef::new("image234", "234.png"))
            .with_tag(TagRef::new("tag345", "news"))
            .with_tag(TagRef::new("tag789", "sport"))
    }
}
