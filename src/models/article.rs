use serde::{Deserialize, Serialize};

/// An article record as it arrives on the wire, before reference resolution.
///
/// Every field is optional: the transform only reads `mainImage` and `tags`,
/// so records missing `id`, `title` or `body` are accepted and passed through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Numeric article identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Human-readable title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Article body text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Identifier of the lead image, resolved during enrichment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,

    /// Ordered tag identifiers, resolved during enrichment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Article {
    /// Create a bare article with the given identifier
    pub fn new(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the body text
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the lead image identifier
    pub fn with_main_image(mut self, image_id: impl Into<String>) -> Self {
        self.main_image = Some(image_id.into());
        self
    }

    /// Set the tag identifier list
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Tag identifiers in input order, empty when the field is absent
    pub fn tag_ids(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

/// An article record after reference resolution.
///
/// `main_image` and `tags` carry resolved catalog objects; `None` fields are
/// omitted from the serialized output, so an article whose tags all failed to
/// resolve serializes without a `tags` key at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedArticle {
    /// Numeric article identifier, passed through unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Human-readable title, passed through unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Article body text, passed through unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Resolved lead image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<ImageRef>,

    /// Resolved tags, never present as an empty list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagRef>>,
}

/// A resolved image reference from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Image identifier
    pub id: String,

    /// Stored filename
    pub filename: String,
}

impl ImageRef {
    /// Create an image reference
    pub fn new(id: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            filename: filename.into(),
        }
    }
}

/// A resolved tag reference from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRef {
    /// Tag identifier
    pub id: String,

    /// Display name
    pub name: String,
}

impl TagRef {
    /// Create a tag reference
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
