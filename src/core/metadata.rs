//! core::metadata
//!
//! The owning metadata document, as seen from its fields.
//!
//! # Ownership
//!
//! A field records which document it belongs to through a [`MetadataRef`]:
//! a copyable identifier, not a pointer. The field never reaches back into
//! the document; the document (or whatever registry issued the handle)
//! decides what a handle means. This keeps fields free of lifetimes and
//! reference cycles while still letting a document recognize its own
//! fields.
//!
//! # Example
//!
//! ```
//! use xmpfield::core::metadata::XmpMetadata;
//!
//! let doc = XmpMetadata::new();
//! let other = XmpMetadata::new();
//!
//! let title = doc.create_field("http://purl.org/dc/elements/1.1/", "dc", "title");
//! assert!(doc.owns(&title));
//! assert!(!other.owns(&title));
//! ```

use uuid::Uuid;

use super::attribute::Attribute;
use super::config::ModelConfig;
use super::field::{Field, XmpField};

/// Non-owning handle to a metadata document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MetadataRef(Uuid);

impl MetadataRef {
    /// Wrap an identifier issued by an external document registry.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for MetadataRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An XMP metadata document context.
///
/// Only the parts fields interact with are modeled here: identity and
/// model configuration. Schemas, serialization and the document tree live
/// with the code that owns the fields.
///
/// Not `Clone`: a handle identifies exactly one document.
#[derive(Debug)]
pub struct XmpMetadata {
    handle: MetadataRef,
    config: ModelConfig,
}

impl XmpMetadata {
    /// Create a document with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ModelConfig::default())
    }

    /// Create a document with an explicit configuration.
    pub fn with_config(config: ModelConfig) -> Self {
        let handle = MetadataRef::generate();
        tracing::trace!(metadata = %handle, "created metadata context");
        Self { handle, config }
    }

    /// The handle fields of this document are constructed with.
    pub fn handle(&self) -> MetadataRef {
        self.handle
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Construct a field attached to this document.
    pub fn create_field(
        &self,
        namespace_uri: impl Into<String>,
        prefix: impl Into<String>,
        property_name: impl Into<String>,
    ) -> Field {
        Field::new(self.handle, namespace_uri, prefix, property_name)
    }

    /// Returns true if `field` was constructed with this document's handle.
    pub fn owns<F: XmpField + ?Sized>(&self, field: &F) -> bool {
        field.metadata() == self.handle
    }

    /// Snapshot of `field`'s attributes in the configured order.
    pub fn snapshot_attributes<F: XmpField + ?Sized>(&self, field: &F) -> Vec<Attribute> {
        field.field().attributes_in(self.config.attribute_order())
    }
}

impl Default for XmpMetadata {
    fn default() -> Self {
        Self::new()
    }
}
