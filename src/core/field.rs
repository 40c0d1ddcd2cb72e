//! core::field
//!
//! Base entity for every XMP field: properties, structured values, arrays
//! and schemas all start from a [`Field`].
//!
//! # Identity
//!
//! A field is named by a namespace URI, a prefix and a property (local)
//! name. The namespace URI and property name are fixed at construction;
//! the prefix may be rebound with [`Field::set_prefix`]. No identity value
//! is validated.
//!
//! # Attributes
//!
//! Attributes are keyed by qualified name. Setting an attribute whose name
//! is already present replaces it. Attributes in the `xmlns` namespace are
//! namespace declarations, not data, and are refused:
//!
//! - [`Field::set_attribute`] panics, since passing one is a caller bug
//! - [`Field::try_set_attribute`] returns [`FieldError::NamespaceDeclaration`]
//!   for callers forwarding attributes they did not construct
//!
//! # Extension
//!
//! Concrete field kinds embed a `Field` and implement [`XmpField`] to
//! inherit its accessors and attribute operations.
//!
//! # Example
//!
//! ```
//! use xmpfield::core::attribute::Attribute;
//! use xmpfield::core::field::Field;
//! use xmpfield::core::metadata::XmpMetadata;
//!
//! let doc = XmpMetadata::new();
//! let mut field = Field::new(doc.handle(), "http://ns.example/", "ex", "Title");
//!
//! field.set_attribute(Attribute::new("xml:lang", "en"));
//! field.set_attribute(Attribute::new("xml:lang", "fr"));
//!
//! assert_eq!(field.attribute_count(), 1);
//! assert_eq!(field.attribute("xml:lang").map(Attribute::value), Some("fr"));
//!
//! field.remove_attribute("xml:lang");
//! field.remove_attribute("xml:lang");
//! assert!(!field.has_attributes());
//! ```

use indexmap::IndexMap;
use thiserror::Error;

use super::attribute::Attribute;
use super::config::AttributeOrder;
use super::metadata::MetadataRef;

/// Errors from field operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("namespace declaration '{name}' cannot be stored as an attribute")]
    NamespaceDeclaration { name: String },
}

/// A namespace-qualified XMP field and its attributes.
///
/// Equality compares identity and the set of attributes; attribute order
/// is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    metadata: MetadataRef,
    namespace_uri: String,
    prefix: String,
    property_name: String,
    attributes: IndexMap<String, Attribute>,
}

impl Field {
    /// Create a field attached to `metadata` with no attributes.
    pub fn new(
        metadata: MetadataRef,
        namespace_uri: impl Into<String>,
        prefix: impl Into<String>,
        property_name: impl Into<String>,
    ) -> Self {
        Self {
            metadata,
            namespace_uri: namespace_uri.into(),
            prefix: prefix.into(),
            property_name: property_name.into(),
            attributes: IndexMap::new(),
        }
    }

    /// The namespace URI this field belongs to.
    pub fn namespace(&self) -> &str {
        &self.namespace_uri
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Rebind the prefix. The namespace URI is unaffected.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// The local name of this field.
    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    /// `prefix:property_name`, or just the property name when the prefix
    /// is empty.
    pub fn qualified_name(&self) -> String {
        if self.prefix.is_empty() {
            self.property_name.clone()
        } else {
            format!("{}:{}", self.prefix, self.property_name)
        }
    }

    /// Handle of the document this field was created for.
    pub fn metadata(&self) -> MetadataRef {
        self.metadata
    }

    /// Set an attribute, replacing any attribute with the same qualified
    /// name.
    ///
    /// # Panics
    ///
    /// Panics if `attribute` is in the `xmlns` namespace. The attribute
    /// table is not modified.
    pub fn set_attribute(&mut self, attribute: Attribute) {
        assert!(
            !attribute.is_namespace_declaration(),
            "namespace declaration '{}' passed to set_attribute on field '{}'",
            attribute.name,
            self.qualified_name()
        );
        self.upsert(attribute);
    }

    /// Set an attribute, reporting namespace declarations as an error.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::NamespaceDeclaration` if `attribute` is in the
    /// `xmlns` namespace. The attribute table is not modified.
    pub fn try_set_attribute(&mut self, attribute: Attribute) -> Result<(), FieldError> {
        if attribute.is_namespace_declaration() {
            tracing::warn!(
                field = %self.qualified_name(),
                attribute = %attribute.name,
                "rejected namespace declaration"
            );
            return Err(FieldError::NamespaceDeclaration {
                name: attribute.name,
            });
        }
        self.upsert(attribute);
        Ok(())
    }

    fn upsert(&mut self, attribute: Attribute) {
        // Remove first so a replaced attribute moves to the end.
        match self.attributes.shift_remove(&attribute.name) {
            Some(previous) => tracing::debug!(
                field = %self.property_name,
                attribute = %attribute.name,
                old = %previous.value,
                new = %attribute.value,
                "replaced attribute"
            ),
            None => tracing::trace!(
                field = %self.property_name,
                attribute = %attribute.name,
                "inserted attribute"
            ),
        }
        self.attributes.insert(attribute.name.clone(), attribute);
    }

    /// Returns true if an attribute with this qualified name is present.
    pub fn contains_attribute(&self, qualified_name: &str) -> bool {
        self.attributes.contains_key(qualified_name)
    }

    pub fn attribute(&self, qualified_name: &str) -> Option<&Attribute> {
        self.attributes.get(qualified_name)
    }

    /// Independent copy of all attributes, in insertion order.
    pub fn all_attributes(&self) -> Vec<Attribute> {
        self.attributes_in(AttributeOrder::Insertion)
    }

    /// Independent copy of all attributes in the requested order.
    pub fn attributes_in(&self, order: AttributeOrder) -> Vec<Attribute> {
        let mut snapshot: Vec<Attribute> = self.attributes.values().cloned().collect();
        if order == AttributeOrder::Name {
            snapshot.sort_by(|a, b| a.name.cmp(&b.name));
        }
        snapshot
    }

    /// Borrowing iterator over the attributes, in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values()
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// Remove an attribute. Removing an absent name is a no-op.
    pub fn remove_attribute(&mut self, qualified_name: &str) {
        if self.attributes.shift_remove(qualified_name).is_some() {
            tracing::trace!(
                field = %self.property_name,
                attribute = qualified_name,
                "removed attribute"
            );
        }
    }
}

/// Common behavior of every XMP field kind.
///
/// Implementors expose their embedded [`Field`]; everything else is
/// provided.
///
/// # Example
///
/// ```
/// use xmpfield::core::attribute::Attribute;
/// use xmpfield::core::field::{Field, XmpField};
/// use xmpfield::core::metadata::XmpMetadata;
///
/// struct TextProperty {
///     base: Field,
///     value: String,
/// }
///
/// impl XmpField for TextProperty {
///     fn field(&self) -> &Field {
///         &self.base
///     }
///
///     fn field_mut(&mut self) -> &mut Field {
///         &mut self.base
///     }
/// }
///
/// let doc = XmpMetadata::new();
/// let mut title = TextProperty {
///     base: doc.create_field("http://purl.org/dc/elements/1.1/", "dc", "title"),
///     value: "Sunset".into(),
/// };
/// title.set_attribute(Attribute::new("xml:lang", "x-default"));
///
/// assert_eq!(title.property_name(), "title");
/// assert!(title.contains_attribute("xml:lang"));
/// assert_eq!(title.value, "Sunset");
/// ```
pub trait XmpField {
    fn field(&self) -> &Field;

    fn field_mut(&mut self) -> &mut Field;

    fn namespace(&self) -> &str {
        self.field().namespace()
    }

    fn prefix(&self) -> &str {
        self.field().prefix()
    }

    fn property_name(&self) -> &str {
        self.field().property_name()
    }

    fn metadata(&self) -> MetadataRef {
        self.field().metadata()
    }

    /// See [`Field::set_attribute`].
    ///
    /// # Panics
    ///
    /// Panics if `attribute` is in the `xmlns` namespace.
    fn set_attribute(&mut self, attribute: Attribute) {
        self.field_mut().set_attribute(attribute);
    }

    fn contains_attribute(&self, qualified_name: &str) -> bool {
        self.field().contains_attribute(qualified_name)
    }

    fn attribute(&self, qualified_name: &str) -> Option<&Attribute> {
        self.field().attribute(qualified_name)
    }

    fn all_attributes(&self) -> Vec<Attribute> {
        self.field().all_attributes()
    }

    fn remove_attribute(&mut self, qualified_name: &str) {
        self.field_mut().remove_attribute(qualified_name);
    }
}

impl XmpField for Field {
    fn field(&self) -> &Field {
        self
    }

    fn field_mut(&mut self) -> &mut Field {
        self
    }
}
