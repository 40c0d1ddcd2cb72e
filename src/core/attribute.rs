//! core::attribute
//!
//! Qualified attribute attached to a field.
//!
//! # Naming
//!
//! An attribute is addressed by its qualified name (`prefix:local`, or a
//! bare `local`). The qualified name is the key in a field's attribute
//! table; the namespace URI is carried alongside but is not part of the key.
//!
//! # Example
//!
//! ```
//! use xmpfield::core::attribute::Attribute;
//! use xmpfield::core::namespace::XML_NS_URI;
//!
//! let lang = Attribute::namespaced(XML_NS_URI, "xml:lang", "en-US");
//! assert_eq!(lang.prefix(), Some("xml"));
//! assert_eq!(lang.local_name(), "lang");
//! assert_eq!(lang.value(), "en-US");
//! ```

use serde::{Deserialize, Serialize};

use super::namespace;

/// A qualified-name / value pair, optionally bound to a namespace URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    /// Namespace URI, absent for unqualified attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Qualified name, used as the key in a field's attribute table
    pub name: String,

    /// Attribute value
    pub value: String,
}

impl Attribute {
    /// Create an attribute without a namespace.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            namespace: None,
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create an attribute bound to `namespace`.
    pub fn namespaced(
        namespace: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            namespace: Some(namespace.into()),
            name: name.into(),
            value: value.into(),
        }
    }

    /// The namespace URI, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// The qualified name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The part of the qualified name before the first `:`, if there is one.
    pub fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(prefix, _)| prefix)
    }

    /// The part of the qualified name after the first `:`, or the whole name.
    pub fn local_name(&self) -> &str {
        self.name
            .split_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    /// Returns true if this attribute is an `xmlns` declaration.
    ///
    /// Only the namespace URI is consulted; an attribute merely *named*
    /// `xmlns:foo` in some other namespace is an ordinary attribute.
    pub fn is_namespace_declaration(&self) -> bool {
        namespace::is_namespace_declaration(self.namespace())
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}=\"{}\"", self.name, self.value)
    }
}
