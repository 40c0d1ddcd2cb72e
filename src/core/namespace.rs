//! core::namespace
//!
//! Reserved namespace URIs the field model treats specially.

/// Namespace bound to every `xmlns` / `xmlns:*` declaration.
///
/// Attributes in this namespace are structural (they declare prefixes) and
/// are never stored in a field's attribute table.
pub const XMLNS_ATTRIBUTE_NS_URI: &str = "http://www.w3.org/2000/xmlns/";

/// Namespace bound to the `xml` prefix (`xml:lang`, `xml:space`, ...).
pub const XML_NS_URI: &str = "http://www.w3.org/XML/1998/namespace";

/// RDF syntax namespace, home of `rdf:about`, `rdf:parseType` and friends.
pub const RDF_NS_URI: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// Returns true if `namespace` is the namespace-declaration namespace.
///
/// # Example
///
/// ```
/// use xmpfield::core::namespace::{is_namespace_declaration, XML_NS_URI};
///
/// assert!(is_namespace_declaration(Some("http://www.w3.org/2000/xmlns/")));
/// assert!(!is_namespace_declaration(Some(XML_NS_URI)));
/// assert!(!is_namespace_declaration(None));
/// ```
pub fn is_namespace_declaration(namespace: Option<&str>) -> bool {
    namespace == Some(XMLNS_ATTRIBUTE_NS_URI)
}
