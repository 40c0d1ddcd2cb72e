//! xmpfield - Base field entity for XMP metadata models
//!
//! An XMP document is a tree of namespace-qualified properties, each of
//! which may carry XML-style attributes (`xml:lang`, `rdf:parseType`, ...).
//! This crate provides the base entity all concrete property kinds build on:
//! qualified identity, a handle to the owning document, and an attribute
//! table with replace semantics.
//!
//! # Architecture
//!
//! - [`core`] - Field and attribute types, the owning metadata context,
//!   and the model configuration
//!
//! # Correctness Invariants
//!
//! 1. A field holds at most one attribute per qualified name
//! 2. Namespace declarations (`xmlns:*`) are never stored as attributes
//! 3. A field's namespace URI and property name never change after construction
//!
//! # Example
//!
//! ```
//! use xmpfield::core::attribute::Attribute;
//! use xmpfield::core::field::Field;
//! use xmpfield::core::metadata::XmpMetadata;
//!
//! let metadata = XmpMetadata::new();
//! let mut field = Field::new(metadata.handle(), "http://ns.example/", "ex", "Title");
//!
//! field.set_attribute(Attribute::new("xml:lang", "en"));
//! assert_eq!(field.attribute("xml:lang").map(Attribute::value), Some("en"));
//! ```

pub mod core;
