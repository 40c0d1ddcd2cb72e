//! core
//!
//! Domain types for the XMP field model.
//!
//! # Modules
//!
//! - [`namespace`] - Reserved namespace URIs
//! - [`attribute`] - Qualified attribute entity
//! - [`field`] - Base field entity and the [`field::XmpField`] extension trait
//! - [`metadata`] - Owning document handle and context
//! - [`config`] - Model configuration schema and loading
//!
//! # Design Principles
//!
//! - Fields never own or dereference their document
//! - Contract violations panic; absence is `None`, never an error

pub mod attribute;
pub mod config;
pub mod field;
pub mod metadata;
pub mod namespace;
