//! Core types for the pocogen POCO generator.
//!
//! This crate holds the data model shared by the schema readers and the
//! code generator: column descriptors, the host type enumeration, the type
//! catalog, and generated documents.

mod column;
mod document;
mod host_type;
mod ident;

// Schema metadata
pub use column::{ColumnDescriptor, SchemaSnapshot};
// Generated output
pub use document::{GeneratedDocument, SOURCE_EXTENSION};
// Type mapping
pub use host_type::{HostType, TypeCatalog, TypeMapping};
// Identifier checks
pub use ident::{is_csharp_keyword, validate_identifier};
