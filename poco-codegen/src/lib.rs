//! C# POCO generation for pocogen.
//!
//! Turns a [`SchemaSnapshot`](pocogen_core::SchemaSnapshot) into one class
//! file per table.
//!
//! # Module Organization
//!
//! - [`builder`] - Indented text building
//! - [`mapper`] - Column type resolution
//! - [`model`] - Grouping columns into tables
//! - [`render`] - The class template
//! - [`diagnostics`] - Identifier warnings
//! - [`output`] - Output directory handling
//! - [`generator`] - The whole pipeline

pub mod builder;
pub mod diagnostics;
mod error;
pub mod generator;
pub mod mapper;
pub mod model;
pub mod output;
pub mod render;

pub use diagnostics::{IdentifierKind, IdentifierWarning};
pub use error::{Error, Result};
pub use generator::{GenerateResult, Generator, Preview, Progress};
pub use mapper::resolve_type;
pub use model::{ResolvedColumn, TableModel, build_models};
pub use output::OutputWriter;
pub use render::TableRenderer;
