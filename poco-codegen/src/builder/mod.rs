//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Fluent API for building indented code

mod code_builder;

pub use code_builder::CodeBuilder;
