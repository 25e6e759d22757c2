//! Core operations.
//!
//! This module contains the business logic for poco commands,
//! separated from CLI argument parsing. Generation reports its progress
//! to an `Output` while it runs; everything else returns a report.

pub mod generate;
pub mod generate_all;
pub mod list;

pub use generate::generate;
pub use generate_all::generate_all;
pub use list::list;
