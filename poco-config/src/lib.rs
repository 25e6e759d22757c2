// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Connection configuration for pocogen.
//!
//! The configuration is an explicit list of named connections, each with a
//! provider and a connection string, loaded from a TOML file once at startup
//! and passed down to the pipeline.

mod config;
mod connection;
mod error;
mod file;
mod validate;

pub use config::Config;
pub use connection::{ConnectionConfig, DEFAULT_POSTGRES_SCHEMA, Provider};
pub use error::{Error, Result, SourceContext};
pub use file::{ConfigFile, DEFAULT_CONFIG_FILE};
