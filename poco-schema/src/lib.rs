//! Schema readers for pocogen.
//!
//! A [`SchemaReader`] queries an open database for its column catalog and
//! its type catalog. [`connect`] resolves a configured connection to the
//! reader for its provider.
//!
//! # Module Organization
//!
//! - [`pg`] - PostgreSQL reader (`information_schema` + `pg_type`)
//! - [`sqlite`] - SQLite reader (`sqlite_master` + `pragma_table_info`)

mod error;
mod nullability;
pub mod pg;
mod reader;
pub mod sqlite;

pub use error::{DriverError, Error, Result};
pub use nullability::parse_nullable;
use pocogen_config::{ConnectionConfig, Provider};
pub use reader::SchemaReader;
use tracing::debug;

/// Open a schema reader for a configured connection.
pub fn connect(conn: &ConnectionConfig) -> Result<Box<dyn SchemaReader>> {
    debug!(connection = %conn.name, provider = %conn.provider, "opening connection");

    match conn.provider {
        Provider::Postgres => Ok(Box::new(pg::PostgresReader::connect(conn)?)),
        Provider::Sqlite => Ok(Box::new(sqlite::SqliteReader::open(conn)?)),
    }
}
