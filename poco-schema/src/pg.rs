//! PostgreSQL schema reader.
//!
//! Columns come from `information_schema.columns`. The type catalog is built
//! from `pg_catalog.pg_type`: each base type's `format_type` name (the same
//! text `information_schema.columns.data_type` reports) is keyed to the host
//! type of its internal `typname`.

use pocogen_config::{ConnectionConfig, Provider};
use pocogen_core::{ColumnDescriptor, HostType, TypeCatalog};
use postgres::{Client, NoTls, Statement};
use tracing::debug;

use crate::{Error, Result, SchemaReader, nullability::column_from_row, reader::build_catalog};

/// Columns of every table and view in one schema.
///
/// The metadata domains (`sql_identifier`, `yes_or_no`, ...) are cast so the
/// driver sees plain `text` and `int4`.
pub const GET_COLUMNS: &str = "SELECT table_name::text,
	column_name::text,
	data_type::text,
	is_nullable::text,
	ordinal_position::int4
FROM information_schema.columns
WHERE table_schema = $1
ORDER BY table_name, ordinal_position";

/// Base types of `pg_catalog`, oldest first.
pub const GET_TYPES: &str = "SELECT format_type(t.oid, NULL) AS type_code,
	t.typname::text
FROM pg_catalog.pg_type t
JOIN pg_catalog.pg_namespace n ON n.oid = t.typnamespace
WHERE n.nspname = 'pg_catalog' AND t.typtype = 'b'
ORDER BY t.oid ASC";

/// Host type for a `pg_type.typname`, if it has one.
pub fn host_type_for(typname: &str) -> Option<HostType> {
    let host_type = match typname {
        "bool" => HostType::Boolean,
        "char" => HostType::Char,
        "int2" => HostType::Int16,
        "int4" => HostType::Int32,
        "int8" => HostType::Int64,
        "oid" | "xid" | "cid" | "regclass" | "regtype" | "regproc" => HostType::UInt32,
        "float4" => HostType::Single,
        "float8" => HostType::Double,
        "numeric" | "money" => HostType::Decimal,
        "text" | "varchar" | "bpchar" | "name" | "json" | "jsonb" | "xml" => HostType::String,
        "bytea" => HostType::ByteArray,
        "date" | "timestamp" => HostType::DateTime,
        "timestamptz" | "timetz" => HostType::DateTimeOffset,
        "time" | "interval" => HostType::TimeSpan,
        "uuid" => HostType::Guid,
        _ => return None,
    };
    Some(host_type)
}

/// Reads schema metadata from a PostgreSQL database.
pub struct PostgresReader {
    client: Client,
    schema: String,
    columns_stmt: Statement,
    types_stmt: Statement,
}

impl PostgresReader {
    /// Connect using a configured connection.
    pub fn connect(conn: &ConnectionConfig) -> Result<Self> {
        let connection_string = conn.connection_string()?;
        let client = Client::connect(&connection_string, NoTls)
            .map_err(|e| Error::connection(&conn.name, Provider::Postgres, e))?;

        Self::new(client, conn.schema())
    }

    /// Wrap an open client, reading tables of `schema`.
    pub fn new(mut client: Client, schema: impl Into<String>) -> Result<Self> {
        Ok(PostgresReader {
            columns_stmt: client.prepare(GET_COLUMNS).map_err(Error::columns)?,
            types_stmt: client.prepare(GET_TYPES).map_err(Error::types)?,
            schema: schema.into(),
            client,
        })
    }
}

impl SchemaReader for PostgresReader {
    fn provider(&self) -> Provider {
        Provider::Postgres
    }

    fn read_columns(&mut self) -> Result<Vec<ColumnDescriptor>> {
        debug!(schema = %self.schema, "querying information_schema.columns");

        self.client
            .query(&self.columns_stmt, &[&self.schema])
            .map_err(Error::columns)?
            .iter()
            .map(|row| {
                let nullable: String = row.try_get(3).map_err(Error::columns)?;
                column_from_row(
                    row.try_get(0).map_err(Error::columns)?,
                    row.try_get(1).map_err(Error::columns)?,
                    row.try_get(2).map_err(Error::columns)?,
                    &nullable,
                    row.try_get(4).map_err(Error::columns)?,
                )
            })
            .collect()
    }

    fn read_type_catalog(&mut self) -> Result<TypeCatalog> {
        debug!("querying pg_catalog.pg_type");

        let rows = self
            .client
            .query(&self.types_stmt, &[])
            .map_err(Error::types)?
            .iter()
            .map(|row| {
                let type_code: String = row.try_get(0).map_err(Error::types)?;
                let typname: String = row.try_get(1).map_err(Error::types)?;
                Ok((type_code, host_type_for(&typname)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(build_catalog(rows))
    }
}
