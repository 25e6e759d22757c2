//! SQLite schema reader.
//!
//! SQLite has no type catalog of its own, so the catalog is derived from the
//! declared types actually used in the database.

use pocogen_config::{ConnectionConfig, Provider};
use pocogen_core::{ColumnDescriptor, HostType, TypeCatalog};
use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use crate::{Error, Result, SchemaReader, nullability::column_from_row, reader::build_catalog};

/// Columns of every user table and view, generated columns included.
///
/// Primary key columns count as not nullable. Hidden columns of virtual
/// tables are left out.
pub const GET_COLUMNS: &str = r#"SELECT m.name,
	p.name,
	p.type,
	CASE WHEN p."notnull" = 0 AND p.pk = 0 THEN 'YES' ELSE 'NO' END,
	p.cid + 1
FROM sqlite_master m, pragma_table_xinfo(m.name) p
WHERE m.type IN ('table', 'view') AND m.name NOT LIKE 'sqlite\_%' ESCAPE '\'
	AND p.hidden <> 1
ORDER BY m.name, p.cid"#;

/// Distinct declared types of every user table and view.
pub const GET_TYPES: &str = r#"SELECT DISTINCT p.type
FROM sqlite_master m, pragma_table_xinfo(m.name) p
WHERE m.type IN ('table', 'view') AND m.name NOT LIKE 'sqlite\_%' ESCAPE '\'
	AND p.hidden <> 1
ORDER BY p.type"#;

/// Host type for a declared column type.
///
/// A few common declarations get a precise type. Everything else follows
/// SQLite's column affinity rules.
pub fn host_type_for_declared(declared: &str) -> HostType {
    let declared = declared.trim().to_ascii_uppercase();
    let base = declared
        .split('(')
        .next()
        .unwrap_or_default()
        .trim_end();

    match base {
        "" => return HostType::Object,
        "BOOL" | "BOOLEAN" => return HostType::Boolean,
        "DATE" | "DATETIME" | "TIMESTAMP" => return HostType::DateTime,
        "GUID" | "UUID" | "UNIQUEIDENTIFIER" => return HostType::Guid,
        _ => {}
    }

    if declared.contains("INT") {
        HostType::Int64
    } else if ["CHAR", "CLOB", "TEXT"].iter().any(|s| declared.contains(s)) {
        HostType::String
    } else if declared.contains("BLOB") {
        HostType::ByteArray
    } else if ["REAL", "FLOA", "DOUB"].iter().any(|s| declared.contains(s)) {
        HostType::Double
    } else {
        HostType::Decimal
    }
}

/// Reads schema metadata from a SQLite database file.
pub struct SqliteReader {
    conn: Connection,
}

impl SqliteReader {
    /// Open the database named by a configured connection, read-only.
    ///
    /// The connection string is a file path or a `file:` URI. A missing file
    /// is a connection error rather than a new empty database.
    pub fn open(conn: &ConnectionConfig) -> Result<Self> {
        let path = conn.connection_string()?;
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let connection = Connection::open_with_flags(&path, flags)
            .map_err(|e| Error::connection(&conn.name, Provider::Sqlite, e))?;

        Ok(Self::new(connection))
    }

    /// Wrap an open connection.
    pub fn new(conn: Connection) -> Self {
        SqliteReader { conn }
    }
}

impl SchemaReader for SqliteReader {
    fn provider(&self) -> Provider {
        Provider::Sqlite
    }

    fn read_columns(&mut self) -> Result<Vec<ColumnDescriptor>> {
        debug!("querying pragma_table_xinfo");

        let mut stmt = self.conn.prepare(GET_COLUMNS).map_err(Error::columns)?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, i32>(4)?,
                ))
            })
            .map_err(Error::columns)?;

        let mut columns = Vec::new();
        for row in rows {
            let (table, column, type_code, nullable, ordinal) = row.map_err(Error::columns)?;
            columns.push(column_from_row(table, column, type_code, &nullable, ordinal)?);
        }

        Ok(columns)
    }

    fn read_type_catalog(&mut self) -> Result<TypeCatalog> {
        debug!("collecting declared column types");

        let mut stmt = self.conn.prepare(GET_TYPES).map_err(Error::types)?;
        let declared = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(Error::types)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(Error::types)?;

        Ok(build_catalog(declared.into_iter().map(|type_code| {
            let host_type = host_type_for_declared(&type_code);
            (type_code, Some(host_type))
        })))
    }
}
