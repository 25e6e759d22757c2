use std::collections::BTreeMap;

use pocogen_core::{ColumnDescriptor, SchemaSnapshot};

use crate::{Error, Result, mapper::resolve_type};

/// A column with its host type resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    pub name: String,
    /// Rendered type, including the optional marker.
    pub type_name: String,
}

/// One table ready to render, columns in ordinal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableModel {
    pub table_name: String,
    pub columns: Vec<ResolvedColumn>,
}

/// Group a snapshot's columns into tables and resolve every column type.
///
/// Tables come back sorted by name (byte-wise), columns by ordinal position.
/// Fails on the first table whose name cannot name a file in the output
/// directory, or on the first column whose type has no mapping.
pub fn build_models(snapshot: &SchemaSnapshot) -> Result<Vec<TableModel>> {
    let mut tables: BTreeMap<&str, Vec<&ColumnDescriptor>> = BTreeMap::new();
    for column in &snapshot.columns {
        tables.entry(column.table_name.as_str()).or_default().push(column);
    }

    for table_name in tables.keys() {
        check_file_stem(table_name)?;
    }

    tables
        .into_iter()
        .map(|(table_name, mut columns)| {
            columns.sort_by_key(|c| c.ordinal_position);

            let columns = columns
                .into_iter()
                .map(|c| {
                    Ok(ResolvedColumn {
                        name: c.column_name.clone(),
                        type_name: resolve_type(c, &snapshot.catalog)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(TableModel {
                table_name: table_name.to_string(),
                columns,
            })
        })
        .collect()
}

/// A table name must stay a single path component once `.cs` is appended.
fn check_file_stem(table_name: &str) -> Result<()> {
    let reason = if table_name.is_empty() {
        "empty name"
    } else if table_name == "." || table_name == ".." {
        "refers to a directory"
    } else if table_name.contains(['/', '\\']) {
        "contains a path separator"
    } else if table_name.contains('\0') {
        "contains a NUL character"
    } else {
        return Ok(());
    };

    Err(Error::InvalidTableName {
        table: table_name.to_string(),
        reason,
    })
}
