//! Column type resolution.

use pocogen_core::{ColumnDescriptor, TypeCatalog};

use crate::{Error, Result};

/// Marker appended to nullable value types.
pub const OPTIONAL_MARKER: char = '?';

/// Resolve the host type name of a column.
///
/// Nullable columns of value types get the optional marker, e.g.
/// `Int32?`. Reference types never do.
pub fn resolve_type(column: &ColumnDescriptor, catalog: &TypeCatalog) -> Result<String> {
    let mapping =
        catalog
            .get(&column.declared_type_code)
            .ok_or_else(|| Error::UnmappedType {
                table: column.table_name.clone(),
                column: column.column_name.clone(),
                type_code: column.declared_type_code.clone(),
            })?;

    let mut name = mapping.host_type.name().to_string();
    if column.is_nullable && mapping.is_value_type() {
        name.push(OPTIONAL_MARKER);
    }
    Ok(name)
}
