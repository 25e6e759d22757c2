use pocogen_core::ColumnDescriptor;

use crate::{Error, Result};

/// Parse a textual nullability indicator.
///
/// `YES` means nullable and `NO` means not nullable, compared without regard
/// to ASCII case or surrounding whitespace. Anything else is rejected.
pub fn parse_nullable(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("YES") {
        Some(true)
    } else if value.eq_ignore_ascii_case("NO") {
        Some(false)
    } else {
        None
    }
}

/// Build a column descriptor from one row of a column catalog.
pub(crate) fn column_from_row(
    table_name: String,
    column_name: String,
    declared_type_code: String,
    nullable: &str,
    ordinal_position: i32,
) -> Result<ColumnDescriptor> {
    let is_nullable =
        parse_nullable(nullable).ok_or_else(|| Error::UnexpectedNullability {
            table: table_name.clone(),
            column: column_name.clone(),
            value: nullable.to_string(),
        })?;

    Ok(ColumnDescriptor {
        table_name,
        column_name,
        declared_type_code,
        is_nullable,
        ordinal_position,
    })
}
