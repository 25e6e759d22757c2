use crate::TypeCatalog;

/// Metadata for a single column, as read from the column catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub table_name: String,
    pub column_name: String,
    /// The driver's native type identifier, e.g. `integer` or `VARCHAR(50)`.
    pub declared_type_code: String,
    pub is_nullable: bool,
    /// 1-based position of the column within its table.
    pub ordinal_position: i32,
}

impl ColumnDescriptor {
    pub fn new(
        table_name: impl Into<String>,
        column_name: impl Into<String>,
        declared_type_code: impl Into<String>,
        is_nullable: bool,
        ordinal_position: i32,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            column_name: column_name.into(),
            declared_type_code: declared_type_code.into(),
            is_nullable,
            ordinal_position,
        }
    }
}

/// Everything a schema reader returns for one connection.
#[derive(Debug, Clone, Default)]
pub struct SchemaSnapshot {
    /// Columns across all tables, in no guaranteed order.
    pub columns: Vec<ColumnDescriptor>,
    pub catalog: TypeCatalog,
}

impl SchemaSnapshot {
    pub fn new(columns: Vec<ColumnDescriptor>, catalog: TypeCatalog) -> Self {
        Self { columns, catalog }
    }

    /// Distinct table names, sorted.
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.columns.iter().map(|c| c.table_name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}
