use pocogen_config::Provider;
use pocogen_core::{ColumnDescriptor, HostType, SchemaSnapshot, TypeCatalog, TypeMapping};
use tracing::{debug, trace};

use crate::Result;

/// Reads schema metadata from an open database connection.
///
/// Implement this trait to add support for a new database provider.
pub trait SchemaReader {
    /// The provider this reader talks to.
    fn provider(&self) -> Provider;

    /// Read every column of every table, in no guaranteed order.
    fn read_columns(&mut self) -> Result<Vec<ColumnDescriptor>>;

    /// Read the mapping from declared type codes to host types.
    fn read_type_catalog(&mut self) -> Result<TypeCatalog>;

    /// Read both catalogs.
    fn read(&mut self) -> Result<SchemaSnapshot> {
        let columns = self.read_columns()?;
        let catalog = self.read_type_catalog()?;

        debug!(
            provider = %self.provider(),
            columns = columns.len(),
            types = catalog.len(),
            "read schema metadata"
        );

        Ok(SchemaSnapshot::new(columns, catalog))
    }
}

/// Build a type catalog from `(type_code, host_type)` rows.
///
/// Rows without a host type are skipped. A type code seen twice keeps the
/// host type of the later row.
pub(crate) fn build_catalog<I>(rows: I) -> TypeCatalog
where
    I: IntoIterator<Item = (String, Option<HostType>)>,
{
    let mut catalog = TypeCatalog::new();

    for (type_code, host_type) in rows {
        let Some(host_type) = host_type else {
            trace!(%type_code, "no host type, skipping");
            continue;
        };

        if let Some(previous) = catalog.insert(TypeMapping::new(type_code, host_type)) {
            debug!(
                type_code = %previous.type_code,
                previous = %previous.host_type,
                current = %host_type,
                "duplicate type code, keeping the later entry"
            );
        }
    }

    catalog
}
