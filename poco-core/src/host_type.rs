//! Host primitive types and the catalog mapping database type codes to them.

use std::{collections::HashMap, fmt};

/// Supported host primitive types.
///
/// This is the closed set of CLR primitives a database type code can map to.
/// Anything a provider cannot express with one of these is left out of the
/// catalog instead of being resolved at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostType {
    Boolean,
    Byte,
    SByte,
    Int16,
    Int32,
    Int64,
    UInt16,
    UInt32,
    UInt64,
    Single,
    Double,
    Decimal,
    Char,
    DateTime,
    DateTimeOffset,
    TimeSpan,
    Guid,
    String,
    ByteArray,
    Object,
}

impl HostType {
    /// The type name as it appears in generated source.
    pub fn name(&self) -> &'static str {
        match self {
            HostType::Boolean => "Boolean",
            HostType::Byte => "Byte",
            HostType::SByte => "SByte",
            HostType::Int16 => "Int16",
            HostType::Int32 => "Int32",
            HostType::Int64 => "Int64",
            HostType::UInt16 => "UInt16",
            HostType::UInt32 => "UInt32",
            HostType::UInt64 => "UInt64",
            HostType::Single => "Single",
            HostType::Double => "Double",
            HostType::Decimal => "Decimal",
            HostType::Char => "Char",
            HostType::DateTime => "DateTime",
            HostType::DateTimeOffset => "DateTimeOffset",
            HostType::TimeSpan => "TimeSpan",
            HostType::Guid => "Guid",
            HostType::String => "String",
            HostType::ByteArray => "Byte[]",
            HostType::Object => "Object",
        }
    }

    /// Whether the type is a value type.
    ///
    /// Value types have no absent representation, so a nullable column of a
    /// value type needs an explicit optional marker.
    pub fn is_value_type(&self) -> bool {
        !matches!(
            self,
            HostType::String | HostType::ByteArray | HostType::Object
        )
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single entry of the type catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMapping {
    /// The database's type code, as reported for columns.
    pub type_code: String,
    /// The host type the code maps to.
    pub host_type: HostType,
}

impl TypeMapping {
    pub fn new(type_code: impl Into<String>, host_type: HostType) -> Self {
        Self {
            type_code: type_code.into(),
            host_type,
        }
    }

    pub fn is_value_type(&self) -> bool {
        self.host_type.is_value_type()
    }
}

/// Lookup table from database type codes to host types.
///
/// Loaded once per connection and only read afterwards. Inserting a type
/// code that is already present replaces the earlier entry.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    mappings: HashMap<String, TypeMapping>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mapping, returning the entry it replaced, if any.
    pub fn insert(&mut self, mapping: TypeMapping) -> Option<TypeMapping> {
        self.mappings.insert(mapping.type_code.clone(), mapping)
    }

    /// Look up a type code by exact match.
    pub fn get(&self, type_code: &str) -> Option<&TypeMapping> {
        self.mappings.get(type_code)
    }

    pub fn contains(&self, type_code: &str) -> bool {
        self.mappings.contains_key(type_code)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl FromIterator<TypeMapping> for TypeCatalog {
    fn from_iter<I: IntoIterator<Item = TypeMapping>>(iter: I) -> Self {
        let mut catalog = TypeCatalog::new();
        for mapping in iter {
            catalog.insert(mapping);
        }
        catalog
    }
}
