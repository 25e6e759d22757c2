//! Warnings for names that will not compile as C# identifiers.
//!
//! Generation never rewrites names, so these are reported and the output is
//! written unchanged.

use std::fmt;

use miette::Diagnostic;
use pocogen_core::validate_identifier;
use thiserror::Error;

use crate::model::TableModel;

/// What kind of name a warning refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Namespace,
    Class,
    Property,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IdentifierKind::Namespace => "namespace",
            IdentifierKind::Class => "class",
            IdentifierKind::Property => "property",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind} '{name}' is not a valid C# identifier: {reason}")]
#[diagnostic(
    code(poco::invalid_identifier),
    severity(Warning),
    help("the name is written unchanged, so the generated file will not compile as-is")
)]
pub struct IdentifierWarning {
    pub kind: IdentifierKind,
    /// The offending name; properties are qualified with their table.
    pub name: String,
    pub reason: &'static str,
}

/// Check the namespace and every table and column name.
pub fn check_identifiers(namespace: &str, tables: &[TableModel]) -> Vec<IdentifierWarning> {
    let mut warnings = Vec::new();

    if let Some(reason) = namespace.split('.').find_map(validate_identifier) {
        warnings.push(IdentifierWarning {
            kind: IdentifierKind::Namespace,
            name: namespace.to_string(),
            reason,
        });
    }

    for table in tables {
        if let Some(reason) = validate_identifier(&table.table_name) {
            warnings.push(IdentifierWarning {
                kind: IdentifierKind::Class,
                name: table.table_name.clone(),
                reason,
            });
        }

        for column in &table.columns {
            if let Some(reason) = validate_identifier(&column.name) {
                warnings.push(IdentifierWarning {
                    kind: IdentifierKind::Property,
                    name: format!("{}.{}", table.table_name, column.name),
                    reason,
                });
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResolvedColumn;

    fn table(name: &str, columns: &[&str]) -> TableModel {
        TableModel {
            table_name: name.to_string(),
            columns: columns
                .iter()
                .map(|c| ResolvedColumn {
                    name: c.to_string(),
                    type_name: "Int32".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_valid_names_produce_no_warnings() {
        let tables = [table("Users", &["Id", "first_name", "Name2"])];
        assert!(check_identifiers("MyApp.Data", &tables).is_empty());
    }

    #[test]
    fn test_namespace_segments_checked() {
        let warnings = check_identifiers("MyApp.class", &[]);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, IdentifierKind::Namespace);

        assert_eq!(check_identifiers("MyApp..Data", &[]).len(), 1);
    }

    #[test]
    fn test_table_and_column_names_checked() {
        let tables = [table("order details", &["Id", "2nd", "event"])];
        let warnings = check_identifiers("App", &tables);

        let found: Vec<(IdentifierKind, &str)> = warnings
            .iter()
            .map(|w| (w.kind, w.name.as_str()))
            .collect();
        assert_eq!(
            found,
            vec![
                (IdentifierKind::Class, "order details"),
                (IdentifierKind::Property, "order details.2nd"),
                (IdentifierKind::Property, "order details.event"),
            ]
        );
    }

    #[test]
    fn test_warning_message() {
        let warnings = check_identifiers("App", &[table("Users", &["class"])]);
        assert_eq!(
            warnings[0].to_string(),
            "property 'Users.class' is not a valid C# identifier: name is a C# reserved keyword"
        );
    }
}
