//! C# class rendering.

use pocogen_core::GeneratedDocument;

use crate::{builder::CodeBuilder, model::TableModel};

/// Renders one table as a C# class inside a namespace.
///
/// Names are written as given. Output is LF-terminated and identical for
/// identical input.
#[derive(Debug, Clone)]
pub struct TableRenderer {
    namespace: String,
}

impl TableRenderer {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn render(&self, table: &TableModel) -> GeneratedDocument {
        let mut builder = CodeBuilder::csharp();

        builder.push_line("using System;").push_blank();
        builder.push_braced(&format!("namespace {}", self.namespace), |b| {
            b.push_blank();
            b.push_braced(&format!("public class {}", table.table_name), |b| {
                b.push_blank();
                for column in &table.columns {
                    b.push_line(&format!(
                        "public {} {} {{ get; set; }}",
                        column.type_name, column.name
                    ))
                    .push_blank();
                }
            });
        });

        GeneratedDocument::for_table(&table.table_name, builder.build())
    }
}
