use std::path::{Path, PathBuf};

/// File extension of generated source files, without the dot.
pub const SOURCE_EXTENSION: &str = "cs";

/// A rendered source file for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    /// File name, `<table>.cs`.
    pub file_name: String,
    /// Full file content.
    pub text: String,
}

impl GeneratedDocument {
    /// Create the document for a table, deriving the file name from it.
    pub fn for_table(table_name: &str, text: impl Into<String>) -> Self {
        Self {
            file_name: format!("{}.{}", table_name, SOURCE_EXTENSION),
            text: text.into(),
        }
    }

    /// Path of this document inside `dir`.
    pub fn path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.file_name)
    }

    /// Write the document into `dir` as UTF-8, replacing any existing file.
    pub fn write(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let path = self.path(dir);
        std::fs::write(&path, &self.text)?;
        Ok(path)
    }
}
