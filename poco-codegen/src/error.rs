use std::path::PathBuf;

use thiserror::Error;

/// Result type for code generation.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no type mapping for '{type_code}' (column '{table}.{column}')")]
    UnmappedType {
        table: String,
        column: String,
        type_code: String,
    },

    #[error("table name '{table}' cannot be used as a file name: {reason}")]
    InvalidTableName { table: String, reason: &'static str },

    #[error("failed to write '{path}'")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Filesystem {
            path: path.into(),
            source,
        }
    }
}
