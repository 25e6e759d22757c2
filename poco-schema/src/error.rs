use pocogen_config::Provider;
use thiserror::Error;

/// Result type for schema reading.
pub type Result<T> = std::result::Result<T, Error>;

/// An error reported by one of the database drivers.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Postgres(#[from] postgres::Error),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] Box<pocogen_config::Error>),

    #[error("failed to connect to '{connection}' ({provider})")]
    Connection {
        connection: String,
        provider: Provider,
        #[source]
        source: DriverError,
    },

    #[error("failed to read the {catalog} catalog")]
    Query {
        catalog: &'static str,
        #[source]
        source: DriverError,
    },

    #[error("unexpected nullability indicator '{value}' for column '{table}.{column}'")]
    UnexpectedNullability {
        table: String,
        column: String,
        value: String,
    },
}

impl Error {
    pub(crate) fn connection(
        connection: &str,
        provider: Provider,
        source: impl Into<DriverError>,
    ) -> Self {
        Error::Connection {
            connection: connection.to_string(),
            provider,
            source: source.into(),
        }
    }

    pub(crate) fn columns(source: impl Into<DriverError>) -> Self {
        Error::Query {
            catalog: "column",
            source: source.into(),
        }
    }

    pub(crate) fn types(source: impl Into<DriverError>) -> Self {
        Error::Query {
            catalog: "type",
            source: source.into(),
        }
    }
}
