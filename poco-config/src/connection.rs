//! Named connection definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Schema read on PostgreSQL when a connection does not name one.
pub const DEFAULT_POSTGRES_SCHEMA: &str = "public";

/// Supported database providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// PostgreSQL
    #[serde(alias = "postgresql", alias = "pg")]
    Postgres,
    /// SQLite (file path as connection string)
    #[serde(alias = "sqlite3")]
    Sqlite,
}

impl Provider {
    /// Returns the provider identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Postgres => "postgres",
            Provider::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named connection definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionConfig {
    /// The table key in the configuration file, filled in after parsing.
    #[serde(skip)]
    pub name: String,

    /// Database provider
    pub provider: Provider,

    /// Connection string passed to the driver (a file path for SQLite)
    pub connection_string: Option<String>,

    /// Environment variable holding the connection string (exclusive with `connection_string`)
    pub env: Option<String>,

    /// Schema to read (PostgreSQL only, default: public)
    pub schema: Option<String>,
}

impl ConnectionConfig {
    /// Resolve the connection string, reading the environment if needed.
    pub fn connection_string(&self) -> Result<String> {
        self.connection_string_with(|var| std::env::var(var).ok())
    }

    /// Resolve the connection string with a custom environment lookup.
    pub fn connection_string_with<F>(&self, lookup: F) -> Result<String>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        if let Some(value) = &self.connection_string {
            return Ok(value.clone());
        }

        let var = self.env.as_deref().unwrap_or_default();
        lookup(var).ok_or_else(|| {
            Box::new(Error::MissingEnv {
                connection: self.name.clone(),
                var: var.to_string(),
            })
        })
    }

    /// The PostgreSQL schema to read.
    pub fn schema(&self) -> &str {
        self.schema.as_deref().unwrap_or(DEFAULT_POSTGRES_SCHEMA)
    }

    /// Human-readable description of where the connection string comes from.
    ///
    /// Never includes the connection string itself, which may hold credentials.
    pub fn source_description(&self) -> String {
        match (&self.connection_string, &self.env) {
            (Some(_), _) => "connection_string".to_string(),
            (None, Some(var)) => format!("${}", var),
            (None, None) => "none".to_string(),
        }
    }
}
