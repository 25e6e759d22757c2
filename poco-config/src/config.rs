use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    ConnectionConfig, DEFAULT_CONFIG_FILE, Error, Result, SourceContext, validate::ParseContext,
};

/// Root of the configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Named connections, in file order
    #[serde(default)]
    pub connections: IndexMap<String, ConnectionConfig>,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, DEFAULT_CONFIG_FILE)
    }
}

impl Config {
    /// Parse configuration from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }

    /// Iterate over the connections in file order.
    pub fn connections(&self) -> impl Iterator<Item = &ConnectionConfig> {
        self.connections.values()
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Fail if no connection is configured.
    pub fn require_connections(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Box::new(Error::NoConnections));
        }
        Ok(())
    }

    /// Look up a connection by name.
    pub fn connection(&self, name: &str) -> Result<&ConnectionConfig> {
        self.require_connections()?;

        self.connections.get(name).ok_or_else(|| {
            Box::new(Error::UnknownConnection {
                name: name.to_string(),
                available: self.available(),
            })
        })
    }

    /// Pick the named connection, or the only one if no name is given.
    pub fn select(&self, name: Option<&str>) -> Result<&ConnectionConfig> {
        if let Some(name) = name {
            return self.connection(name);
        }

        let mut all = self.connections();
        match (all.next(), all.next()) {
            (None, _) => Err(Box::new(Error::NoConnections)),
            (Some(only), None) => Ok(only),
            (Some(_), Some(_)) => Err(Box::new(Error::AmbiguousConnection {
                available: self.available(),
            })),
        }
    }

    fn available(&self) -> String {
        self.connections
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Parse a configuration from content with the given filename for error reporting.
fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let source_ctx = SourceContext::new(content, filename);
    let mut config: Config = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;

    for (name, conn) in config.connections.iter_mut() {
        conn.name = name.clone();
    }

    let ctx = ParseContext::new(&source_ctx);
    for conn in config.connections() {
        ctx.validate_connection(conn)?;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Provider;

    fn parse(content: &str) -> Result<Config> {
        Config::from_str(content)
    }

    #[test]
    fn test_parse_connections_in_file_order() {
        let config = parse(
            r#"
            [connections.warehouse]
            provider = "postgres"
            connection_string = "host=localhost dbname=warehouse"
            schema = "sales"

            [connections.cache]
            provider = "sqlite"
            env = "CACHE_DB"
            "#,
        )
        .unwrap();

        let names: Vec<&str> = config.connections().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["warehouse", "cache"]);

        let warehouse = config.connection("warehouse").unwrap();
        assert_eq!(warehouse.provider, Provider::Postgres);
        assert_eq!(warehouse.schema(), "sales");

        let cache = config.connection("cache").unwrap();
        assert_eq!(cache.provider, Provider::Sqlite);
        assert_eq!(cache.env.as_deref(), Some("CACHE_DB"));
    }

    #[test]
    fn test_empty_config() {
        let config = parse("").unwrap();
        assert!(config.is_empty());
        assert!(matches!(*config.select(None).unwrap_err(), Error::NoConnections));
        assert!(matches!(*config.connection("main").unwrap_err(), Error::NoConnections));
        assert!(config.require_connections().is_err());
    }

    #[test]
    fn test_unknown_provider_is_parse_error() {
        let err = parse(
            r#"
            [connections.main]
            provider = "oracle"
            connection_string = "x"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = parse(
            r#"
            [connections.main]
            provider = "sqlite"
            path = "app.db"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_missing_connection_source() {
        let err = parse(
            r#"
            [connections.main]
            provider = "sqlite"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { ref message, .. } if message.contains("either")));
    }

    #[test]
    fn test_both_connection_sources() {
        let err = parse(
            r#"
            [connections.main]
            provider = "sqlite"
            connection_string = "app.db"
            env = "APP_DB"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { ref message, .. } if message.contains("both")));
    }

    #[test]
    fn test_schema_requires_postgres() {
        let err = parse(
            r#"
            [connections.main]
            provider = "sqlite"
            connection_string = "app.db"
            schema = "main"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { span: Some(_), .. }));
    }

    #[test]
    fn test_invalid_connection_name() {
        let err = parse(
            r#"
            [connections."../escape"]
            provider = "sqlite"
            connection_string = "app.db"
            "#,
        )
        .unwrap_err();
        assert!(
            matches!(*err, Error::InvalidConnectionName { ref name, .. } if name == "../escape")
        );
    }

    #[test]
    fn test_select_single_connection_by_default() {
        let config = parse(
            r#"
            [connections.only]
            provider = "sqlite"
            connection_string = "app.db"
            "#,
        )
        .unwrap();
        assert_eq!(config.select(None).unwrap().name, "only");
    }

    #[test]
    fn test_select_requires_name_when_ambiguous() {
        let config = parse(
            r#"
            [connections.a]
            provider = "sqlite"
            connection_string = "a.db"

            [connections.b]
            provider = "sqlite"
            connection_string = "b.db"
            "#,
        )
        .unwrap();

        let err = config.select(None).unwrap_err();
        assert!(matches!(*err, Error::AmbiguousConnection { ref available } if available == "a, b"));
        assert_eq!(config.select(Some("b")).unwrap().name, "b");
    }

    #[test]
    fn test_unknown_connection() {
        let config = parse(
            r#"
            [connections.main]
            provider = "sqlite"
            connection_string = "app.db"
            "#,
        )
        .unwrap();

        let err = config.connection("missing").unwrap_err();
        assert!(matches!(
            *err,
            Error::UnknownConnection { ref name, ref available } if name == "missing" && available == "main"
        ));
    }
}
