//! List operation - summarize configured connections.

use pocogen_config::{Config, Provider};

use crate::reports::{ConnectionInfo, ListReport};

/// Build the connection listing. Connection strings are never included.
pub fn list(config: &Config) -> ListReport {
    let connections = config
        .connections()
        .map(|conn| ConnectionInfo {
            name: conn.name.clone(),
            provider: conn.provider.to_string(),
            source: conn.source_description(),
            schema: match conn.provider {
                Provider::Postgres => Some(conn.schema().to_string()),
                Provider::Sqlite => None,
            },
        })
        .collect();

    ListReport { connections }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_list_hides_connection_strings() {
        let config = Config::from_str(
            r#"
            [connections.main]
            provider = "postgres"
            connection_string = "host=db password=secret"

            [connections.cache]
            provider = "sqlite"
            env = "CACHE_DB"
            "#,
        )
        .unwrap();

        let report = list(&config);

        assert_eq!(report.connections.len(), 2);
        assert_eq!(report.connections[0].name, "main");
        assert_eq!(report.connections[0].source, "connection_string");
        assert_eq!(report.connections[0].schema.as_deref(), Some("public"));
        assert_eq!(report.connections[1].source, "$CACHE_DB");
        assert!(report.connections[1].schema.is_none());
        assert!(
            report
                .connections
                .iter()
                .all(|c| !c.source.contains("secret"))
        );
    }
}
