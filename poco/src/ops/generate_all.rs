//! Generate-all operation - every configured connection, one after another.

use std::path::{Path, PathBuf};

use pocogen_config::Config;
use tracing::debug;

use super::generate::{GenerateOptions, generate};
use crate::reports::{ConnectionOutcome, GenerateAllReport, Output, Report};

/// Options for the generate-all operation.
pub struct GenerateAllOptions<'a> {
    /// Parent directory; each connection gets a subdirectory named after it.
    pub output_dir: &'a Path,
    /// Prepended to each connection name to form its namespace.
    pub namespace_prefix: Option<&'a str>,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Namespace for a connection's classes.
pub fn connection_namespace(prefix: Option<&str>, connection: &str) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{}.{}", prefix, connection),
        _ => connection.to_string(),
    }
}

/// Output directory for a connection's classes.
pub fn connection_output_dir(output_dir: &Path, connection: &str) -> PathBuf {
    output_dir.join(connection)
}

/// Execute the generate-all operation.
///
/// Connections run in configuration order. Each one is rendered to `out` under
/// its own divider as it runs. A failing connection is recorded in the report
/// and the next one still runs.
pub fn generate_all(
    config: &Config,
    opts: GenerateAllOptions,
    out: &mut dyn Output,
) -> GenerateAllReport {
    let mut report = GenerateAllReport::default();

    for (i, conn) in config.connections().enumerate() {
        if i > 0 {
            out.newline();
        }
        out.divider(&conn.name);

        let output_dir = connection_output_dir(opts.output_dir, &conn.name);
        let namespace = connection_namespace(opts.namespace_prefix, &conn.name);

        let result = generate(
            conn,
            GenerateOptions {
                output_dir: &output_dir,
                namespace: &namespace,
                dry_run: opts.dry_run,
            },
            out,
        );

        match &result {
            Ok(generated) => generated.render(out),
            Err(err) => {
                debug!(connection = %conn.name, "generation failed: {:#}", err);
                out.error(&format!("{:#}", err));
            }
        }

        report.outcomes.push(ConnectionOutcome {
            connection: conn.name.clone(),
            result,
        });
    }

    report
}
