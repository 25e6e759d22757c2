//! Generate operation - one connection into one output directory.

use std::path::Path;

use eyre::{Context, Result};
use pocogen_codegen::Generator;
use pocogen_config::ConnectionConfig;
use tracing::info;

use crate::reports::{
    GenerateReport, Output, render_preview_document, render_progress, render_warning,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory that receives one file per table.
    pub output_dir: &'a Path,
    /// Namespace of the generated classes.
    pub namespace: &'a str,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Reads the connection's schema and renders one class per table. The output
/// directory is only touched once every table has rendered. Each directory
/// and file is reported to `out` as soon as it is created.
pub fn generate(
    conn: &ConnectionConfig,
    opts: GenerateOptions,
    out: &mut dyn Output,
) -> Result<GenerateReport> {
    info!(connection = %conn.name, provider = %conn.provider, "reading schema");

    let mut reader = pocogen_schema::connect(conn)
        .wrap_err_with(|| format!("Failed to open connection '{}'", conn.name))?;
    let snapshot = reader
        .read()
        .wrap_err_with(|| format!("Failed to read the schema of '{}'", conn.name))?;

    info!(
        tables = snapshot.table_names().len(),
        columns = snapshot.columns.len(),
        "schema read"
    );

    let generator = Generator::new(opts.namespace, &snapshot);
    let files = if opts.dry_run {
        let preview = generator.preview().wrap_err("Failed to render classes")?;
        for warning in &preview.warnings {
            render_warning(out, warning);
        }
        for document in &preview.documents {
            render_preview_document(out, document);
        }

        preview.documents.into_iter().map(|d| d.file_name).collect()
    } else {
        let generated = generator
            .generate_with_progress(opts.output_dir, |p| render_progress(out, p))
            .wrap_err("Failed to generate classes")?;
        info!(
            files = generated.written.len(),
            removed = generated.removed,
            warnings = generated.warnings.len(),
            "classes written"
        );
        generated.written
    };

    Ok(GenerateReport {
        connection: conn.name.clone(),
        output_dir: opts.output_dir.to_path_buf(),
        namespace: opts.namespace.to_string(),
        files,
        dry_run: opts.dry_run,
    })
}
