//! Generate command report data structures.
//!
//! Per-file lines are rendered while generating, through [`render_progress`]
//! and [`render_preview_document`]. The reports only carry what is left to
//! say once a connection is done.

use std::path::PathBuf;

use pocogen_codegen::{IdentifierWarning, Progress};
use pocogen_core::GeneratedDocument;

use super::output::{Output, Report};

/// Render one generation step.
pub fn render_progress(out: &mut dyn Output, progress: Progress<'_>) {
    match progress {
        Progress::Warning(warning) => render_warning(out, warning),
        Progress::OutputDir(dir) => {
            out.preformatted(&format!("Output Path : {}", dir.display()));
            out.newline();
        }
        Progress::DirectoryCreated(dir) => {
            out.preformatted(&format!("{} is created.", dir.display()));
            out.newline();
        }
        Progress::FileWritten(file) => out.preformatted(&format!("{} is created.", file)),
    }
}

/// Render a name that will not compile as a C# identifier.
pub fn render_warning(out: &mut dyn Output, warning: &IdentifierWarning) {
    out.diagnostic(&miette::Report::new(warning.clone()));
}

/// Render a document that a dry run would write.
pub fn render_preview_document(out: &mut dyn Output, document: &GeneratedDocument) {
    out.divider(&document.file_name);
    out.preformatted(&document.text);
}

/// Report data from generating one connection.
#[derive(Debug)]
pub struct GenerateReport {
    /// Connection name.
    pub connection: String,

    /// Output directory.
    pub output_dir: PathBuf,

    /// Namespace the classes were generated in.
    pub namespace: String,

    /// Files written, or that a dry run would write, in table order.
    pub files: Vec<String>,

    /// Nothing was written.
    pub dry_run: bool,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.dry_run {
            out.divider("Summary");
            out.preformatted(&format!(
                "{} files would be generated from '{}' in {} (namespace {})",
                self.files.len(),
                self.connection,
                self.output_dir.display(),
                self.namespace
            ));
        }
    }
}

/// Outcome for one connection of a multi-connection run.
#[derive(Debug)]
pub struct ConnectionOutcome {
    pub connection: String,
    pub result: Result<GenerateReport, eyre::Report>,
}

/// Outcomes of generating every configured connection.
#[derive(Debug, Default)]
pub struct GenerateAllReport {
    /// One outcome per connection, in configuration order.
    pub outcomes: Vec<ConnectionOutcome>,
}

impl GenerateAllReport {
    /// Names of the connections that failed, in configuration order.
    pub fn failed(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.result.is_err())
            .map(|o| o.connection.as_str())
            .collect()
    }
}
