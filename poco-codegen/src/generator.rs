//! Schema snapshot to files on disk.

use std::path::{Path, PathBuf};

use pocogen_core::{GeneratedDocument, SchemaSnapshot};
use tracing::debug;

use crate::{
    Result,
    diagnostics::{IdentifierWarning, check_identifiers},
    model::build_models,
    output::OutputWriter,
    render::TableRenderer,
};

/// Documents rendered for a snapshot, not yet written.
#[derive(Debug, Clone, Default)]
pub struct Preview {
    /// One document per table, in table order.
    pub documents: Vec<GeneratedDocument>,
    pub warnings: Vec<IdentifierWarning>,
}

/// Result of code generation
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub output_dir: PathBuf,
    /// The output directory did not exist and was created
    pub created_dir: bool,
    /// Entries removed from a pre-existing output directory
    pub removed: usize,
    /// File names written, in table order
    pub written: Vec<String>,
    pub warnings: Vec<IdentifierWarning>,
}

/// A step of [`Generator::generate_with_progress`], reported as it happens.
#[derive(Debug, Clone, Copy)]
pub enum Progress<'p> {
    /// A name that will not compile as a C# identifier.
    Warning(&'p IdentifierWarning),
    /// Every table rendered; the output directory is about to be replaced.
    OutputDir(&'p Path),
    /// The output directory did not exist and was created.
    DirectoryCreated(&'p Path),
    /// A document was written, by file name.
    FileWritten(&'p str),
}

/// Generates one C# class file per table of a schema snapshot.
pub struct Generator<'a> {
    renderer: TableRenderer,
    snapshot: &'a SchemaSnapshot,
}

impl<'a> Generator<'a> {
    pub fn new(namespace: impl Into<String>, snapshot: &'a SchemaSnapshot) -> Self {
        Self {
            renderer: TableRenderer::new(namespace),
            snapshot,
        }
    }

    /// Render every table without touching the filesystem.
    ///
    /// Fails if any column's type has no mapping.
    pub fn preview(&self) -> Result<Preview> {
        let tables = build_models(self.snapshot)?;
        let warnings = check_identifiers(self.renderer.namespace(), &tables);
        let documents = tables.iter().map(|t| self.renderer.render(t)).collect();

        Ok(Preview {
            documents,
            warnings,
        })
    }

    /// Render every table, then replace the contents of `output_dir` with the
    /// rendered documents.
    ///
    /// Nothing is touched on disk unless every table renders.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_with_progress(output_dir, |_| {})
    }

    /// Like [`generate`](Self::generate), calling `progress` after each step.
    ///
    /// Steps already reported stay reported if a later write fails.
    pub fn generate_with_progress(
        &self,
        output_dir: &Path,
        mut progress: impl FnMut(Progress<'_>),
    ) -> Result<GenerateResult> {
        let preview = self.preview()?;
        for warning in &preview.warnings {
            progress(Progress::Warning(warning));
        }

        let writer = OutputWriter::new(output_dir);
        progress(Progress::OutputDir(output_dir));

        let created_dir = writer.ensure()?;
        if created_dir {
            progress(Progress::DirectoryCreated(output_dir));
        }
        let removed = writer.clear()?;

        let mut written = Vec::with_capacity(preview.documents.len());
        for document in &preview.documents {
            writer.write(document)?;
            progress(Progress::FileWritten(&document.file_name));
            written.push(document.file_name.clone());
        }

        debug!(
            dir = %output_dir.display(),
            files = written.len(),
            removed,
            "generation complete"
        );

        Ok(GenerateResult {
            output_dir: output_dir.to_path_buf(),
            created_dir,
            removed,
            written,
            warnings: preview.warnings,
        })
    }
}
