//! Writing generated documents to an output directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use pocogen_core::GeneratedDocument;
use tracing::debug;

use crate::{Error, Result};

/// Owns one output directory for the length of a run.
///
/// Call order is `ensure`, `clear`, then `write` for each document.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    dir: PathBuf,
}

impl OutputWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the directory if it is missing. Returns `true` if it was created.
    pub fn ensure(&self) -> Result<bool> {
        if self.dir.is_dir() {
            return Ok(false);
        }

        fs::create_dir_all(&self.dir).map_err(|e| Error::filesystem(&self.dir, e))?;
        debug!(dir = %self.dir.display(), "created output directory");
        Ok(true)
    }

    /// Remove every file and subdirectory in the directory.
    ///
    /// Returns the number of entries removed.
    pub fn clear(&self) -> Result<usize> {
        let entries = fs::read_dir(&self.dir).map_err(|e| Error::filesystem(&self.dir, e))?;

        let mut removed = 0;
        for entry in entries {
            let entry = entry.map_err(|e| Error::filesystem(&self.dir, e))?;
            let path = entry.path();
            let file_type = entry
                .file_type()
                .map_err(|e| Error::filesystem(&path, e))?;

            let result = if file_type.is_dir() {
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            };
            result.map_err(|e| Error::filesystem(&path, e))?;

            debug!(path = %path.display(), "removed");
            removed += 1;
        }

        Ok(removed)
    }

    /// Write a document, replacing any file of the same name.
    pub fn write(&self, document: &GeneratedDocument) -> Result<PathBuf> {
        let path = document
            .write(&self.dir)
            .map_err(|e| Error::filesystem(document.path(&self.dir), e))?;
        debug!(path = %path.display(), bytes = document.text.len(), "wrote document");
        Ok(path)
    }
}
