use std::path::{Path, PathBuf};

use crate::{Config, Error, Result};

/// File name looked up when no configuration path is given.
pub const DEFAULT_CONFIG_FILE: &str = "pocogen.toml";

/// A configuration file with its parsed content.
pub struct ConfigFile {
    path: PathBuf,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a configuration file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, config })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consume the file and return the parsed configuration.
    pub fn into_config(self) -> Config {
        self.config
    }
}
