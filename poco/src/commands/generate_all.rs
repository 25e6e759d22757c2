use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Result, bail};

use super::{UnwrapOrExit, load_config};
use crate::{
    ops::{self, generate_all::GenerateAllOptions},
    reports::TerminalOutput,
};

#[derive(Args)]
pub struct GenerateAllCommand {
    /// Parent directory; each connection is written to a subdirectory named after it
    pub output: PathBuf,

    /// Prefix for each connection's namespace (`<prefix>.<connection>`)
    pub namespace_prefix: Option<String>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateAllCommand {
    pub fn run(&self, config_path: &Path) -> Result<()> {
        let config = load_config(config_path);
        config.require_connections().unwrap_or_exit();

        let report = ops::generate_all(
            &config,
            GenerateAllOptions {
                output_dir: &self.output,
                namespace_prefix: self.namespace_prefix.as_deref(),
                dry_run: self.dry_run,
            },
            &mut TerminalOutput::new(),
        );

        let failed = report.failed();
        if !failed.is_empty() {
            bail!(
                "{} of {} connections failed: {}",
                failed.len(),
                report.outcomes.len(),
                failed.join(", ")
            );
        }
        Ok(())
    }
}
