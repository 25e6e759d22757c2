use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;

use super::{UnwrapOrExit, load_config};
use crate::{
    ops::{self, generate::GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Directory to write the generated classes to (its contents are replaced)
    pub output: PathBuf,

    /// Connection to read (defaults to the only configured connection)
    pub connection: Option<String>,

    /// Namespace of the generated classes (defaults to the connection name)
    pub namespace: Option<String>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self, config_path: &Path) -> Result<()> {
        let config = load_config(config_path);
        let conn = config.select(self.connection.as_deref()).unwrap_or_exit();
        let namespace = self.namespace.as_deref().unwrap_or(&conn.name);

        let mut out = TerminalOutput::new();
        let report = ops::generate(
            conn,
            GenerateOptions {
                output_dir: &self.output,
                namespace,
                dry_run: self.dry_run,
            },
            &mut out,
        )?;

        report.render(&mut out);
        Ok(())
    }
}
