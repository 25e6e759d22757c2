mod completions;
mod generate;
mod generate_all;
mod list;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use generate_all::GenerateAllCommand;
use list::ListCommand;
use pocogen_config::{Config, ConfigFile, DEFAULT_CONFIG_FILE};

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for pocogen_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load the configuration file, exiting on any error.
pub(crate) fn load_config(path: &Path) -> Config {
    ConfigFile::open(path).unwrap_or_exit().into_config()
}

#[derive(Parser)]
#[command(name = "poco")]
#[command(version)]
#[command(about = "Generate C# POCO classes from a database schema")]
pub(crate) struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(&self.config),
            Commands::GenerateAll(cmd) => cmd.run(&self.config),
            Commands::List(cmd) => cmd.run(&self.config),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one class per table for a single connection
    Generate(GenerateCommand),

    /// Generate classes for every configured connection
    GenerateAll(GenerateAllCommand),

    /// List configured connections
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
