//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use devgen_core::Config;

pub mod create;

/// Environment variable naming the templates directory.
pub const TEMPLATES_DIR_ENV: &str = "DEVGEN_TEMPLATES_DIR";

/// Scaffold DDL migration files and request models
#[derive(Parser)]
#[command(name = "devgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding <name>.<ext>.tera templates
    #[arg(long, global = true, env = TEMPLATES_DIR_ENV)]
    pub templates_dir: Option<PathBuf>,

    /// Path to a config file (defaults to ./devgen.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create project artifacts
    #[command(subcommand)]
    Create(create::CreateCommands),
}

impl Cli {
    /// Whether the command writes generated text to stdout.
    pub fn writes_to_stdout(&self) -> bool {
        matches!(
            &self.command,
            Commands::Create(create::CreateCommands::RequestModel(args)) if args.stdout
        )
    }

    pub fn execute(self) -> Result<()> {
        let work_dir = std::env::current_dir()?;
        let config = Config::resolve(self.config.as_deref(), &work_dir)?;
        let templates_dir = self.templates_dir.or_else(|| config.templates.dir.clone());

        match self.command {
            Commands::Create(cmd) => create::execute(cmd, &config, templates_dir.as_deref()),
        }
    }
}
