//! `create` command group.

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

use devgen_codegen::{Destination, RequestModelOptions, TemplateStore};
use devgen_core::ddl::model::DdlOptions;
use devgen_core::Config;

use crate::output;

#[derive(Subcommand)]
pub enum CreateCommands {
    /// Create an empty DDL file following the migration naming rules
    Ddl(DdlArgs),

    /// Generate a request model from a template
    #[command(name = "requestModel")]
    RequestModel(RequestModelArgs),
}

#[derive(Args)]
pub struct DdlArgs {
    /// Order among SQL files with application constraints; lower numbers run first [default: 0000]
    #[arg(short = 's', long = "sort_number")]
    pub sort_number: Option<String>,

    /// Issue tracker ticket number
    #[arg(short = 't', long = "ticket_number")]
    pub ticket_number: String,

    /// When the SQL is to be applied
    #[arg(short = 'w', long = "when")]
    pub when: String,

    /// Short description: the SQL operation and table name, lowercase letters,
    /// digits and underscores only (e.g. create_users)
    #[arg(short = 'e', long = "explanation")]
    pub explanation: String,

    /// Directory to create the file in [default: .]
    #[arg(short = 'f', long = "file_path")]
    pub file_path: Option<PathBuf>,
}

#[derive(Args)]
pub struct RequestModelArgs {
    /// Class name of the request model
    #[arg(short = 'n', long)]
    pub name: String,

    /// Mode passed to the template [default: default]
    #[arg(short = 'm', long)]
    pub mode: Option<String>,

    /// Namespace of the generated class
    #[arg(short = 'a', long)]
    pub namespace: String,

    /// Also generate a companion factory
    #[arg(short = 'f', long = "with-factory")]
    pub with_factory: bool,

    /// Print to standard output instead of writing files
    #[arg(long)]
    pub stdout: bool,

    /// Directory to write files to [default: .]
    #[arg(short = 'o', long = "out-dir", conflicts_with = "stdout")]
    pub out_dir: Option<PathBuf>,
}

impl DdlArgs {
    /// Flags first, then config, then built-in defaults.
    pub fn into_options(self, config: &Config) -> DdlOptions {
        DdlOptions::new(
            self.sort_number
                .unwrap_or_else(|| config.ddl_sort_number().to_string()),
            self.ticket_number,
            self.when,
            self.explanation,
            self.file_path.unwrap_or_else(|| config.ddl_output_dir()),
        )
    }
}

impl RequestModelArgs {
    /// Flags first, then config, then built-in defaults.
    pub fn into_options(self, config: &Config) -> RequestModelOptions {
        let destination = if self.stdout {
            Destination::Stdout
        } else {
            Destination::File {
                dir: self
                    .out_dir
                    .unwrap_or_else(|| config.request_model_output_dir()),
            }
        };

        RequestModelOptions {
            name: self.name,
            namespace: self.namespace,
            mode: self
                .mode
                .unwrap_or_else(|| config.request_model_mode().to_string()),
            with_factory: self.with_factory,
            destination,
        }
    }
}

pub fn execute(cmd: CreateCommands, config: &Config, templates_dir: Option<&Path>) -> Result<()> {
    match cmd {
        CreateCommands::Ddl(args) => cmd_ddl(args.into_options(config)),
        CreateCommands::RequestModel(args) => {
            cmd_request_model(args.into_options(config), templates_dir)
        }
    }
}

fn cmd_ddl(options: DdlOptions) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let path = devgen_core::ddl::create_ddl(&options, today)?;

    output::print_created("DDL file", &path);
    Ok(())
}

fn cmd_request_model(options: RequestModelOptions, templates_dir: Option<&Path>) -> Result<()> {
    let store = TemplateStore::locate(templates_dir);
    tracing::debug!(source = ?store.source(), "template source");

    let written = devgen_codegen::generate_request_model(&store, &options)?;

    for path in &written {
        output::print_created("file", path);
    }
    Ok(())
}
