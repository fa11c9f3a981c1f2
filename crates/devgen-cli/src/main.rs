//! devgen CLI
//!
//! Scaffolds empty DDL migration files and template-generated request models.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::Cli;

/// Build the subscriber writing to `writer`.
fn build_subscriber<W>(
    verbose: bool,
    ansi: bool,
    writer: W,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "devgen={0},devgen_core={0},devgen_codegen={0}",
            default_level
        )
        .into()
    });

    tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(ansi),
    )
}

/// Initialize tracing.
///
/// Logs always go to stderr; stdout carries confirmations or generated text.
/// ANSI is disabled when `stdout_mode` is true.
fn init_tracing(verbose: bool, stdout_mode: bool) {
    build_subscriber(verbose, !stdout_mode, std::io::stderr).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.writes_to_stdout());

    cli.execute()
}
