//! Empty DDL migration file scaffolding.

pub mod filename;
pub mod model;

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::error::DevgenResult;
use crate::files::{create_new_file, ensure_dir};
use model::DdlOptions;

/// Create an empty file named `filename` inside `output_dir`.
///
/// Returns the created path.
pub fn create_empty_file(output_dir: &Path, filename: &str) -> DevgenResult<PathBuf> {
    ensure_dir(output_dir)?;

    let path = output_dir.join(filename);
    create_new_file(&path)?;

    tracing::info!(path = %path.display(), "created ddl file");
    Ok(path)
}

/// Validate `options`, compose the file name for `date` and create the file.
pub fn create_ddl(options: &DdlOptions, date: NaiveDate) -> DevgenResult<PathBuf> {
    options.validate()?;

    let filename = filename::compose(
        date,
        &options.sort_number,
        &options.ticket_number,
        &options.when,
        &options.explanation,
    );
    tracing::debug!(%filename, dir = %options.output_dir.display(), "composed ddl file name");

    create_empty_file(&options.output_dir, &filename)
}
