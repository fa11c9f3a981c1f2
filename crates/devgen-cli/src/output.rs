//! Terminal output formatting.

use colored::Colorize;
use std::path::Path;

/// Print the confirmation line for a created artifact.
pub fn print_created(kind: &str, path: &Path) {
    println!("{}", created_line(kind, path));
}

fn created_line(kind: &str, path: &Path) -> String {
    format!(
        "{} Created {}: {}",
        "✓".green().bold(),
        kind,
        path.display().to_string().cyan()
    )
}
