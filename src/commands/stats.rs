// This file contains the logic for the `bibtool-setup stats` command.
// It validates the input files, builds the statistics and writes the Markdown
// report to stdout or to a file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::libs::bibtex::{analyze_files, report::format_markdown};
use crate::log_debug;

/// Confirmation printed to stderr after the report is saved.
fn report_written_line(path: &Path) -> String {
    format!("Report written to {}", path.display())
}

/// Main entry point for the `stats` command.
///
/// # Arguments
/// * `files`: BibTeX files to analyze. Every one must exist.
/// * `output`: Where to write the report; stdout when `None`.
pub fn run(files: &[PathBuf], output: Option<&Path>) -> Result<()> {
    log_debug!("Entered stats::run() with {} file(s).", files.len());

    for file in files {
        if !file.exists() {
            bail!("File '{}' not found.", file.display());
        }
    }

    let stats = analyze_files(files).context("Failed to read BibTeX input")?;
    let markdown = format_markdown(&stats, files);

    match output {
        Some(path) => {
            fs::write(path, &markdown)
                .with_context(|| format!("Failed to write report to '{}'", path.display()))?;
            eprintln!("{}", report_written_line(path));
        }
        None => println!("{markdown}"),
    }
    Ok(())
}
