// This module manages the one shell-profile edit the installer makes: teaching
// login shells where a freshly bootstrapped Homebrew lives. Lines are only ever
// appended; existing content is read solely to avoid adding the same line twice.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::log_debug;

/// Header written above every block this tool appends.
pub const PROFILE_HEADER: &str = "# Added by bibtool-setup";

/// The login profile zsh reads on macOS (`~/.zprofile`).
pub fn zprofile_path(home: &Path) -> PathBuf {
    home.join(".zprofile")
}

/// Reads the non-empty, trimmed lines of a profile. A missing or unreadable file yields no lines.
pub fn read_profile_lines(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(contents) => contents
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Appends the `lines` that the profile does not already contain.
///
/// The file is created if needed. Nothing is written when every line is already present.
///
/// # Arguments
/// * `path`: The profile file to append to.
/// * `lines`: The lines to ensure are present.
///
/// # Returns
/// * `io::Result<()>`: An `Err` if the file cannot be opened or written.
pub fn append_missing_lines(path: &Path, lines: &[String]) -> io::Result<()> {
    let existing = read_profile_lines(path);
    let missing: Vec<&String> = lines
        .iter()
        .filter(|line| !existing.iter().any(|present| present == line.trim()))
        .collect();

    if missing.is_empty() {
        log_debug!(
            "[Profile] {} already contains the requested lines",
            path.display()
        );
        return Ok(());
    }

    log_debug!(
        "[Profile] Appending {} line(s) to {}",
        missing.len().to_string().bold(),
        path.display().to_string().yellow()
    );

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "\n{PROFILE_HEADER}")?;
    for line in missing {
        writeln!(file, "{line}")?;
    }
    Ok(())
}
