//! # System environment
//!
//! Everything the installer needs to know about, or do to, the host goes
//! through [`SystemEnvironment`]. The dispatcher and the installer strategies
//! only ever talk to this trait, so they can be exercised against an in-memory
//! host in tests while [`RealSystem`] talks to the actual OS.

use std::cell::RefCell;
use std::env;
use std::ffi::OsString;
use std::fmt;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use colored::Colorize;
use dialoguer::Confirm;

use crate::libs::errors::InstallError;
use crate::libs::shell_profile;
use crate::{log_debug, log_error, log_warn};

/// An external command, kept as data so it can be logged, compared in tests and executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }

    /// Wraps the command in `sudo`.
    pub fn with_sudo(self) -> Self {
        let mut args = Vec::with_capacity(self.args.len() + 1);
        args.push(self.program);
        args.extend(self.args);
        Self {
            program: "sudo".to_string(),
            args,
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// The host as seen by the installer.
pub trait SystemEnvironment {
    /// Kernel identification string, as printed by `uname -s`.
    fn kernel_name(&self) -> String;

    /// Machine hardware name, as printed by `uname -m`.
    fn machine_arch(&self) -> String;

    /// Contents of a text file, or `None` if it cannot be read.
    fn read_file(&self, path: &Path) -> Option<String>;

    fn path_exists(&self, path: &Path) -> bool;

    /// Resolves an executable on the search path (including directories added during this run).
    fn find_executable(&self, name: &str) -> Option<PathBuf>;

    /// Makes `dir` part of the search path for the rest of the run.
    fn add_to_search_path(&self, dir: &Path);

    /// Runs a command quietly and returns its trimmed stdout if it exited successfully.
    fn capture(&self, command: &CommandSpec) -> Option<String>;

    /// Runs a command with inherited stdio. Non-zero exit is an error.
    fn run(&self, command: &CommandSpec) -> Result<(), InstallError>;

    /// `true` when running as root / with an effective UID of 0.
    fn is_elevated(&self) -> bool;

    /// Asks the user a yes/no question. Defaults to "no".
    fn confirm(&self, prompt: &str) -> bool;

    /// Downloads `url` into `dest`.
    fn download(&self, url: &str, dest: &Path) -> io::Result<()>;

    fn home_dir(&self) -> Option<PathBuf>;

    /// Appends `lines` to a shell profile, skipping lines it already contains.
    fn append_to_profile(&self, path: &Path, lines: &[String]) -> io::Result<()>;
}

/// The actual machine.
#[derive(Debug, Default)]
pub struct RealSystem {
    /// Directories added to the search path after start-up (e.g. a freshly bootstrapped Homebrew).
    extra_paths: RefCell<Vec<PathBuf>>,
}

impl RealSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// `PATH` with the directories added during this run in front.
    fn search_path(&self) -> Option<OsString> {
        let mut dirs: Vec<PathBuf> = self.extra_paths.borrow().clone();
        if let Some(path) = env::var_os("PATH") {
            dirs.extend(env::split_paths(&path));
        }
        env::join_paths(dirs).ok()
    }
}

impl SystemEnvironment for RealSystem {
    fn kernel_name(&self) -> String {
        if let Some(kernel) = self.capture(&CommandSpec::new("uname", &["-s"])) {
            return kernel;
        }
        // No `uname` (native Windows shells); fall back to what we were compiled for.
        if env::var("OS").map(|os| os == "Windows_NT").unwrap_or(false) {
            return "Windows_NT".to_string();
        }
        match env::consts::OS {
            "linux" => "Linux".to_string(),
            "macos" => "Darwin".to_string(),
            "windows" => "Windows_NT".to_string(),
            other => other.to_string(),
        }
    }

    fn machine_arch(&self) -> String {
        self.capture(&CommandSpec::new("uname", &["-m"]))
            .unwrap_or_else(|| env::consts::ARCH.to_string())
    }

    fn read_file(&self, path: &Path) -> Option<String> {
        fs::read_to_string(path).ok()
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn find_executable(&self, name: &str) -> Option<PathBuf> {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        which::which_in(name, self.search_path(), cwd).ok()
    }

    fn add_to_search_path(&self, dir: &Path) {
        log_debug!("[System] Adding {} to the search path", dir.display());
        self.extra_paths.borrow_mut().insert(0, dir.to_path_buf());
    }

    fn capture(&self, command: &CommandSpec) -> Option<String> {
        let program = self
            .find_executable(&command.program)
            .unwrap_or_else(|| PathBuf::from(&command.program));
        match Command::new(program).args(&command.args).output() {
            Ok(output) if output.status.success() => {
                Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
            }
            Ok(output) => {
                log_debug!(
                    "[System] `{}` exited with {:?}: {}",
                    command,
                    output.status.code(),
                    String::from_utf8_lossy(&output.stderr).trim()
                );
                None
            }
            Err(e) => {
                log_debug!("[System] Could not run `{}`: {}", command, e);
                None
            }
        }
    }

    fn run(&self, command: &CommandSpec) -> Result<(), InstallError> {
        // Resolve through our own search path so binaries added mid-run (brew) are found.
        let program = self
            .find_executable(&command.program)
            .unwrap_or_else(|| PathBuf::from(&command.program));
        log_debug!("[System] Executing: {} ({})", command, program.display());

        let mut process = Command::new(&program);
        process.args(&command.args);
        if !self.extra_paths.borrow().is_empty() {
            if let Some(path) = self.search_path() {
                process.env("PATH", path);
            }
        }

        let status = process
            .status()
            .map_err(|source| InstallError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(InstallError::CommandFailed {
                command: command.to_string(),
                code: status.code(),
            })
        }
    }

    fn is_elevated(&self) -> bool {
        self.capture(&CommandSpec::new("id", &["-u"]))
            .map(|uid| uid == "0")
            .unwrap_or(false)
    }

    fn confirm(&self, prompt: &str) -> bool {
        match Confirm::new().with_prompt(prompt).default(false).interact() {
            Ok(answer) => answer,
            Err(e) => {
                log_warn!("[System] Could not read an answer ({}), assuming 'no'", e);
                false
            }
        }
    }

    fn download(&self, url: &str, dest: &Path) -> io::Result<()> {
        log_debug!("[System] Starting download from URL: {}", url.blue());

        let response = match ureq::get(url).call() {
            Ok(res) => res,
            Err(e) => {
                log_error!("[System] HTTP request failed for {}: {}", url.red(), e);
                return Err(io::Error::other(format!("HTTP error: {e}")));
            }
        };

        let mut file = File::create(dest)?;
        let mut reader = response.into_reader();
        io::copy(&mut reader, &mut file)?;

        log_debug!("[System] File downloaded successfully to {}", dest.display());
        Ok(())
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn append_to_profile(&self, path: &Path, lines: &[String]) -> io::Result<()> {
        shell_profile::append_missing_lines(path, lines)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display() {
        let cmd = CommandSpec::new("apt", &["install", "-y", "bibtool"]);
        assert_eq!(cmd.to_string(), "apt install -y bibtool");
    }

    #[test]
    fn test_with_sudo_prefixes_program() {
        let cmd = CommandSpec::new("pacman", &["-S", "--noconfirm", "bibtool"]).with_sudo();
        assert_eq!(cmd.program, "sudo");
        assert_eq!(cmd.to_string(), "sudo pacman -S --noconfirm bibtool");
    }
}
