//! # Installer errors
//!
//! Every failure the installer can hit is terminal for the run. Each variant
//! renders a user-facing message; `remediation` adds a manual-install hint
//! where one exists.

use std::io;

use thiserror::Error;

use crate::schemas::install_target::{BIBTOOL_CTAN, BIBTOOL_HOMEPAGE};

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("unsupported platform '{kernel}'")]
    UnsupportedPlatform { kernel: String },

    #[error("unsupported Linux distribution '{distro}'")]
    UnsupportedDistribution { distro: String },

    #[error("package manager '{manager}' was not found on PATH")]
    MissingPackageManager { manager: String },

    #[error("`{command}` failed{}", exit_suffix(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("could not run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("installation reported success but '{binary}' is not on PATH (verification failed)")]
    VerificationFailed { binary: String },

    #[error("running with elevated privileges was declined")]
    DeclinedElevatedRun,

    #[error("no supported package manager found (Chocolatey, Scoop, Cygwin or MSYS2)")]
    ManualInstallRequired,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => " (terminated by signal)".to_string(),
    }
}

impl InstallError {
    /// Manual steps to print after the error, if the failure has any.
    pub fn remediation(&self) -> Option<Vec<String>> {
        match self {
            InstallError::UnsupportedDistribution { .. } => Some(vec![
                "Install BibTool with your distribution's package manager, e.g.:".to_string(),
                "  sudo <package-manager> install bibtool".to_string(),
                format!("Or build it from source: {BIBTOOL_HOMEPAGE}"),
            ]),
            InstallError::ManualInstallRequired => Some(vec![
                "Install one of the following and run this installer again:".to_string(),
                "  - Chocolatey: https://chocolatey.org/install".to_string(),
                "  - Scoop:      https://scoop.sh".to_string(),
                "  - WSL:        wsl --install (then run the installer inside WSL)".to_string(),
                format!("Or download BibTool for Windows from {BIBTOOL_CTAN}"),
            ]),
            InstallError::VerificationFailed { .. } => Some(vec![
                "The package manager finished, but your PATH does not include the bibtool binary."
                    .to_string(),
                "Open a new terminal (or reload your shell profile) and check `bibtool -h`."
                    .to_string(),
            ]),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_message_includes_exit_code() {
        let err = InstallError::CommandFailed {
            command: "apt install -y bibtool".to_string(),
            code: Some(100),
        };
        assert_eq!(
            err.to_string(),
            "`apt install -y bibtool` failed with exit code 100"
        );
    }

    #[test]
    fn test_unsupported_distribution_has_remediation() {
        let err = InstallError::UnsupportedDistribution {
            distro: "gentoo".to_string(),
        };
        assert!(err.to_string().contains("unsupported Linux distribution"));
        assert!(err.remediation().is_some());
    }

    #[test]
    fn test_declined_run_has_no_remediation() {
        assert!(InstallError::DeclinedElevatedRun.remediation().is_none());
    }
}
