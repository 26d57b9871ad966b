//! # Homebrew Installer Module
//!
//! Installs the target on macOS through Homebrew, bootstrapping Homebrew itself
//! when it is missing.
//!
//! ## Installation Workflow
//!
//! 1. **Homebrew Check** - Looks for `brew` on the search path
//! 2. **Bootstrap** - Downloads and runs the official install script when `brew` is absent
//! 3. **Shell Environment** - On Apple Silicon, adds `brew shellenv` to `~/.zprofile`
//!    and puts `/opt/homebrew/bin` on the search path for the rest of the run
//! 4. **Pre-installation Check** - `brew list <formula>` tells us if it is already there
//! 5. **Formula Installation** - `brew install <formula>`
//!
//! The formula name comes from `InstallTarget::brew_formula` (`bib-tool`), which
//! differs from the Linux package name.
//!
//! An already-installed formula and a fresh install are both successes, but they
//! are reported with different messages.

use std::path::Path;

use colored::Colorize;
use tempfile::NamedTempFile;

use super::{InstallerStrategy, run_step};
use crate::libs::errors::InstallError;
use crate::libs::shell_profile::zprofile_path;
use crate::libs::system::{CommandSpec, SystemEnvironment};
use crate::schemas::install_target::InstallTarget;
use crate::schemas::platform::is_arm64;
use crate::{log_action, log_debug, log_info, log_success, log_warn};

/// Official Homebrew bootstrap script.
pub const HOMEBREW_INSTALL_URL: &str =
    "https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh";

/// Homebrew's prefix on Apple Silicon, which is not on the default PATH.
const APPLE_SILICON_BREW_BIN: &str = "/opt/homebrew/bin";
/// Homebrew's prefix on Intel Macs.
const INTEL_BREW_BIN: &str = "/usr/local/bin";

pub struct Homebrew;

impl InstallerStrategy for Homebrew {
    fn name(&self) -> &'static str {
        "Homebrew"
    }

    // Homebrew is bootstrapped on demand, so it always applies on a Mac.
    fn is_applicable(&self, _system: &dyn SystemEnvironment) -> bool {
        true
    }

    /// Installs the target formula with Homebrew.
    ///
    /// # Arguments
    /// * `system`: The host to act on.
    /// * `target`: Supplies `brew_formula`.
    ///
    /// # Returns
    /// * `Ok(())` once the formula is installed (freshly or already).
    /// * `Err(InstallError)` if Homebrew cannot be bootstrapped or `brew install` fails.
    fn install(
        &self,
        system: &dyn SystemEnvironment,
        target: &InstallTarget,
    ) -> Result<(), InstallError> {
        ensure_homebrew(system)?;

        let formula = &target.brew_formula;
        if check_formula_already_installed(system, formula) {
            log_success!(
                "{} is already installed via Homebrew",
                formula.bold().green()
            );
            return Ok(());
        }

        run_step(system, &CommandSpec::new("brew", &["install", formula]))?;
        log_success!("{} installed via Homebrew", formula.bold().green());
        Ok(())
    }
}

/// Makes sure `brew` is available, installing Homebrew if necessary.
///
/// # Returns
/// * `Ok(())` when `brew` resolves on the search path.
/// * `Err(InstallError::MissingPackageManager)` if it still cannot be found after the bootstrap.
fn ensure_homebrew(system: &dyn SystemEnvironment) -> Result<(), InstallError> {
    if let Some(brew) = system.find_executable("brew") {
        log_debug!("[Brew Installer] Using brew at {}", brew.display());
        return Ok(());
    }

    log_action!(
        "Homebrew not found, installing it from {}",
        HOMEBREW_INSTALL_URL.cyan()
    );
    let script = NamedTempFile::new()?;
    system.download(HOMEBREW_INSTALL_URL, script.path())?;
    let script_path = script.path().to_string_lossy().to_string();
    run_step(system, &CommandSpec::new("/bin/bash", &[&script_path]))?;

    configure_shell_environment(system)?;

    if system.find_executable("brew").is_none() {
        return Err(InstallError::MissingPackageManager {
            manager: "brew".to_string(),
        });
    }
    log_success!("Homebrew installed");
    Ok(())
}

/// Wires a freshly installed Homebrew into the shell and into this run's search path.
///
/// Apple Silicon installs to `/opt/homebrew`, which login shells only see once
/// `brew shellenv` is evaluated from `~/.zprofile`.
fn configure_shell_environment(system: &dyn SystemEnvironment) -> Result<(), InstallError> {
    let arch = system.machine_arch();
    if !is_arm64(&arch) {
        log_debug!("[Brew Installer] {} host, Homebrew lives in {}", arch, INTEL_BREW_BIN);
        system.add_to_search_path(Path::new(INTEL_BREW_BIN));
        return Ok(());
    }

    let shellenv = format!("eval \"$({APPLE_SILICON_BREW_BIN}/brew shellenv)\"");
    match system.home_dir() {
        Some(home) => {
            let profile = zprofile_path(&home);
            log_info!(
                "Adding Homebrew to your shell profile: {}",
                profile.display().to_string().cyan()
            );
            system.append_to_profile(&profile, &[shellenv])?;
        }
        None => log_warn!(
            "Could not determine your home directory; add `{}` to your shell profile manually",
            shellenv
        ),
    }
    system.add_to_search_path(Path::new(APPLE_SILICON_BREW_BIN));
    Ok(())
}

/// Checks if a formula is already installed to avoid unnecessary reinstallation.
///
/// `brew list <formula>` exits 0 only for installed formulae.
fn check_formula_already_installed(system: &dyn SystemEnvironment, formula: &str) -> bool {
    let installed = system
        .capture(&CommandSpec::new("brew", &["list", formula]))
        .is_some();
    log_debug!(
        "[Brew Installer] Formula '{}' installed: {}",
        formula,
        installed
    );
    installed
}
