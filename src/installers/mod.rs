// This module is the central hub for the package-manager installers.
// Each submodule wraps one native package manager behind the `InstallerStrategy`
// trait, and this file holds the pieces they share: the trait itself, the
// sudo/logging helpers, and the Linux distro dispatch table.

use colored::Colorize;

use crate::libs::distro;
use crate::libs::errors::InstallError;
use crate::libs::system::{CommandSpec, SystemEnvironment};
use crate::schemas::install_target::InstallTarget;
use crate::{log_action, log_debug, log_info};

/// Debian-family installer (`apt update`, `apt install -y`).
pub(crate) mod apt;
/// Homebrew installer for macOS, including the Homebrew bootstrap.
pub(crate) mod brew;
/// Chocolatey installer for native Windows.
pub(crate) mod chocolatey;
/// Red Hat-family installer (`dnf`, falling back to `yum`).
pub(crate) mod dnf;
/// Arch-family installer (`pacman -S --noconfirm`).
pub(crate) mod pacman;
/// Scoop installer for native Windows.
pub(crate) mod scoop;
/// Cygwin / MSYS2 installer, driven by their `pacman`.
pub(crate) mod unix_layer;
/// WSL detection: a Windows host running the Linux dispatch.
pub(crate) mod wsl;
/// SUSE-family installer (`zypper install -y`).
pub(crate) mod zypper;

/// One way of getting the target onto the machine.
pub trait InstallerStrategy {
    /// Short human-readable name used in log lines.
    fn name(&self) -> &'static str;

    /// Whether this strategy can be attempted on the current host.
    fn is_applicable(&self, system: &dyn SystemEnvironment) -> bool;

    /// Performs the installation. Any error ends the run.
    fn install(
        &self,
        system: &dyn SystemEnvironment,
        target: &InstallTarget,
    ) -> Result<(), InstallError>;
}

/// Prefixes `command` with `sudo` when we are not already elevated and `sudo` exists.
pub(crate) fn privileged(system: &dyn SystemEnvironment, command: CommandSpec) -> CommandSpec {
    if !system.is_elevated() && system.find_executable("sudo").is_some() {
        command.with_sudo()
    } else {
        command
    }
}

/// Announces and runs one package-manager step.
pub(crate) fn run_step(
    system: &dyn SystemEnvironment,
    command: &CommandSpec,
) -> Result<(), InstallError> {
    log_action!("Running: {}", command.to_string().bold());
    system.run(command)
}

/// Selects the installer for a Linux distribution id.
///
/// # Returns
/// * `Some(strategy)` for the distro groups we know how to serve.
/// * `None` for anything else.
pub fn linux_strategy_for(distro: &str) -> Option<Box<dyn InstallerStrategy>> {
    match distro {
        "ubuntu" | "debian" | "linuxmint" | "pop" | "elementary" => Some(Box::new(apt::Apt)),
        "fedora" | "centos" | "rhel" | "rocky" | "almalinux" => Some(Box::new(dnf::Dnf)),
        "arch" | "manjaro" | "endeavouros" => Some(Box::new(pacman::Pacman)),
        "suse" => Some(Box::new(zypper::Zypper)),
        other if other.starts_with("opensuse") => Some(Box::new(zypper::Zypper)),
        _ => None,
    }
}

/// The full Linux path: detect the distro, pick its package manager and install.
pub fn install_on_linux(
    system: &dyn SystemEnvironment,
    target: &InstallTarget,
) -> Result<(), InstallError> {
    let distro = distro::detect_distribution(system);
    log_info!("Detected Linux distribution: {}", distro.cyan());

    let strategy =
        linux_strategy_for(&distro).ok_or(InstallError::UnsupportedDistribution { distro })?;
    log_debug!("[Linux] Selected installer: {}", strategy.name());

    if !strategy.is_applicable(system) {
        return Err(InstallError::MissingPackageManager {
            manager: strategy.name().to_string(),
        });
    }
    strategy.install(system, target)
}
