//! Pacman package manager integration (Arch Linux, Manjaro, EndeavourOS).

use colored::Colorize;

use super::{InstallerStrategy, privileged, run_step};
use crate::libs::errors::InstallError;
use crate::libs::system::{CommandSpec, SystemEnvironment};
use crate::log_success;
use crate::schemas::install_target::InstallTarget;

/// The sync-and-install command shared with the MSYS2/Cygwin installer.
pub(crate) fn install_command(package: &str) -> CommandSpec {
    CommandSpec::new("pacman", &["-S", "--noconfirm", package])
}

pub struct Pacman;

impl InstallerStrategy for Pacman {
    fn name(&self) -> &'static str {
        "pacman"
    }

    fn is_applicable(&self, system: &dyn SystemEnvironment) -> bool {
        system.find_executable("pacman").is_some()
    }

    fn install(
        &self,
        system: &dyn SystemEnvironment,
        target: &InstallTarget,
    ) -> Result<(), InstallError> {
        run_step(system, &privileged(system, install_command(&target.package)))?;
        log_success!("{} installed via pacman", target.package.bold());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::system::fake::FakeSystem;

    #[test]
    fn test_noconfirm_sync_install() {
        let system = FakeSystem::linux("manjaro").with_executables(&["pacman"]);
        Pacman.install(&system, &InstallTarget::bibtool()).unwrap();
        assert_eq!(system.commands(), vec!["pacman -S --noconfirm bibtool"]);
    }
}
