//! APT package manager integration (Debian, Ubuntu, Linux Mint, Pop!_OS, elementary OS).

use colored::Colorize;

use super::{InstallerStrategy, privileged, run_step};
use crate::libs::errors::InstallError;
use crate::libs::system::{CommandSpec, SystemEnvironment};
use crate::log_success;
use crate::schemas::install_target::InstallTarget;

pub struct Apt;

impl InstallerStrategy for Apt {
    fn name(&self) -> &'static str {
        "apt"
    }

    fn is_applicable(&self, system: &dyn SystemEnvironment) -> bool {
        system.find_executable("apt").is_some()
    }

    /// Refreshes the package index, then installs. A failed `apt update` stops the run.
    fn install(
        &self,
        system: &dyn SystemEnvironment,
        target: &InstallTarget,
    ) -> Result<(), InstallError> {
        run_step(system, &privileged(system, CommandSpec::new("apt", &["update"])))?;
        run_step(
            system,
            &privileged(
                system,
                CommandSpec::new("apt", &["install", "-y", &target.package]),
            ),
        )?;
        log_success!("{} installed via apt", target.package.bold());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::system::fake::FakeSystem;

    #[test]
    fn test_update_then_install() {
        let system = FakeSystem::linux("ubuntu").with_executables(&["apt"]);
        Apt.install(&system, &InstallTarget::bibtool()).unwrap();
        assert_eq!(
            system.commands(),
            vec!["apt update", "apt install -y bibtool"]
        );
    }

    #[test]
    fn test_failed_update_skips_install() {
        let system = FakeSystem::linux("debian")
            .with_executables(&["apt"])
            .failing("apt update");
        let err = Apt.install(&system, &InstallTarget::bibtool()).unwrap_err();
        assert!(matches!(err, InstallError::CommandFailed { .. }));
        assert_eq!(system.commands(), vec!["apt update"]);
    }
}
