//! Zypper package manager integration (openSUSE Leap/Tumbleweed, SUSE).

use colored::Colorize;

use super::{InstallerStrategy, privileged, run_step};
use crate::libs::errors::InstallError;
use crate::libs::system::{CommandSpec, SystemEnvironment};
use crate::log_success;
use crate::schemas::install_target::InstallTarget;

pub struct Zypper;

impl InstallerStrategy for Zypper {
    fn name(&self) -> &'static str {
        "zypper"
    }

    fn is_applicable(&self, system: &dyn SystemEnvironment) -> bool {
        system.find_executable("zypper").is_some()
    }

    fn install(
        &self,
        system: &dyn SystemEnvironment,
        target: &InstallTarget,
    ) -> Result<(), InstallError> {
        run_step(
            system,
            &privileged(
                system,
                CommandSpec::new("zypper", &["install", "-y", &target.package]),
            ),
        )?;
        log_success!("{} installed via zypper", target.package.bold());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::system::fake::FakeSystem;

    #[test]
    fn test_zypper_install() {
        let system = FakeSystem::linux("opensuse-tumbleweed").with_executables(&["zypper"]);
        Zypper.install(&system, &InstallTarget::bibtool()).unwrap();
        assert_eq!(system.commands(), vec!["zypper install -y bibtool"]);
    }
}
