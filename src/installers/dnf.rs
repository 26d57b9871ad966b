//! DNF package manager integration (Fedora, CentOS, RHEL, Rocky, AlmaLinux).
//!
//! Older releases only ship `yum`, which takes the same arguments.

use colored::Colorize;

use super::{InstallerStrategy, privileged, run_step};
use crate::libs::errors::InstallError;
use crate::libs::system::{CommandSpec, SystemEnvironment};
use crate::{log_debug, log_success};
use crate::schemas::install_target::InstallTarget;

pub struct Dnf;

impl Dnf {
    /// `dnf` when present, otherwise `yum`, otherwise nothing.
    fn manager(system: &dyn SystemEnvironment) -> Option<&'static str> {
        ["dnf", "yum"]
            .into_iter()
            .find(|manager| system.find_executable(manager).is_some())
    }
}

impl InstallerStrategy for Dnf {
    fn name(&self) -> &'static str {
        "dnf"
    }

    fn is_applicable(&self, system: &dyn SystemEnvironment) -> bool {
        Self::manager(system).is_some()
    }

    fn install(
        &self,
        system: &dyn SystemEnvironment,
        target: &InstallTarget,
    ) -> Result<(), InstallError> {
        let manager = Self::manager(system).ok_or_else(|| InstallError::MissingPackageManager {
            manager: "dnf".to_string(),
        })?;
        if manager == "yum" {
            log_debug!("[dnf] dnf not found, falling back to yum");
        }

        run_step(
            system,
            &privileged(
                system,
                CommandSpec::new(manager, &["install", "-y", &target.package]),
            ),
        )?;
        log_success!("{} installed via {}", target.package.bold(), manager);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::system::fake::FakeSystem;

    #[test]
    fn test_prefers_dnf() {
        let system = FakeSystem::linux("fedora").with_executables(&["dnf", "yum"]);
        Dnf.install(&system, &InstallTarget::bibtool()).unwrap();
        assert_eq!(system.commands(), vec!["dnf install -y bibtool"]);
    }

    #[test]
    fn test_falls_back_to_yum() {
        let system = FakeSystem::linux("centos").with_executables(&["yum", "sudo"]);
        Dnf.install(&system, &InstallTarget::bibtool()).unwrap();
        assert_eq!(system.commands(), vec!["sudo yum install -y bibtool"]);
    }

    #[test]
    fn test_not_applicable_without_either() {
        let system = FakeSystem::linux("rhel");
        assert!(!Dnf.is_applicable(&system));
    }
}
