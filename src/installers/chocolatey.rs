//! Chocolatey integration for native Windows.

use colored::Colorize;

use super::{InstallerStrategy, run_step};
use crate::libs::errors::InstallError;
use crate::libs::system::{CommandSpec, SystemEnvironment};
use crate::log_success;
use crate::schemas::install_target::InstallTarget;

pub struct Chocolatey;

impl InstallerStrategy for Chocolatey {
    fn name(&self) -> &'static str {
        "Chocolatey"
    }

    fn is_applicable(&self, system: &dyn SystemEnvironment) -> bool {
        system.find_executable("choco").is_some()
    }

    // Chocolatey elevates on its own; there is no sudo to add.
    fn install(
        &self,
        system: &dyn SystemEnvironment,
        target: &InstallTarget,
    ) -> Result<(), InstallError> {
        run_step(
            system,
            &CommandSpec::new("choco", &["install", &target.package, "-y"]),
        )?;
        log_success!("{} installed via Chocolatey", target.package.bold());
        Ok(())
    }
}
