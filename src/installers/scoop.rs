//! Scoop integration for native Windows.

use colored::Colorize;

use super::{InstallerStrategy, run_step};
use crate::libs::errors::InstallError;
use crate::libs::system::{CommandSpec, SystemEnvironment};
use crate::log_success;
use crate::schemas::install_target::InstallTarget;

pub struct Scoop;

impl InstallerStrategy for Scoop {
    fn name(&self) -> &'static str {
        "Scoop"
    }

    fn is_applicable(&self, system: &dyn SystemEnvironment) -> bool {
        system.find_executable("scoop").is_some()
    }

    fn install(
        &self,
        system: &dyn SystemEnvironment,
        target: &InstallTarget,
    ) -> Result<(), InstallError> {
        run_step(
            system,
            &CommandSpec::new("scoop", &["install", &target.package]),
        )?;
        log_success!("{} installed via Scoop", target.package.bold());
        Ok(())
    }
}
