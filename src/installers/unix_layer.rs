//! Cygwin and MSYS2 integration.
//!
//! Both are recognized by their marker directory and install through their own `pacman`.

use std::path::Path;

use colored::Colorize;

use super::{InstallerStrategy, pacman, run_step};
use crate::libs::errors::InstallError;
use crate::libs::system::SystemEnvironment;
use crate::{log_debug, log_success};
use crate::schemas::install_target::InstallTarget;

/// Directories whose presence marks a Unix compatibility layer.
pub const MARKER_DIRS: [&str; 2] = ["/cygdrive", "/msys2"];

pub struct UnixLayer;

impl UnixLayer {
    fn marker(system: &dyn SystemEnvironment) -> Option<&'static str> {
        MARKER_DIRS
            .into_iter()
            .find(|dir| system.path_exists(Path::new(dir)))
    }
}

impl InstallerStrategy for UnixLayer {
    fn name(&self) -> &'static str {
        "Cygwin/MSYS2 pacman"
    }

    fn is_applicable(&self, system: &dyn SystemEnvironment) -> bool {
        match Self::marker(system) {
            Some(marker) => {
                log_debug!("[UnixLayer] Found {}", marker);
                system.find_executable("pacman").is_some()
            }
            None => false,
        }
    }

    fn install(
        &self,
        system: &dyn SystemEnvironment,
        target: &InstallTarget,
    ) -> Result<(), InstallError> {
        run_step(system, &pacman::install_command(&target.package))?;
        log_success!("{} installed via {}", target.package.bold(), self.name());
        Ok(())
    }
}
