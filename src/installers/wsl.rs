//! Windows Subsystem for Linux.
//!
//! A Windows host whose kernel version carries Microsoft's marker is really a
//! Linux userland, so installation goes through the Linux distro dispatch.

use std::path::Path;

use super::{InstallerStrategy, install_on_linux};
use crate::libs::errors::InstallError;
use crate::libs::system::SystemEnvironment;
use crate::schemas::install_target::InstallTarget;

pub const PROC_VERSION_PATH: &str = "/proc/version";

/// `true` if the kernel version string was built by Microsoft for WSL.
pub fn is_wsl_kernel(proc_version: &str) -> bool {
    proc_version.to_lowercase().contains("microsoft")
}

pub struct Wsl;

impl InstallerStrategy for Wsl {
    fn name(&self) -> &'static str {
        "WSL"
    }

    fn is_applicable(&self, system: &dyn SystemEnvironment) -> bool {
        system
            .read_file(Path::new(PROC_VERSION_PATH))
            .is_some_and(|version| is_wsl_kernel(&version))
    }

    fn install(
        &self,
        system: &dyn SystemEnvironment,
        target: &InstallTarget,
    ) -> Result<(), InstallError> {
        install_on_linux(system, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wsl_marker() {
        assert!(is_wsl_kernel(
            "Linux version 5.15.90.1-microsoft-standard-WSL2 (oe-user@oe-host)"
        ));
        assert!(is_wsl_kernel("Linux version 4.4.0-19041-Microsoft"));
        assert!(!is_wsl_kernel("Linux version 6.5.0-generic (buildd@ubuntu)"));
    }
}
