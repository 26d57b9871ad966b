// This file contains the logic for the `bibtool-setup install` command, which is
// also what runs when no subcommand is given.
// It wires the real host into the dispatcher and turns the outcome into an exit code.

use crate::libs::dispatcher::{DispatchOptions, run_installation};
use crate::libs::errors::InstallError;
use crate::libs::system::{RealSystem, SystemEnvironment};
use crate::schemas::install_target::InstallTarget;
use crate::{log_debug, log_error, log_info, log_success};
use colored::Colorize;

/// Main entry point for the `install` command.
///
/// # Arguments
/// * `assume_yes`: Skip the confirmation prompt when running as root.
///
/// # Returns
/// The process exit code: `0` when BibTool is installed and verified, `1` otherwise.
pub fn run(assume_yes: bool) -> i32 {
    log_debug!("Entered install::run() function.");
    let system = RealSystem::new();
    let target = InstallTarget::bibtool();
    let options = DispatchOptions { assume_yes };
    exit_code(install_with(&system, &target, &options))
}

fn install_with(
    system: &dyn SystemEnvironment,
    target: &InstallTarget,
    options: &DispatchOptions,
) -> Result<(), InstallError> {
    log_info!("Installing {} ({})", target.package.bold(), target.homepage);
    run_installation(system, target, options)?;
    log_success!("BibTool installation completed successfully.");
    Ok(())
}

/// Reports a failed run and maps the outcome to an exit code.
fn exit_code(outcome: Result<(), InstallError>) -> i32 {
    match outcome {
        Ok(()) => 0,
        Err(err) => {
            log_error!("{}", err);
            if let Some(lines) = err.remediation() {
                for line in lines {
                    log_info!("{}", line);
                }
            }
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::system::fake::FakeSystem;

    #[test]
    fn test_successful_install_exits_zero() {
        let system = FakeSystem::linux("debian")
            .with_executables(&["apt"])
            .provides("apt install -y bibtool", &["bibtool"]);
        let outcome = install_with(&system, &InstallTarget::bibtool(), &DispatchOptions::default());
        assert_eq!(exit_code(outcome), 0);
    }

    #[test]
    fn test_any_failure_exits_one() {
        let system = FakeSystem::new("SunOS");
        let outcome = install_with(&system, &InstallTarget::bibtool(), &DispatchOptions::default());
        assert_eq!(exit_code(outcome), 1);
    }
}
