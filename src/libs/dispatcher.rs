// This module orchestrates a full installation run. It acts as a central
// dispatcher: detect the platform, confirm an elevated run, hand the work to
// the right installer strategy and finally verify the result.
//
// Key responsibilities include:
// - Mapping the kernel name to a `Platform` (unknown platforms end the run).
// - Asking for confirmation before doing anything as root.
// - Linux: the distro dispatch table in `installers`.
// - macOS: Homebrew, bootstrapped when missing.
// - Windows: an ordered chain of strategies, first applicable one wins.
// - Verifying the target binary resolves on the search path afterwards.

use std::path::PathBuf;

use colored::Colorize;

use crate::installers::{
    InstallerStrategy, brew::Homebrew, chocolatey::Chocolatey, install_on_linux, scoop::Scoop,
    unix_layer::UnixLayer, wsl::Wsl,
};
use crate::libs::errors::InstallError;
use crate::libs::system::SystemEnvironment;
use crate::schemas::install_target::InstallTarget;
use crate::schemas::platform::Platform;
use crate::{log_debug, log_info, log_success, log_warn};

/// Run-wide options.
#[derive(Debug, Clone, Default)]
pub struct DispatchOptions {
    /// Answer "yes" to the elevated-run confirmation without prompting.
    pub assume_yes: bool,
}

/// Windows strategies in the order they are tried.
pub fn windows_strategies() -> Vec<Box<dyn InstallerStrategy>> {
    vec![
        Box::new(Wsl),
        Box::new(Chocolatey),
        Box::new(Scoop),
        Box::new(UnixLayer),
    ]
}

/// Detects the platform from the kernel name.
pub fn detect_platform(system: &dyn SystemEnvironment) -> (Platform, String) {
    let kernel = system.kernel_name();
    let platform = Platform::from_kernel_name(&kernel);
    log_debug!("[Dispatch] Kernel '{}' maps to {}", kernel, platform);
    (platform, kernel)
}

/// Warns about elevated runs and asks before continuing.
///
/// # Returns
/// * `Err(InstallError::DeclinedElevatedRun)` if the user says no.
pub fn check_privileges(
    system: &dyn SystemEnvironment,
    options: &DispatchOptions,
) -> Result<(), InstallError> {
    if !system.is_elevated() {
        return Ok(());
    }

    log_warn!(
        "You are running this installer as {}. Package managers will run with full privileges.",
        "root".bold()
    );
    if options.assume_yes {
        log_info!("Continuing because --yes was given");
        return Ok(());
    }
    if system.confirm("Continue as root?") {
        Ok(())
    } else {
        Err(InstallError::DeclinedElevatedRun)
    }
}

/// Tries the Windows strategies in order. The first applicable one decides the outcome.
pub fn install_on_windows(
    system: &dyn SystemEnvironment,
    target: &InstallTarget,
) -> Result<(), InstallError> {
    for strategy in windows_strategies() {
        if strategy.is_applicable(system) {
            log_info!("Using {}", strategy.name().cyan());
            return strategy.install(system, target);
        }
        log_debug!("[Dispatch] {} is not available", strategy.name());
    }
    Err(InstallError::ManualInstallRequired)
}

/// Confirms the target binary resolves on the search path.
pub fn verify_installation(
    system: &dyn SystemEnvironment,
    target: &InstallTarget,
) -> Result<PathBuf, InstallError> {
    system
        .find_executable(&target.binary)
        .ok_or_else(|| InstallError::VerificationFailed {
            binary: target.binary.clone(),
        })
}

/// Runs the whole installation.
///
/// # Returns
/// * `Ok(path)` with the resolved binary when the run succeeded and verified.
/// * `Err(InstallError)` for the first failure encountered.
pub fn run_installation(
    system: &dyn SystemEnvironment,
    target: &InstallTarget,
    options: &DispatchOptions,
) -> Result<PathBuf, InstallError> {
    let (platform, kernel) = detect_platform(system);
    log_info!("Detected platform: {}", platform.to_string().cyan());
    if platform == Platform::Unknown {
        return Err(InstallError::UnsupportedPlatform { kernel });
    }

    check_privileges(system, options)?;

    match platform {
        Platform::Linux => install_on_linux(system, target)?,
        Platform::Mac => Homebrew.install(system, target)?,
        Platform::Windows => install_on_windows(system, target)?,
        Platform::Unknown => return Err(InstallError::UnsupportedPlatform { kernel }),
    }

    let binary = verify_installation(system, target)?;
    log_success!(
        "{} is available at {}",
        target.binary.bold().green(),
        binary.display()
    );
    Ok(binary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::system::fake::FakeSystem;

    fn run(system: &FakeSystem) -> Result<PathBuf, InstallError> {
        run_installation(system, &InstallTarget::bibtool(), &DispatchOptions::default())
    }

    #[test]
    fn test_ubuntu_scenario() {
        let system = FakeSystem::linux("ubuntu")
            .with_executables(&["apt"])
            .provides("apt install -y bibtool", &["bibtool"]);

        let binary = run(&system).unwrap();

        assert_eq!(binary, PathBuf::from("/usr/bin/bibtool"));
        assert_eq!(system.commands(), vec!["apt update", "apt install -y bibtool"]);
    }

    #[test]
    fn test_each_distro_group_runs_its_manager() {
        let cases = [
            ("linuxmint", "apt", "apt install -y bibtool"),
            ("rocky", "dnf", "dnf install -y bibtool"),
            ("endeavouros", "pacman", "pacman -S --noconfirm bibtool"),
            ("opensuse-leap", "zypper", "zypper install -y bibtool"),
        ];
        for (distro, manager, install) in cases {
            let system = FakeSystem::linux(distro)
                .with_executables(&[manager])
                .provides(install, &["bibtool"]);
            run(&system).unwrap();
            assert_eq!(system.commands().last().unwrap(), install, "{distro}");
        }
    }

    #[test]
    fn test_unsupported_platform() {
        let system = FakeSystem::new("FreeBSD");
        let err = run(&system).unwrap_err();
        assert!(matches!(
            err,
            InstallError::UnsupportedPlatform { ref kernel } if kernel == "FreeBSD"
        ));
        assert!(system.commands().is_empty());
    }

    #[test]
    fn test_unsupported_distribution() {
        let system = FakeSystem::linux("void");
        let err = run(&system).unwrap_err();
        assert!(err.to_string().contains("unsupported Linux distribution"));
    }

    #[test]
    fn test_declined_root_run_installs_nothing() {
        let system = FakeSystem::linux("ubuntu")
            .with_executables(&["apt"])
            .elevated(false);

        let err = run(&system).unwrap_err();

        assert!(matches!(err, InstallError::DeclinedElevatedRun));
        assert_eq!(system.prompts.borrow().len(), 1);
        assert!(system.commands().is_empty());
    }

    #[test]
    fn test_confirmed_root_run_proceeds_without_sudo() {
        let system = FakeSystem::linux("fedora")
            .with_executables(&["dnf", "sudo"])
            .elevated(true)
            .provides("dnf install -y bibtool", &["bibtool"]);

        run(&system).unwrap();

        assert_eq!(system.commands(), vec!["dnf install -y bibtool"]);
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        let system = FakeSystem::linux("arch")
            .with_executables(&["pacman"])
            .elevated(false)
            .provides("pacman -S --noconfirm bibtool", &["bibtool"]);
        let options = DispatchOptions { assume_yes: true };

        run_installation(&system, &InstallTarget::bibtool(), &options).unwrap();

        assert!(system.prompts.borrow().is_empty());
    }

    #[test]
    fn test_success_without_binary_fails_verification() {
        let system = FakeSystem::linux("ubuntu").with_executables(&["apt"]);
        let err = run(&system).unwrap_err();
        assert!(matches!(
            err,
            InstallError::VerificationFailed { ref binary } if binary == "bibtool"
        ));
        assert_eq!(system.commands().len(), 2);
    }

    #[test]
    fn test_package_manager_failure_is_terminal() {
        let system = FakeSystem::linux("ubuntu")
            .with_executables(&["apt"])
            .failing("apt install -y bibtool");
        let err = run(&system).unwrap_err();
        assert!(matches!(err, InstallError::CommandFailed { .. }));
    }

    #[test]
    fn test_darwin_bootstraps_homebrew() {
        let system = FakeSystem::new("Darwin")
            .with_arch("arm64")
            .provides("/bin/bash", &["brew"])
            .provides("brew install bib-tool", &["bibtool"]);

        run(&system).unwrap();

        assert_eq!(system.downloads.borrow().len(), 1);
        assert_eq!(system.commands().last().unwrap(), "brew install bib-tool");
    }

    #[test]
    fn test_wsl_uses_linux_dispatch() {
        let system = FakeSystem::new("MINGW64_NT-10.0")
            .with_file(
                "/proc/version",
                "Linux version 5.15.90.1-microsoft-standard-WSL2",
            )
            .with_file("/etc/os-release", "ID=ubuntu\n")
            .with_executables(&["apt", "choco", "scoop"])
            .provides("apt install -y bibtool", &["bibtool"]);

        run(&system).unwrap();

        let commands = system.commands();
        assert_eq!(commands, vec!["apt update", "apt install -y bibtool"]);
        assert!(commands.iter().all(|c| !c.starts_with("choco") && !c.starts_with("scoop")));
    }

    #[test]
    fn test_windows_prefers_chocolatey_over_scoop() {
        let system = FakeSystem::new("Windows_NT")
            .with_executables(&["choco", "scoop"])
            .provides("choco install bibtool -y", &["bibtool"]);
        run(&system).unwrap();
        assert_eq!(system.commands(), vec!["choco install bibtool -y"]);
    }

    #[test]
    fn test_windows_falls_back_to_scoop() {
        let system = FakeSystem::new("MINGW64_NT-10.0")
            .with_executables(&["scoop"])
            .provides("scoop install bibtool", &["bibtool"]);
        run(&system).unwrap();
        assert_eq!(system.commands(), vec!["scoop install bibtool"]);
    }

    #[test]
    fn test_windows_falls_back_to_cygwin_pacman() {
        let system = FakeSystem::new("CYGWIN_NT-10.0")
            .with_dir("/cygdrive")
            .with_executables(&["pacman"])
            .provides("pacman -S --noconfirm bibtool", &["bibtool"]);
        run(&system).unwrap();
        assert_eq!(system.commands(), vec!["pacman -S --noconfirm bibtool"]);
    }

    #[test]
    fn test_failed_chocolatey_does_not_fall_through() {
        let system = FakeSystem::new("Windows_NT")
            .with_executables(&["choco", "scoop"])
            .failing("choco install bibtool -y");
        let err = run(&system).unwrap_err();
        assert!(matches!(err, InstallError::CommandFailed { .. }));
        assert_eq!(system.commands(), vec!["choco install bibtool -y"]);
    }

    #[test]
    fn test_windows_without_managers_needs_manual_install() {
        let system = FakeSystem::new("MSYS_NT-10.0");
        let err = run(&system).unwrap_err();
        assert!(matches!(err, InstallError::ManualInstallRequired));
        assert!(err.remediation().is_some());
    }
}
