// Describes the tool being installed: the executable that must end up on the
// search path, and the package name each package manager knows it by.

/// BibTool's project page, used in manual-install instructions.
pub const BIBTOOL_HOMEPAGE: &str = "https://github.com/ge-ne/bibtool";
/// BibTool on CTAN, where the Windows builds live.
pub const BIBTOOL_CTAN: &str = "https://ctan.org/pkg/bibtool";

/// The tool to install and its per-manager package names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTarget {
    /// Executable name checked during verification.
    pub binary: String,
    /// Package name for apt, dnf/yum, pacman, zypper, Chocolatey, Scoop and MSYS2/Cygwin.
    pub package: String,
    /// Homebrew formula name, which differs from the Linux package name.
    pub brew_formula: String,
    /// Where to send users when no package manager can do the job.
    pub homepage: String,
}

impl InstallTarget {
    /// The BibTool target this binary exists to install.
    pub fn bibtool() -> Self {
        Self {
            binary: "bibtool".to_string(),
            package: "bibtool".to_string(),
            brew_formula: "bib-tool".to_string(),
            homepage: BIBTOOL_HOMEPAGE.to_string(),
        }
    }
}
