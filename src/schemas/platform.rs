// Defines the platform the installer is running on, and how it is derived from
// the kernel identification string (what `uname -s` prints).

use std::fmt;

/// The host operating system family, derived once per run from the kernel name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Mac,
    /// Any Windows flavour: native, Cygwin, MinGW/MSYS2 or a WSL host reporting as Windows.
    Windows,
    Unknown,
}

impl Platform {
    /// Maps a kernel name to a platform by prefix match.
    ///
    /// # Arguments
    /// * `kernel_name`: The raw kernel identification string (e.g. "Linux", "Darwin", "MINGW64_NT-10.0").
    ///
    /// # Returns
    /// * `Platform`: `Unknown` for anything that is not recognized.
    pub fn from_kernel_name(kernel_name: &str) -> Self {
        let kernel = kernel_name.trim();
        if kernel.starts_with("Linux") {
            Platform::Linux
        } else if kernel.starts_with("Darwin") {
            Platform::Mac
        } else if ["CYGWIN", "MINGW", "MSYS", "Windows_NT"]
            .iter()
            .any(|prefix| kernel.starts_with(prefix))
        {
            Platform::Windows
        } else {
            Platform::Unknown
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Platform::Linux => write!(f, "Linux"),
            Platform::Mac => write!(f, "macOS"),
            Platform::Windows => write!(f, "Windows"),
            Platform::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Returns `true` for machine strings that identify Apple Silicon / 64-bit ARM.
pub fn is_arm64(arch: &str) -> bool {
    matches!(arch.trim().to_lowercase().as_str(), "arm64" | "aarch64")
}
