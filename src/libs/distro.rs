// Linux distribution detection.
//
// The id comes from `/etc/os-release` (`ID=`), then `lsb_release -si`, and is
// "unknown" when neither source is available. Ids are always lower-cased.

use std::path::Path;

use colored::Colorize;

use crate::libs::system::{CommandSpec, SystemEnvironment};
use crate::log_debug;

pub const OS_RELEASE_PATH: &str = "/etc/os-release";
pub const UNKNOWN_DISTRO: &str = "unknown";

/// Extracts the `ID` field from os-release contents, with surrounding quotes removed.
pub fn parse_os_release_id(contents: &str) -> Option<String> {
    contents
        .lines()
        .filter_map(|line| line.trim().strip_prefix("ID="))
        .map(|id| id.trim().trim_matches('"').trim_matches('\'').to_lowercase())
        .find(|id| !id.is_empty())
}

/// Detects the distribution id of the current Linux host.
pub fn detect_distribution(system: &dyn SystemEnvironment) -> String {
    if let Some(contents) = system.read_file(Path::new(OS_RELEASE_PATH)) {
        if let Some(id) = parse_os_release_id(&contents) {
            log_debug!("[Distro] {} reports ID={}", OS_RELEASE_PATH, id.cyan());
            return id;
        }
        log_debug!("[Distro] {} has no ID field", OS_RELEASE_PATH);
    }

    if system.find_executable("lsb_release").is_some() {
        if let Some(id) = system.capture(&CommandSpec::new("lsb_release", &["-si"])) {
            let id = id.trim().to_lowercase();
            if !id.is_empty() {
                log_debug!("[Distro] lsb_release reports {}", id.cyan());
                return id;
            }
        }
    }

    UNKNOWN_DISTRO.to_string()
}
