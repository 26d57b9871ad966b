// Data structures shared across the installer and the statistics reporter.

// The host platform and its kernel-name mapping.
pub mod platform;
// The tool being installed and its package names.
pub mod install_target;
// Parsed BibTeX entries.
pub mod bib_entry;
