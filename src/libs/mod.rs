// Core logic shared by the subcommands.

/// BibTeX parsing, statistics and the Markdown report.
pub mod bibtex;
/// Platform detection, the elevated-run prompt and the per-platform dispatch.
pub mod dispatcher;
/// Linux distribution detection.
pub mod distro;
pub mod errors;
/// Appending lines to shell startup files.
pub mod shell_profile;
/// The host abstraction every installer talks to.
pub mod system;
