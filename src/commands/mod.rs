// Register application subcommands.
// Each module corresponds to a specific `bibtool-setup` command-line action.

// Detects the platform and installs BibTool (also the default action).
pub mod install;
// Builds a Markdown statistics report from BibTeX files.
pub mod stats;
