mod commands;
mod installers;
mod libs;
mod logger;
mod schemas;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{install, stats};

#[derive(Debug, Parser)]
#[command(name = "bibtool-setup", version)]
#[command(about = "Install BibTool with your platform's package manager", long_about = None)]
struct Cli {
    /// Turn debugging information on
    #[arg(short, long, global = true, env = "BIBTOOL_SETUP_DEBUG")]
    debug: bool,

    /// Continue without prompting when running as root
    #[arg(short = 'y', long, global = true, env = "BIBTOOL_SETUP_ASSUME_YES")]
    yes: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Detect the platform and install BibTool (default)
    Install,
    /// Analyze BibTeX files and print a Markdown statistics report
    Stats {
        /// BibTeX files to analyze
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    logger::init(cli.debug);

    let code = match cli.command.unwrap_or(Commands::Install) {
        Commands::Install => install::run(cli.yes),
        Commands::Stats { files, output } => match stats::run(&files, output.as_deref()) {
            Ok(()) => 0,
            Err(err) => {
                log_error!("{:#}", err);
                1
            }
        },
    };
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_no_subcommand_means_install() {
        let cli = Cli::try_parse_from(["bibtool-setup"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(
            cli.command.unwrap_or(Commands::Install),
            Commands::Install
        ));
    }

    #[test]
    fn test_yes_flag_short_and_long() {
        let cli = Cli::try_parse_from(["bibtool-setup", "-y"]).unwrap();
        assert!(cli.yes);
        let cli = Cli::try_parse_from(["bibtool-setup", "install", "--yes"]).unwrap();
        assert!(cli.yes);
        assert!(matches!(cli.command, Some(Commands::Install)));
    }

    #[test]
    fn test_yes_from_environment() {
        // Only this test touches the variable.
        unsafe { std::env::set_var("BIBTOOL_SETUP_ASSUME_YES", "true") };
        let parsed = Cli::try_parse_from(["bibtool-setup", "install"]);
        unsafe { std::env::remove_var("BIBTOOL_SETUP_ASSUME_YES") };
        assert!(parsed.unwrap().yes);
    }

    #[test]
    fn test_stats_requires_a_file() {
        let err = Cli::try_parse_from(["bibtool-setup", "stats"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_stats_files_and_output() {
        let cli =
            Cli::try_parse_from(["bibtool-setup", "stats", "a.bib", "b.bib", "-o", "report.md"])
                .unwrap();
        match cli.command {
            Some(Commands::Stats { files, output }) => {
                assert_eq!(files, vec![PathBuf::from("a.bib"), PathBuf::from("b.bib")]);
                assert_eq!(output, Some(PathBuf::from("report.md")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_debug_is_global() {
        let cli = Cli::try_parse_from(["bibtool-setup", "stats", "a.bib", "--debug"]).unwrap();
        assert!(cli.debug);
    }
}
