//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

use crate::logging::Verbosity;

/// Top-level CLI entry point for the texseq build orchestrator.
#[derive(Parser, Debug)]
#[command(
    name = "texseq",
    about = "Run a configured sequence of typesetting programs to build a document",
    disable_version_flag = true
)]
pub struct Cli {
    /// Source documents to build; only the first is used
    pub files: Vec<PathBuf>,

    /// Use this configuration file instead of texseq.toml
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the commands without executing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress informational output (errors are still shown)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print version information and exit
    #[arg(short = 'V', long)]
    pub version: bool,
}

impl Cli {
    /// Console verbosity derived from the `--quiet`/`--verbose` flags.
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_single_file() {
        let cli = Cli::parse_from(["texseq", "paper.tex"]);
        assert_eq!(cli.files, [PathBuf::from("paper.tex")]);
    }

    #[test]
    fn parse_multiple_files() {
        let cli = Cli::parse_from(["texseq", "a.tex", "b.tex"]);
        assert_eq!(cli.files.len(), 2);
    }

    #[test]
    fn parse_no_files() {
        let cli = Cli::parse_from(["texseq"]);
        assert!(cli.files.is_empty());
        assert!(!cli.dry_run);
    }

    #[test]
    fn parse_dry_run() {
        let cli = Cli::parse_from(["texseq", "-n", "paper.tex"]);
        assert!(cli.dry_run);
    }

    #[test]
    fn parse_config_override() {
        let cli = Cli::parse_from(["texseq", "--config", "build.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("build.toml")));
    }

    #[test]
    fn parse_version_flag() {
        let cli = Cli::parse_from(["texseq", "-V"]);
        assert!(cli.version);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["texseq", "-q", "-v"]).is_err());
    }

    #[test]
    fn verbosity_mapping() {
        assert_eq!(
            Cli::parse_from(["texseq", "-q"]).verbosity(),
            Verbosity::Quiet
        );
        assert_eq!(Cli::parse_from(["texseq"]).verbosity(), Verbosity::Normal);
        assert_eq!(
            Cli::parse_from(["texseq", "-v"]).verbosity(),
            Verbosity::Verbose
        );
    }
}
