//! CLI definition.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Generate a Markdown changelog from tagged pull request merges.
#[derive(Debug, Parser)]
#[command(name = "mergelog")]
#[command(version, about, long_about = None)]
#[command(disable_help_flag = true, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write CHANGELOG.md from the merged pull requests of every tag
    #[command(short_flag = 'g')]
    Generate,

    /// Print usage
    #[command(short_flag = 'h')]
    Help,
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Generate => commands::generate::run(),
            Commands::Help => {
                commands::help::run();
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_aliases() {
        for args in [["mergelog", "generate"], ["mergelog", "-g"]] {
            let cli = Cli::try_parse_from(args).unwrap();
            assert!(matches!(cli.command, Commands::Generate));
        }
    }

    #[test]
    fn test_help_aliases() {
        for args in [["mergelog", "help"], ["mergelog", "-h"]] {
            let cli = Cli::try_parse_from(args).unwrap();
            assert!(matches!(cli.command, Commands::Help));
        }
    }

    #[test]
    fn test_missing_command() {
        assert!(Cli::try_parse_from(["mergelog"]).is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert!(Cli::try_parse_from(["mergelog", "publish"]).is_err());
    }
}
