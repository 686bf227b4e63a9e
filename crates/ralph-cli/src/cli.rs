//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// Ralph - Install and update the autonomous coding loop in a project
#[derive(Parser, Debug)]
#[command(name = "ralph")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Install ralph into the current directory
    ///
    /// Asks a few configuration questions, copies the core assets into
    /// .ralph/, mirrors commands into .gemini/commands, and writes the
    /// ./ralph launcher.
    Install,

    /// Refresh the core assets of an existing installation
    ///
    /// Keeps .ralph/config.json as it is apart from its version.
    Update,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_install() {
        let cli = Cli::try_parse_from(["ralph", "install"]).unwrap();
        assert_eq!(cli.command, Commands::Install);
    }

    #[test]
    fn parse_update() {
        let cli = Cli::try_parse_from(["ralph", "update"]).unwrap();
        assert_eq!(cli.command, Commands::Update);
    }

    #[test]
    fn only_help_and_version_flags_exist() {
        assert!(Cli::try_parse_from(["ralph", "update", "--verbose"]).is_err());
        assert!(Cli::try_parse_from(["ralph", "install", "--distribution", "/opt/ralph"]).is_err());
    }

    #[test]
    fn command_is_required() {
        assert!(Cli::try_parse_from(["ralph"]).is_err());
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["ralph", "uninstall"]).is_err());
    }
}
