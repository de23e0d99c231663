//! CLI argument definitions using clap derive macros.

use clap::{ArgAction, ColorChoice, Parser, Subcommand};

use crate::commands::{DoctorCommand, SetupCommand};
use crate::error::CliError;

/// doctool - set up freshly generated Pandoc documentation projects
///
/// Prunes unused placeholders, writes .gitignore, checks for pandoc/yq/make,
/// installs Python dependencies, and makes the initial git commit.
#[derive(Debug, Parser)]
#[command(
    name = "doctool",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity level"
    )]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// When to use colors
    #[arg(
        long,
        global = true,
        default_value = "auto",
        value_enum,
        help = "When to use terminal colors"
    )]
    pub color: ColorChoice,

    /// Output format
    #[arg(
        long,
        global = true,
        default_value = "text",
        value_enum,
        help = "Output format (text, json)"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the post-generation setup tasks in a project directory
    #[command(visible_alias = "init")]
    Setup(SetupCommand),

    /// Check that pandoc, yq, make, pipenv and git are installed
    Doctor(DoctorCommand),
}

impl Cli {
    /// Execute the selected command
    pub async fn execute(self) -> Result<(), CliError> {
        let ctx = CommandContext {
            format: self.format,
            color: resolve_color(self.color),
            quiet: self.quiet,
        };

        match self.command {
            Command::Setup(cmd) => cmd.execute(&ctx).await,
            Command::Doctor(cmd) => cmd.execute(&ctx).await,
        }
    }
}

fn resolve_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => doctool_setup::auto_color(),
    }
}

/// Context passed to all commands
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub format: OutputFormat,
    pub color: bool,
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_setup_flags() {
        let cli = Cli::try_parse_from([
            "doctool",
            "-v",
            "setup",
            "docs",
            "--grammar-check",
            "false",
            "--no-git",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 1);
        match cli.command {
            Command::Setup(cmd) => {
                assert_eq!(cmd.project_dir, std::path::PathBuf::from("docs"));
                assert_eq!(cmd.grammar_check, Some(false));
                assert!(cmd.no_git);
                assert!(!cmd.no_install);
            }
            other => panic!("Expected setup command, got {other:?}"),
        }
    }

    #[test]
    fn test_init_alias() {
        let cli = Cli::try_parse_from(["doctool", "init"]).unwrap();
        assert!(matches!(cli.command, Command::Setup(_)));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["doctool", "-q", "-v", "doctor"]).is_err());
    }

    #[test]
    fn test_color_choice() {
        assert!(resolve_color(ColorChoice::Always));
        assert!(!resolve_color(ColorChoice::Never));
    }
}
