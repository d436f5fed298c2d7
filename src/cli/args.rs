//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.
//!
//! `vup-core` is normally driven by the `vup` shell function, which captures
//! stdout. Argument errors are reported before anything touches the
//! filesystem.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::ffi::OsString;
use std::path::PathBuf;

/// vup-core - Python virtual environment manager backend.
#[derive(Debug, Parser)]
#[command(name = "vup-core")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true, disable_help_subcommand = true)]
pub struct Cli {
    /// Suppress status lines (paths and listings are still printed)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show usage for the vup shell function
    Help,

    /// Check that a path is a usable venv
    Validate(ValidateArgs),

    /// Create a .venv container in the current directory
    Init,

    /// Create a new venv in the current directory's .venv
    New(NewArgs),

    /// Print the path of a venv, searching upward from the current directory
    Find(FindArgs),

    /// List venvs visible from a directory
    #[command(visible_alias = "list")]
    Ls(LsArgs),

    /// Print the shell prompt label for a venv path
    Prompt(PromptArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ValidateArgs {
    /// Path to check
    pub path: PathBuf,
}

/// Arguments for the `new` command.
#[derive(Debug, Clone, clap::Args)]
pub struct NewArgs {
    /// Name of the venv to create
    #[arg(value_parser = parse_venv_name)]
    pub name: String,
}

/// Arguments for the `find` command.
#[derive(Debug, Clone, clap::Args)]
pub struct FindArgs {
    /// Name of the venv to find
    #[arg(value_parser = parse_venv_name)]
    pub name: String,

    /// Only search the current directory, then home
    #[arg(long)]
    pub no_traverse: bool,
}

/// Arguments for the `ls` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LsArgs {
    /// Directory to start searching from (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub start_dir: Option<PathBuf>,

    /// Only list the starting directory, then home
    #[arg(long)]
    pub no_traverse: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `prompt` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PromptArgs {
    /// Absolute path of the venv (may be empty)
    pub path: OsString,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Validate a venv name given on the command line.
///
/// A name is a single directory entry under `.venv`, so it can be neither
/// empty, `.`, `..`, nor contain a path separator.
pub fn parse_venv_name(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("venv name cannot be empty".to_string());
    }
    if s == "." || s == ".." {
        return Err(format!("'{}' is not a valid venv name", s));
    }
    if s.contains('/') || s.contains(std::path::MAIN_SEPARATOR) {
        return Err(format!("venv name '{}' cannot contain a path separator", s));
    }
    Ok(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("vup-core").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_find_with_no_traverse() {
        let cli = parse(&["find", "dev", "--no-traverse"]).unwrap();
        match cli.command {
            Commands::Find(args) => {
                assert_eq!(args.name, "dev");
                assert!(args.no_traverse);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_ls_options() {
        let cli = parse(&["ls", "--start-dir", "/tmp/x", "--json"]).unwrap();
        match cli.command {
            Commands::Ls(args) => {
                assert_eq!(args.start_dir, Some(PathBuf::from("/tmp/x")));
                assert!(args.json);
                assert!(!args.no_traverse);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn list_is_an_alias_for_ls() {
        let cli = parse(&["list"]).unwrap();
        assert!(matches!(cli.command, Commands::Ls(_)));
    }

    #[test]
    fn help_is_a_plain_subcommand() {
        let cli = parse(&["help"]).unwrap();
        assert!(matches!(cli.command, Commands::Help));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["init", "--quiet", "--debug"]).unwrap();
        assert!(cli.quiet);
        assert!(cli.debug);
        assert!(matches!(cli.command, Commands::Init));
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn missing_positional_is_an_error() {
        let err = parse(&["new"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        assert!(parse(&["validate"]).is_err());
        assert!(parse(&["prompt"]).is_err());
    }

    #[test]
    fn prompt_accepts_an_empty_path() {
        let cli = parse(&["prompt", ""]).unwrap();
        match cli.command {
            Commands::Prompt(args) => assert!(args.path.is_empty()),
            other => panic!("Expected Prompt command, got {:?}", other),
        }
    }

    #[test]
    fn bad_venv_names_are_rejected_at_parse_time() {
        for name in ["", ".", "..", "a/b"] {
            assert!(parse(&["new", name]).is_err(), "accepted {:?}", name);
            assert!(parse(&["find", name]).is_err(), "accepted {:?}", name);
        }
    }

    #[test]
    fn parse_venv_name_accepts_ordinary_names() {
        assert_eq!(parse_venv_name("dev"), Ok("dev".to_string()));
        assert_eq!(parse_venv_name("py3.12-tools"), Ok("py3.12-tools".to_string()));
        assert_eq!(parse_venv_name(".hidden"), Ok(".hidden".to_string()));
    }

    #[test]
    fn parse_venv_name_messages() {
        assert_eq!(
            parse_venv_name("").unwrap_err(),
            "venv name cannot be empty"
        );
        assert!(parse_venv_name("..").unwrap_err().contains("not a valid"));
        assert!(parse_venv_name("x/y").unwrap_err().contains("separator"));
    }
}
