//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::environment::Invocation;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for primary output and status lines
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    invocation: Invocation,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given invocation.
    pub fn new(invocation: Invocation) -> Self {
        Self { invocation }
    }

    /// Get the captured invocation.
    pub fn invocation(&self) -> &Invocation {
        &self.invocation
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        tracing::debug!(command = ?cli.command, "dispatching");

        match &cli.command {
            Commands::Help => super::help::HelpCommand::new().execute(ui),
            Commands::Validate(args) => {
                let cmd = super::validate::ValidateCommand::new(&self.invocation, args.clone());
                cmd.execute(ui)
            }
            Commands::Init => super::init::InitCommand::new(&self.invocation).execute(ui),
            Commands::New(args) => {
                let cmd = super::new::NewCommand::new(&self.invocation, args.clone());
                cmd.execute(ui)
            }
            Commands::Find(args) => {
                let cmd = super::find::FindCommand::new(&self.invocation, args.clone());
                cmd.execute(ui)
            }
            Commands::Ls(args) => {
                let cmd = super::list::ListCommand::new(&self.invocation, args.clone());
                cmd.execute(ui)
            }
            Commands::Prompt(args) => {
                let cmd = super::prompt::PromptCommand::new(&self.invocation, args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
