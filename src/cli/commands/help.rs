//! Help command implementation.
//!
//! `vup-core help` prints usage for the `vup` shell function, which is what
//! people actually type. clap's own `--help` still documents `vup-core`.

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Usage text for the `vup` shell function.
pub const USAGE: &str = "\
vup - Python virtual environment manager

Usage:
  vup <name>            Activate venv <name> (./.venv, parent dirs, then ~/.venv)
  vup init              Create a .venv container in the current directory
  vup new <name>        Create venv <name> in ./.venv and activate it
  vup ls                List venvs visible from here (* marks the active one)
  vup find <name>       Print the path of venv <name>
  vup validate <path>   Check that <path> is a usable venv
  vup prompt <path>     Print the prompt label for a venv path
  vup help              Show this help

Options:
  find --no-traverse    Only look in ./.venv, then ~/.venv
  ls --start-dir <dir>  List starting from <dir> instead of the current directory
  ls --json             Print the listing as JSON

Environment:
  VUP_PYTHON            Interpreter used by 'vup new' (default: python3)
  VIRTUAL_ENV           Active venv, marked with * in 'vup ls'

Config file: ~/.vup/config.yml (keys: python, venv_args)";

/// The help command implementation.
#[derive(Debug, Default)]
pub struct HelpCommand;

impl HelpCommand {
    /// Create a new help command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        for line in USAGE.lines() {
            ui.emit(line);
        }
        Ok(CommandResult::success())
    }
}
