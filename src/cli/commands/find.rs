//! Find command implementation.
//!
//! The `vup find <name>` command prints the path of the first
//! `<root>/.venv/<name>` directory along the search roots.

use crate::cli::args::FindArgs;
use crate::environment::Invocation;
use crate::error::{Result, VupError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The find command implementation.
pub struct FindCommand {
    invocation: Invocation,
    args: FindArgs,
}

impl FindCommand {
    /// Create a new find command.
    pub fn new(invocation: &Invocation, args: FindArgs) -> Self {
        Self {
            invocation: invocation.clone(),
            args,
        }
    }
}

impl Command for FindCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolver = self.invocation.resolver();

        match resolver.find(&self.args.name, &self.invocation.cwd, !self.args.no_traverse) {
            Ok(path) => {
                ui.emit(&path.display().to_string());
                Ok(CommandResult::success())
            }
            Err(e @ VupError::VenvNotFound { .. }) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}
