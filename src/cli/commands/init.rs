//! Init command implementation.
//!
//! The `vup init` command creates the `.venv` container in the current
//! directory. It is deliberately not idempotent.

use std::path::PathBuf;

use crate::environment::Invocation;
use crate::error::{Result, VupError};
use crate::ui::UserInterface;
use crate::venv::VenvRepository;

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    root: PathBuf,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(invocation: &Invocation) -> Self {
        Self {
            root: invocation.cwd.clone(),
        }
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let repo = VenvRepository::new(&self.root);

        match repo.init_container() {
            Ok(path) => {
                ui.success(&format!("Created {}", path.display()));
                Ok(CommandResult::success())
            }
            Err(e @ (VupError::AlreadyExists { .. } | VupError::CreationError { .. })) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}
