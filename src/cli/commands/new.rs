//! New command implementation.
//!
//! The `vup new <name>` command creates `<cwd>/.venv/<name>` and prints its
//! absolute path, which the `vup` shell function then activates.

use crate::cli::args::NewArgs;
use crate::config::{load_user_config, CreatorSettings};
use crate::environment::Invocation;
use crate::error::{Result, VupError};
use crate::ui::UserInterface;
use crate::venv::{VenvCreator, VenvRepository};

use super::dispatcher::{Command, CommandResult};

/// The new command implementation.
pub struct NewCommand {
    invocation: Invocation,
    args: NewArgs,
}

impl NewCommand {
    /// Create a new `new` command.
    pub fn new(invocation: &Invocation, args: NewArgs) -> Self {
        Self {
            invocation: invocation.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &NewArgs {
        &self.args
    }

    /// Create the venv with an explicit creator.
    pub fn create_with(
        &self,
        creator: &dyn VenvCreator,
        label: &str,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let repo = VenvRepository::new(&self.invocation.cwd);
        let name = &self.args.name;

        let mut spinner = ui.start_spinner(&format!("Creating venv '{}' with {}", name, label));
        match repo.create_entry(name, creator) {
            Ok(path) => {
                spinner.finish_success(&format!("Created venv '{}'", name));
                ui.emit(&path.display().to_string());
                Ok(CommandResult::success())
            }
            Err(
                e @ (VupError::ContainerMissing { .. }
                | VupError::AlreadyExists { .. }
                | VupError::CreationError { .. }),
            ) => {
                spinner.clear();
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
            Err(e) => {
                spinner.clear();
                Err(e)
            }
        }
    }
}

impl Command for NewCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_user_config(self.invocation.home()) {
            Ok(config) => config,
            Err(e @ VupError::ConfigParseError { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let settings =
            CreatorSettings::resolve(self.invocation.python_override.as_deref(), &config);
        tracing::debug!(
            name = %self.args.name,
            python = %settings.python,
            source = %settings.source,
            "new venv"
        );

        let creator = settings.creator();
        self.create_with(&creator, &settings.python, ui)
    }
}
