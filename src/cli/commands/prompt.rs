//! Prompt command implementation.
//!
//! `vup prompt <path>` prints the short label the shell shows for an active
//! venv. Formatting is best effort and always exits 0.

use std::path::PathBuf;

use crate::cli::args::PromptArgs;
use crate::environment::Invocation;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::venv::label;

use super::dispatcher::{Command, CommandResult};

/// The prompt command implementation.
pub struct PromptCommand {
    path: PathBuf,
    home: Option<PathBuf>,
}

impl PromptCommand {
    /// Create a new prompt command.
    pub fn new(invocation: &Invocation, args: PromptArgs) -> Self {
        Self {
            path: PathBuf::from(args.path),
            home: invocation.home.clone(),
        }
    }
}

impl Command for PromptCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.emit(&label(&self.path, self.home.as_deref()));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::ffi::OsString;

    fn run(path: &str) -> MockUI {
        let invocation = Invocation::new("/", Some(PathBuf::from("/home/dev")));
        let cmd = PromptCommand::new(
            &invocation,
            PromptArgs {
                path: OsString::from(path),
            },
        );
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
        ui
    }

    #[test]
    fn home_venv_label() {
        assert_eq!(run("/home/dev/.venv/test").stdout(), "~/test");
    }

    #[test]
    fn project_venv_label() {
        assert_eq!(run("/home/dev/myproject/.venv/dev").stdout(), "myproject/dev");
    }

    #[test]
    fn odd_paths_still_succeed() {
        assert_eq!(run("/opt/envs/tool").stdout(), "tool");
    }

    #[test]
    fn empty_path_prints_an_empty_label() {
        let ui = run("");
        assert_eq!(ui.emitted(), [String::new()]);
        assert!(ui.errors().is_empty());
    }
}
