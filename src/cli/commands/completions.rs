//! Shell completions generation.
//!
//! The `vup-core completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::UserInterface;
use clap::CommandFactory;
use clap_complete::Shell;

use super::dispatcher::{Command, CommandResult};

/// Name the completion scripts are registered under.
const BIN_NAME: &str = "vup-core";

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

/// Render the completion script for `shell`.
pub fn render(shell: Shell) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

impl Command for CompletionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        for line in render(self.args.shell).lines() {
            ui.emit(line);
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn generates_bash_completions() {
        let output = render(Shell::Bash);
        assert!(output.contains("vup-core"));
        assert!(output.contains("complete"));
    }

    #[test]
    fn generates_zsh_completions() {
        let output = render(Shell::Zsh);
        assert!(output.contains("vup-core"));
    }

    #[test]
    fn generates_fish_completions() {
        let output = render(Shell::Fish);
        assert!(output.contains("vup-core"));
        assert!(output.contains("validate"));
    }

    #[test]
    fn command_emits_script_on_stdout() {
        let mut ui = MockUI::new();
        let cmd = CompletionsCommand::new(CompletionsArgs { shell: Shell::Bash });

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.stdout().contains("vup-core"));
        assert!(ui.messages().is_empty());
    }
}
