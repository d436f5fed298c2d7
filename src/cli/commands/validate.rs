//! Validate command implementation.
//!
//! The `vup validate <path>` command checks that a path is a usable venv.
//! Exit codes: 0 valid, 1 not found, 2 not a directory, 3 missing
//! `bin/activate`.

use std::path::PathBuf;

use crate::cli::args::ValidateArgs;
use crate::environment::Invocation;
use crate::error::{Result, VupError};
use crate::ui::UserInterface;
use crate::venv::{validate, Validation};

use super::dispatcher::{Command, CommandResult};

/// The validate command implementation.
pub struct ValidateCommand {
    path: PathBuf,
}

impl ValidateCommand {
    /// Create a new validate command; relative paths resolve against the
    /// invocation's directory.
    pub fn new(invocation: &Invocation, args: ValidateArgs) -> Self {
        Self {
            path: invocation.resolve(&args.path),
        }
    }
}

/// Exit code reported for each validation outcome.
pub fn exit_code(validation: Validation) -> i32 {
    match validation {
        Validation::Valid => 0,
        Validation::NotFound => 1,
        Validation::NotADirectory => 2,
        Validation::MissingActivateScript => 3,
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let validation = validate(&self.path);
        tracing::debug!(path = %self.path.display(), %validation, "validated");

        let path = self.path.clone();
        let error = match validation {
            Validation::Valid => {
                ui.success(&format!("{}: ok", path.display()));
                return Ok(CommandResult::success());
            }
            Validation::NotFound => VupError::NotFound { path },
            Validation::NotADirectory => VupError::NotADirectory { path },
            Validation::MissingActivateScript => VupError::MissingActivateScript { path },
        };

        ui.error(&error.to_string());
        Ok(CommandResult::failure(exit_code(validation)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn run(temp: &TempDir, path: &str) -> (CommandResult, MockUI) {
        let invocation = Invocation::new(temp.path(), None);
        let cmd = ValidateCommand::new(
            &invocation,
            ValidateArgs {
                path: PathBuf::from(path),
            },
        );
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn valid_venv_exits_zero() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("v/bin")).unwrap();
        fs::write(temp.path().join("v/bin/activate"), "").unwrap();

        let (result, ui) = run(&temp, "v");

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert!(ui.errors().is_empty());
        assert!(ui.emitted().is_empty());
    }

    #[test]
    fn missing_path_exits_one() {
        let temp = TempDir::new().unwrap();
        let (result, ui) = run(&temp, "nope");

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("not found"));
    }

    #[test]
    fn file_exits_two() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("file"), "").unwrap();

        let (result, ui) = run(&temp, "file");

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("not a directory"));
    }

    #[test]
    fn directory_without_activate_exits_three() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("empty")).unwrap();

        let (result, ui) = run(&temp, "empty");

        assert_eq!(result.exit_code, 3);
        assert!(ui.has_error("missing bin/activate"));
    }

    #[test]
    fn absolute_paths_ignore_cwd() {
        let temp = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        fs::create_dir(other.path().join("x")).unwrap();

        let abs = other.path().join("x");
        let (result, _) = run(&temp, abs.to_str().unwrap());

        assert_eq!(result.exit_code, 3);
    }

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            exit_code(Validation::Valid),
            exit_code(Validation::NotFound),
            exit_code(Validation::NotADirectory),
            exit_code(Validation::MissingActivateScript),
        ];
        assert_eq!(codes, [0, 1, 2, 3]);
    }
}
