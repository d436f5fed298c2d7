//! The venv-creation facility.
//!
//! vup never lays out interpreter or library files itself. It hands a
//! destination path to a [`VenvCreator`] and re-validates whatever comes back.

use std::path::Path;

use crate::error::{Result, VupError};
use crate::shell;

/// Default interpreter used to run `-m venv`.
pub const DEFAULT_PYTHON: &str = "python3";

/// Something that can populate a new venv at a destination path.
pub trait VenvCreator {
    /// Create a venv at `dest`. `dest` does not exist when this is called.
    fn create_at(&self, dest: &Path) -> Result<()>;
}

/// Creates venvs with `<python> -m venv [args...] <dest>`.
#[derive(Debug, Clone)]
pub struct PythonVenvCreator {
    python: String,
    extra_args: Vec<String>,
}

impl PythonVenvCreator {
    /// Create a creator that runs the given interpreter.
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
            extra_args: Vec::new(),
        }
    }

    /// Pass extra arguments to `-m venv`, ahead of the destination.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    /// The interpreter this creator runs.
    pub fn python(&self) -> &str {
        &self.python
    }

    /// Full argument list for a destination.
    pub fn args_for(&self, dest: &Path) -> Vec<String> {
        let mut args = vec!["-m".to_string(), "venv".to_string()];
        args.extend(self.extra_args.iter().cloned());
        args.push(dest.to_string_lossy().into_owned());
        args
    }
}

impl Default for PythonVenvCreator {
    fn default() -> Self {
        Self::new(DEFAULT_PYTHON)
    }
}

impl VenvCreator for PythonVenvCreator {
    fn create_at(&self, dest: &Path) -> Result<()> {
        let args = self.args_for(dest);
        let result = shell::execute(&self.python, &args).map_err(|e| VupError::CreationError {
            path: dest.to_path_buf(),
            message: format!("could not run {}: {}", self.python, e),
        })?;

        if result.success {
            return Ok(());
        }

        let code = result
            .exit_code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "signal".to_string());
        let message = match result.last_diagnostic() {
            Some(line) => format!("{} -m venv exited with {}: {}", self.python, code, line),
            None => format!("{} -m venv exited with {}", self.python, code),
        };

        Err(VupError::CreationError {
            path: dest.to_path_buf(),
            message,
        })
    }
}
