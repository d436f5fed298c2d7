//! Structural validation of a venv directory.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;

/// Relative location of the activation script inside a venv.
pub const ACTIVATE_SCRIPT: &str = "bin/activate";

/// Outcome of validating a candidate venv directory.
///
/// Checks run in declaration order and the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Validation {
    /// Nothing exists at the path.
    NotFound,
    /// Something exists, but it is not a directory.
    NotADirectory,
    /// A directory without a regular `bin/activate` file.
    MissingActivateScript,
    /// A directory with a regular `bin/activate` file.
    Valid,
}

impl Validation {
    /// Whether the venv passed every check.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Short human-readable reason, matching the CLI error wording.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::NotFound => "not found",
            Self::NotADirectory => "not a directory",
            Self::MissingActivateScript => "missing bin/activate",
            Self::Valid => "ok",
        }
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Validate that `path` is a usable venv.
///
/// Symlinks are followed, so a dangling link reports [`Validation::NotFound`].
pub fn validate(path: &Path) -> Validation {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(_) => return Validation::NotFound,
    };

    if !meta.is_dir() {
        return Validation::NotADirectory;
    }

    let has_activate = fs::metadata(path.join(ACTIVATE_SCRIPT))
        .map(|m| m.is_file())
        .unwrap_or(false);

    if has_activate {
        Validation::Valid
    } else {
        Validation::MissingActivateScript
    }
}
