//! Process inputs for one vup invocation.
//!
//! The current directory, the home directory, and the handful of environment
//! variables vup reads are captured once in `main` and passed down. Nothing
//! below the CLI layer reads process state on its own.

use std::ffi::OsString;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::venv::Resolver;

/// Names of the environment variables vup reads.
pub mod vars {
    /// Path of the venv active in the calling shell.
    pub const VIRTUAL_ENV: &str = "VIRTUAL_ENV";
    /// Interpreter override for venv creation.
    pub const VUP_PYTHON: &str = "VUP_PYTHON";
}

/// Everything a command needs to know about where and how it was invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Directory the command runs in (absolute).
    pub cwd: PathBuf,
    /// Home directory, the final search-root fallback.
    pub home: Option<PathBuf>,
    /// Venv active in the calling shell, from `VIRTUAL_ENV`.
    pub active_venv: Option<PathBuf>,
    /// Interpreter override, from `VUP_PYTHON`.
    pub python_override: Option<String>,
}

impl Invocation {
    /// Create an invocation with no active venv and no overrides.
    pub fn new(cwd: impl Into<PathBuf>, home: Option<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            home,
            active_venv: None,
            python_override: None,
        }
    }

    /// Set the active venv.
    pub fn with_active_venv(mut self, path: Option<PathBuf>) -> Self {
        self.active_venv = path;
        self
    }

    /// Set the interpreter override.
    pub fn with_python_override(mut self, python: Option<String>) -> Self {
        self.python_override = python;
        self
    }

    /// Capture the real process state.
    pub fn detect() -> io::Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::detect_with_env(cwd, dirs::home_dir(), |key| {
            std::env::var_os(key)
        }))
    }

    /// Capture state from a custom env var lookup (for testing).
    ///
    /// Empty values count as unset. An existing home directory is stored in
    /// its physical form so it compares equal to ancestors of `cwd`, which
    /// the OS always reports with symlinks resolved.
    pub fn detect_with_env<F>(cwd: PathBuf, home: Option<PathBuf>, env_fn: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let home = home.map(|h| h.canonicalize().unwrap_or(h));
        let non_empty = |key: &str| env_fn(key).filter(|v| !v.is_empty());

        let active_venv = non_empty(vars::VIRTUAL_ENV).map(PathBuf::from);
        let python_override = non_empty(vars::VUP_PYTHON).map(|v| v.to_string_lossy().into_owned());

        tracing::debug!(
            cwd = %cwd.display(),
            home = ?home,
            active_venv = ?active_venv,
            "captured invocation"
        );

        Self {
            cwd,
            home,
            active_venv,
            python_override,
        }
    }

    /// Resolve a user-supplied path against the invocation's directory.
    ///
    /// The result never contains `.` or `..`. Existing paths are
    /// canonicalized; anything else is collapsed lexically.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        let joined = self.cwd.join(path);
        joined
            .canonicalize()
            .unwrap_or_else(|_| normalize_lexically(&joined))
    }

    /// Home directory as a path reference.
    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// A resolver using this invocation's home directory as the fallback.
    pub fn resolver(&self) -> Resolver {
        Resolver::new(self.home.clone())
    }
}

/// Collapse `.` and `..` components without touching the filesystem.
///
/// `..` at the root stays at the root.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}
