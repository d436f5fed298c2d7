//! The `.venv` container inside one root directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, VupError};

use super::creator::VenvCreator;
use super::validator::{validate, Validation};

/// Name of the container directory holding a root's venvs.
pub const CONTAINER_DIR: &str = ".venv";

/// `root/.venv`. Pure path arithmetic, no I/O.
pub fn container_path(root: &Path) -> PathBuf {
    root.join(CONTAINER_DIR)
}

/// A directory inside a `.venv` container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenvEntry {
    /// The venv's name (its directory name).
    pub name: String,
    /// `root/.venv/name`.
    pub path: PathBuf,
    /// Validation outcome at listing time.
    pub status: Validation,
}

impl VenvEntry {
    /// Whether the entry passed validation.
    pub fn is_valid(&self) -> bool {
        self.status.is_valid()
    }
}

/// Operations scoped to one root's `.venv` container.
#[derive(Debug, Clone)]
pub struct VenvRepository {
    root: PathBuf,
}

impl VenvRepository {
    /// Create a repository for the given root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `root/.venv`.
    pub fn container_path(&self) -> PathBuf {
        container_path(&self.root)
    }

    /// `root/.venv/name`.
    pub fn entry_path(&self, name: &str) -> PathBuf {
        self.container_path().join(name)
    }

    /// Whether the container exists as a directory.
    pub fn has_container(&self) -> bool {
        self.container_path().is_dir()
    }

    /// Create an empty `.venv` container.
    ///
    /// Anything already at the path, even a plain file or a dangling
    /// symlink, makes this fail with [`VupError::AlreadyExists`].
    pub fn init_container(&self) -> Result<PathBuf> {
        let container = self.container_path();

        if fs::symlink_metadata(&container).is_ok() {
            return Err(VupError::AlreadyExists { path: container });
        }

        match fs::create_dir(&container) {
            Ok(()) => {
                tracing::debug!(path = %container.display(), "created container");
                Ok(container)
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                Err(VupError::AlreadyExists { path: container })
            }
            Err(e) => Err(VupError::CreationError {
                path: container,
                message: e.to_string(),
            }),
        }
    }

    /// Create a new venv named `name` using `creator`.
    ///
    /// The container must already exist. The result is re-validated, so a
    /// creator that reports success but leaves no `bin/activate` still fails.
    pub fn create_entry(&self, name: &str, creator: &dyn VenvCreator) -> Result<PathBuf> {
        if !self.has_container() {
            return Err(VupError::ContainerMissing {
                root: self.root.clone(),
            });
        }

        let dest = self.entry_path(name);
        if fs::symlink_metadata(&dest).is_ok() {
            return Err(VupError::AlreadyExists { path: dest });
        }

        tracing::debug!(name, path = %dest.display(), "creating venv");

        // Another process can create `dest` between the check above and this
        // call. The creator then fails on its own and that failure is final.
        match creator.create_at(&dest) {
            Ok(()) => {}
            Err(e @ VupError::CreationError { .. }) => return Err(e),
            Err(e) => {
                return Err(VupError::CreationError {
                    path: dest,
                    message: e.to_string(),
                })
            }
        }

        match validate(&dest) {
            Validation::Valid => Ok(dest),
            outcome => Err(VupError::CreationError {
                path: dest,
                message: format!("created venv is unusable ({})", outcome),
            }),
        }
    }

    /// List the container's subdirectories in lexical name order.
    ///
    /// A missing container (or one that is not a directory) yields an empty
    /// list. Broken venvs are included with their validation outcome.
    pub fn list_entries(&self) -> Result<Vec<VenvEntry>> {
        let container = self.container_path();
        if !container.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(&container)? {
            let dir_entry = dir_entry?;
            let path = dir_entry.path();
            if !path.is_dir() {
                continue;
            }

            let name = dir_entry.file_name().to_string_lossy().into_owned();
            let status = validate(&path);
            entries.push(VenvEntry { name, path, status });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}
