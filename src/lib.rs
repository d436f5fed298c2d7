//! vup - Python virtual environment manager.
//!
//! vup keeps named venvs in per-directory `.venv/` containers and finds them
//! by walking up from the current directory, falling back to `~/.venv`. This
//! crate is the `vup-core` backend; a small shell function calls it and
//! activates whatever path it prints.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional user configuration (`~/.vup/config.yml`)
//! - [`environment`] - Process inputs captured once per invocation
//! - [`error`] - Error types and result aliases
//! - [`shell`] - External process execution
//! - [`ui`] - Terminal output, spinners and tables
//! - [`venv`] - Validation, creation, lookup, listing and prompt labels
//!
//! # Example
//!
//! ```
//! use vup::venv::{validate, Validation, VenvRepository};
//! use tempfile::TempDir;
//!
//! let project = TempDir::new().unwrap();
//! let repo = VenvRepository::new(project.path());
//! repo.init_container().unwrap();
//!
//! assert!(repo.has_container());
//! assert_eq!(validate(&repo.entry_path("dev")), Validation::NotFound);
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod shell;
pub mod ui;
pub mod venv;

pub use error::{Result, VupError};
