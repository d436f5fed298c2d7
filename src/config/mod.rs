//! Configuration loading for vup.
//!
//! vup works without any configuration. The optional user config at
//! `~/.vup/config.yml` only tunes how new venvs are created:
//!
//! ```yaml
//! python: python3.12
//! venv_args: [--upgrade-deps]
//! ```
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Priority resolution against `VUP_PYTHON` in [`resolver`]
//!
//! # Example
//!
//! ```
//! use vup::config::load_user_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let home = TempDir::new().unwrap();
//! fs::create_dir_all(home.path().join(".vup")).unwrap();
//! fs::write(home.path().join(".vup/config.yml"), "python: python3.12").unwrap();
//!
//! let config = load_user_config(Some(home.path())).unwrap();
//! assert_eq!(config.python, Some("python3.12".to_string()));
//! ```

pub mod loader;
pub mod resolver;
pub mod schema;

pub use loader::{load_config_file, load_user_config, parse_config, user_config_path};
pub use resolver::{CreatorSettings, PythonSource};
pub use schema::VupConfig;
