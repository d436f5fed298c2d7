//! Venv discovery, validation, and creation.
//!
//! A venv lives at `<root>/.venv/<name>`. Any directory can be a root; the
//! `.venv` container inside it is created once by `vup init`.
//!
//! - [`validator`] - what makes a directory a usable venv
//! - [`repository`] - one root's container: init, create, list
//! - [`creator`] - the external facility that populates a new venv
//! - [`resolver`] - finding a venv by name from a starting directory
//! - [`catalog`] - listing venvs across all search roots
//! - [`label`] - short labels for shell prompts

pub mod catalog;
pub mod creator;
pub mod label;
pub mod repository;
pub mod resolver;
pub mod validator;

pub use catalog::{Catalog, CatalogEntry};
pub use creator::{PythonVenvCreator, VenvCreator, DEFAULT_PYTHON};
pub use label::label;
pub use repository::{container_path, VenvEntry, VenvRepository, CONTAINER_DIR};
pub use resolver::Resolver;
pub use validator::{validate, Validation, ACTIVATE_SCRIPT};
