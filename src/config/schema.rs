//! Configuration schema for `~/.vup/config.yml`.

use serde::{Deserialize, Serialize};

/// User configuration.
///
/// Every field is optional; an absent file behaves like an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VupConfig {
    /// Interpreter used to run `-m venv` (e.g. `python3.12`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,

    /// Extra arguments passed to `-m venv`, before the destination
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub venv_args: Vec<String>,
}
