//! User configuration discovery and loading.

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::VupConfig;
use crate::error::{Result, VupError};

/// User config location relative to the home directory.
pub const USER_CONFIG: &str = ".vup/config.yml";

/// `~/.vup/config.yml`, if there is a home directory.
pub fn user_config_path(home: Option<&Path>) -> Option<PathBuf> {
    home.map(|h| h.join(USER_CONFIG))
}

/// Load the user config, treating a missing file as empty.
///
/// # Errors
///
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_user_config(home: Option<&Path>) -> Result<VupConfig> {
    let Some(path) = user_config_path(home) else {
        return Ok(VupConfig::default());
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no user config");
        return Ok(VupConfig::default());
    }

    load_config_file(&path)
}

/// Load and parse a single config file.
pub fn load_config_file(path: &Path) -> Result<VupConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;

    parse_config(&content, path)
}

/// Parse YAML content into VupConfig.
///
/// An empty document is an empty config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<VupConfig> {
    if content.trim().is_empty() {
        return Ok(VupConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| VupError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
