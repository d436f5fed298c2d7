//! Creator settings resolution.
//!
//! Picks the interpreter used for venv creation using the priority chain:
//! 1. `VUP_PYTHON` environment variable
//! 2. Config `python`
//! 3. Fallback to `python3`

use std::fmt;

use crate::config::schema::VupConfig;
use crate::venv::{PythonVenvCreator, DEFAULT_PYTHON};

/// How the interpreter was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PythonSource {
    /// Set via `VUP_PYTHON`.
    Environment,
    /// Set via the config file.
    Config,
    /// Fallback to `python3`.
    Fallback,
}

impl fmt::Display for PythonSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment => write!(f, "VUP_PYTHON"),
            Self::Config => write!(f, "config file"),
            Self::Fallback => write!(f, "default"),
        }
    }
}

/// Resolved settings for the venv-creation facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatorSettings {
    pub python: String,
    pub source: PythonSource,
    pub venv_args: Vec<String>,
}

impl CreatorSettings {
    /// Resolve settings from the env override and the user config.
    ///
    /// # Example
    ///
    /// ```
    /// use vup::config::{CreatorSettings, PythonSource, VupConfig};
    ///
    /// let config = VupConfig {
    ///     python: Some("python3.11".to_string()),
    ///     ..Default::default()
    /// };
    /// let settings = CreatorSettings::resolve(Some("pypy3"), &config);
    /// assert_eq!(settings.python, "pypy3");
    /// assert_eq!(settings.source, PythonSource::Environment);
    /// ```
    pub fn resolve(env_override: Option<&str>, config: &VupConfig) -> Self {
        let (python, source) = if let Some(python) = env_override {
            (python.to_string(), PythonSource::Environment)
        } else if let Some(python) = &config.python {
            (python.clone(), PythonSource::Config)
        } else {
            (DEFAULT_PYTHON.to_string(), PythonSource::Fallback)
        };

        tracing::debug!(%python, %source, "resolved interpreter");

        Self {
            python,
            source,
            venv_args: config.venv_args.clone(),
        }
    }

    /// Build the production creator from these settings.
    pub fn creator(&self) -> PythonVenvCreator {
        PythonVenvCreator::new(self.python.clone()).with_args(self.venv_args.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_python(python: &str) -> VupConfig {
        VupConfig {
            python: Some(python.to_string()),
            venv_args: vec!["--upgrade-deps".to_string()],
        }
    }

    #[test]
    fn env_override_takes_highest_priority() {
        let settings = CreatorSettings::resolve(Some("pypy3"), &config_with_python("python3.11"));
        assert_eq!(settings.python, "pypy3");
        assert_eq!(settings.source, PythonSource::Environment);
    }

    #[test]
    fn config_second_priority() {
        let settings = CreatorSettings::resolve(None, &config_with_python("python3.11"));
        assert_eq!(settings.python, "python3.11");
        assert_eq!(settings.source, PythonSource::Config);
    }

    #[test]
    fn fallback_is_python3() {
        let settings = CreatorSettings::resolve(None, &VupConfig::default());
        assert_eq!(settings.python, "python3");
        assert_eq!(settings.source, PythonSource::Fallback);
    }

    #[test]
    fn venv_args_come_from_config_regardless_of_source() {
        let settings = CreatorSettings::resolve(Some("pypy3"), &config_with_python("python3.11"));
        assert_eq!(settings.venv_args, vec!["--upgrade-deps"]);
    }

    #[test]
    fn creator_carries_settings() {
        let settings = CreatorSettings::resolve(None, &config_with_python("python3.11"));
        let creator = settings.creator();
        assert_eq!(creator.python(), "python3.11");
        let args = creator.args_for(std::path::Path::new("/w/.venv/a"));
        assert_eq!(args, vec!["-m", "venv", "--upgrade-deps", "/w/.venv/a"]);
    }

    #[test]
    fn source_display() {
        assert_eq!(PythonSource::Environment.to_string(), "VUP_PYTHON");
        assert_eq!(PythonSource::Config.to_string(), "config file");
        assert_eq!(PythonSource::Fallback.to_string(), "default");
    }
}
