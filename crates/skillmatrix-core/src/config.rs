//! Configuration
//!
//! Optional TOML file at ~/.skillmatrix/config.toml:
//!
//! ```toml
//! [ui]
//! validation = "inline"   # or "silent"
//!
//! [logging]
//! level = "info"
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::paths;

/// How a rejected form submission is reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationFeedback {
    /// Show "Please fill in all fields" under the form
    #[default]
    Inline,
    /// Refuse the submit without a message
    Silent,
}

impl fmt::Display for ValidationFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline => f.write_str("inline"),
            Self::Silent => f.write_str("silent"),
        }
    }
}

impl FromStr for ValidationFeedback {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inline" => Ok(Self::Inline),
            "silent" => Ok(Self::Silent),
            other => anyhow::bail!(
                "unknown validation feedback '{}' (expected inline or silent)",
                other
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    pub validation: ValidationFeedback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// tracing filter directive for the log file
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Load from the default location
    pub fn load_default() -> Result<Self> {
        Self::load(&paths::config_file())
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.ui.validation, ValidationFeedback::Inline);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ui]\nvalidation = \"silent\"\n\n[logging]\nlevel = \"debug\"").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.ui.validation, ValidationFeedback::Silent);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = Config::parse("[logging]\nlevel = \"warn\"\n").unwrap();
        assert_eq!(config.ui.validation, ValidationFeedback::Inline);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(Config::parse("[ui]\ntheme = \"dracula\"\n").is_err());
        assert!(Config::parse("[storage]\npath = \"x\"\n").is_err());
        assert!(Config::parse("[ui]\nvalidation = \"loud\"\n").is_err());
    }

    #[test]
    fn test_invalid_file_has_context() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not = [valid").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid config"));
    }

    #[test]
    fn test_feedback_from_str() {
        assert_eq!(
            "Inline".parse::<ValidationFeedback>().unwrap(),
            ValidationFeedback::Inline
        );
        assert_eq!(
            " silent ".parse::<ValidationFeedback>().unwrap(),
            ValidationFeedback::Silent
        );
        assert!("verbose".parse::<ValidationFeedback>().is_err());
    }
}
