//! Configuration for structural validation
//!
//! Loaded from TOML (`~/.config/draft-domain/validation.toml` by default) or
//! JSON. A missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Validation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Language codes the service is known to accept. Empty accepts any code.
    pub known_languages: Vec<String>,
    /// Warn when editor notes are not in timestamp order
    pub check_note_order: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            known_languages: Vec::new(),
            check_note_order: true,
        }
    }
}

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid language code: '{0}'")]
    InvalidLanguage(String),
}

impl ValidationConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to restrict the accepted language codes
    pub fn with_known_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_languages = languages.into_iter().map(Into::into).collect();
        self
    }

    /// True if `language` is accepted by this configuration
    pub fn accepts_language(&self, language: &str) -> bool {
        self.known_languages.is_empty() || self.known_languages.iter().any(|l| l == language)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file; `.json` files are read as JSON, anything else as TOML
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content)?,
            _ => Self::from_toml(&content)?,
        };
        tracing::debug!("Loaded validation config from {:?}", path);
        Ok(config)
    }

    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("draft-domain").join("validation.toml"))
    }

    /// Load from the default location, falling back to defaults when absent
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        for language in &self.known_languages {
            if language.trim().is_empty() || language.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidLanguage(language.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidationConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.accepts_language("anything"));
        assert!(config.check_note_order);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ValidationConfig::new().with_known_languages(["nb", "nn", "en"]);
        let toml = config.to_toml().unwrap();
        let parsed = ValidationConfig::from_toml(&toml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ValidationConfig::from_toml(r#"known_languages = ["nb"]"#).unwrap();
        assert_eq!(config.known_languages, vec!["nb"]);
        assert!(config.check_note_order);
        assert!(config.accepts_language("nb"));
        assert!(!config.accepts_language("en"));
    }

    #[test]
    fn test_invalid_language_rejected() {
        let err = ValidationConfig::from_json(r#"{"known_languages": ["nb", " "]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLanguage(_)));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            ValidationConfig::from_toml("known_languages = 3"),
            Err(ConfigError::Parse(_))
        ));
    }
}
