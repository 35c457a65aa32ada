/// Narration-wide settings, loadable from RON.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Settings shared by every rendering pass of a story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrationConfig {
    /// One global narrative tense for authors who do not track it per
    /// character: `true` narrates in the past, `false` in the present.
    #[serde(default)]
    pub use_past_tense: bool,
    /// Joins the last two items of a list.
    #[serde(default = "default_conjunction")]
    pub list_conjunction: String,
    /// Rendered in place of an empty list.
    #[serde(default = "default_empty_list")]
    pub empty_list: String,
}

fn default_conjunction() -> String {
    "und".to_string()
}

fn default_empty_list() -> String {
    "nichts".to_string()
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            use_past_tense: false,
            list_conjunction: default_conjunction(),
            empty_list: default_empty_list(),
        }
    }
}

impl NarrationConfig {
    pub fn load_from_ron(path: &Path) -> Result<NarrationConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::parse_ron(&contents)?;
        tracing::debug!(path = %path.display(), ?config, "loaded narration config");
        Ok(config)
    }

    pub fn parse_ron(input: &str) -> Result<NarrationConfig, ConfigError> {
        Ok(ron::from_str(input)?)
    }

    pub fn set_past_tense(&mut self, past: bool) {
        self.use_past_tense = past;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = NarrationConfig::default();
        assert!(!config.use_past_tense);
        assert_eq!(config.list_conjunction, "und");
        assert_eq!(config.empty_list, "nichts");
    }

    #[test]
    fn partial_ron_fills_defaults() {
        let config = NarrationConfig::parse_ron("(use_past_tense: true)").unwrap();
        assert!(config.use_past_tense);
        assert_eq!(config.list_conjunction, "und");
    }

    #[test]
    fn bad_ron_is_an_error() {
        assert!(matches!(
            NarrationConfig::parse_ron("(use_past_tense: 12)"),
            Err(ConfigError::Ron(_))
        ));
    }

    #[test]
    fn set_past_tense() {
        let mut config = NarrationConfig::default();
        config.set_past_tense(true);
        assert!(config.use_past_tense);
    }

    #[test]
    fn load_test_config_from_ron() {
        let path = std::path::PathBuf::from("tests/fixtures/test_config.ron");
        let config = NarrationConfig::load_from_ron(&path).unwrap();
        assert!(config.use_past_tense);
        assert_eq!(config.list_conjunction, "sowie");
        assert_eq!(config.empty_list, "nichts");
    }
}
