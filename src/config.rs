//! Panel behavior settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// What to do with channel text that does not parse as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsePolicy {
    /// Substitute the maximum channel value (255).
    #[default]
    FailOpen,
    /// Put the pre-edit text back and leave the color alone.
    Revert,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Paint each slider track with the colors its channel sweeps through.
    /// When off, tracks get a tint of the channel's own value.
    pub gradient_tracks: bool,
    pub parse_policy: ParsePolicy,
    /// Caption of the accessory button that ends text editing.
    pub done_label: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            gradient_tracks: cfg!(feature = "gradient"),
            parse_policy: ParsePolicy::default(),
            done_label: "Done".to_string(),
        }
    }
}

impl PanelConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fails_open_with_done_label() {
        let config = PanelConfig::default();
        assert_eq!(config.parse_policy, ParsePolicy::FailOpen);
        assert_eq!(config.done_label, "Done");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = PanelConfig::from_toml_str("parse_policy = \"revert\"\n").unwrap();
        assert_eq!(config.parse_policy, ParsePolicy::Revert);
        assert_eq!(config.done_label, "Done");
        assert_eq!(config.gradient_tracks, PanelConfig::default().gradient_tracks);
    }

    #[test]
    fn full_toml() {
        let config = PanelConfig::from_toml_str(
            "gradient_tracks = false\nparse_policy = \"fail_open\"\ndone_label = \"OK\"\n",
        )
        .unwrap();
        assert!(!config.gradient_tracks);
        assert_eq!(config.done_label, "OK");
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let err = PanelConfig::from_toml_str("parse_policy = \"sometimes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let path = std::env::temp_dir().join("floem-rgb-panel-no-such-config.toml");
        let err = PanelConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }
}
