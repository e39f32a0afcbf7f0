//! Configuration for the string codec

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Codec configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Escape quotes, backslash and question mark when encoding
    pub escape_quoting: bool,
    /// Re-escape canonicalized text instead of returning it fully literal
    pub canonical_escape: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            escape_quoting: true,
            canonical_escape: true,
        }
    }
}

impl CodecConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CodecConfig = serde_json::from_str(&content)?;
        log::debug!("loaded codec config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from `path` or fall back to the defaults
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring codec config {}: {}", path.display(), e);
                Self::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    #[test]
    fn test_config_default() {
        let config = CodecConfig::default();
        assert!(config.escape_quoting);
        assert!(config.canonical_escape);
    }

    #[test]
    fn test_config_partial_json() {
        let config: CodecConfig = serde_json::from_str(r#"{"escape_quoting": false}"#).unwrap();
        assert!(!config.escape_quoting);
        assert!(config.canonical_escape);
    }

    #[test]
    fn test_config_save_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codec.json");
        let config = CodecConfig {
            escape_quoting: false,
            canonical_escape: false,
        };
        config.save(&path).unwrap();
        assert_eq!(CodecConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_config_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(CodecConfig::load(&missing), Err(CodecError::Io(_))));
        assert_eq!(CodecConfig::load_or_default(&missing), CodecConfig::default());

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(CodecConfig::load(&broken), Err(CodecError::Json(_))));
        assert_eq!(CodecConfig::load_or_default(&broken), CodecConfig::default());
    }
}
