//! Configuration management for fecsim tools

use anyhow::{Context, Result};
use fecsim_core::prelude::*;
use fecsim_frame::prelude::PipelineParams;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The four user-supplied simulation inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Binary frame, `'0'`/`'1'` characters only
    pub frame: String,
    /// Redundancy order `n`
    pub redundancy: usize,
    /// Word length `m`
    pub word_length: usize,
    /// Depth `t`
    pub depth: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frame: "0110".to_string(),
            redundancy: 3,
            word_length: 3,
            depth: 2,
        }
    }
}

impl SimulationConfig {
    /// Check the inputs and convert them for the pipeline.
    ///
    /// The frame must be non-empty and binary; every parameter must be at
    /// least 1.
    pub fn validate(&self) -> Result<(BitFrame, PipelineParams)> {
        let frame = BitFrame::parse_non_empty(&self.frame)?;
        let params = PipelineParams::new(self.redundancy, self.word_length, self.depth)?;
        Ok((frame, params))
    }

    /// Load configuration from a JSON or TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        // Try JSON first, then TOML
        if let Ok(config) = serde_json::from_str(&content) {
            return Ok(config);
        }

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Save configuration; `.json` files get JSON, anything else TOML
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = if path.extension().and_then(|s| s.to_str()) == Some("json") {
            serde_json::to_string_pretty(self).context("Failed to serialize config")?
        } else {
            toml::to_string_pretty(self).context("Failed to serialize config")?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_serialization() {
        let config = SimulationConfig {
            frame: "1011".to_string(),
            redundancy: 5,
            word_length: 4,
            depth: 3,
        };

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();

        config.save_to_file(&path).unwrap();
        let loaded = SimulationConfig::from_file(&path).unwrap();

        assert_eq!(config, loaded);
    }

    #[test]
    fn test_json_config() {
        let temp_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        let config = SimulationConfig::default();

        config.save_to_file(temp_file.path()).unwrap();
        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.trim_start().starts_with('{'));

        assert_eq!(SimulationConfig::from_file(temp_file.path()).unwrap(), config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "frame = \"111\"\ndepth = 4\n").unwrap();

        let loaded = SimulationConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(loaded.frame, "111");
        assert_eq!(loaded.depth, 4);
        assert_eq!(loaded.redundancy, 3);
        assert_eq!(loaded.word_length, 3);
    }

    #[test]
    fn test_validate() {
        let (frame, params) = SimulationConfig::default().validate().unwrap();
        assert_eq!(frame.to_string(), "0110");
        assert_eq!(params.group_size(), 6);

        let bad_frame = SimulationConfig {
            frame: "01x".to_string(),
            ..Default::default()
        };
        let err = bad_frame.validate().unwrap_err();
        assert!(err.to_string().contains("'x'"));

        let empty = SimulationConfig {
            frame: String::new(),
            ..Default::default()
        };
        assert!(empty.validate().is_err());

        let zero_depth = SimulationConfig {
            depth: 0,
            ..Default::default()
        };
        assert!(zero_depth.validate().unwrap_err().to_string().contains("depth"));
    }

    #[test]
    fn test_missing_file() {
        assert!(SimulationConfig::from_file(Path::new("/nonexistent/fecsim.toml")).is_err());
    }
}
