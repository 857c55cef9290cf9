use crate::error::Result;
use crate::gateway::GatewayLatency;
use crate::ids::DEFAULT_ID_PREFIX;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for a board, stored in `<data dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardConfig {
    /// Prefix for note ids (`n` gives `n1`, `n2`, ...)
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    /// Simulated gateway round-trip times
    #[serde(default)]
    pub latency: GatewayLatency,

    /// Seed for the new-note color draw; random when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_seed: Option<u64>,
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            id_prefix: default_id_prefix(),
            latency: GatewayLatency::default(),
            color_seed: None,
        }
    }
}

impl BoardConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BoardConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.id_prefix, "n");
        assert_eq!(config.latency.save_ms, 200);
        assert_eq!(config.color_seed, None);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = BoardConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = BoardConfig {
            id_prefix: "card".into(),
            latency: GatewayLatency::zero(),
            color_seed: Some(11),
        };
        config.save(dir.path()).unwrap();

        let loaded = BoardConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: BoardConfig =
            serde_json::from_str(r#"{"latency":{"save_ms":5}}"#).unwrap();
        assert_eq!(parsed.id_prefix, "n");
        assert_eq!(parsed.latency.save_ms, 5);
        assert_eq!(parsed.latency.delete_ms, 150);
    }
}
