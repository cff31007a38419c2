//! Engine configuration.
//!
//! Loaded from a JSON file by the runner; tests use
//! `EngineConfig::default_test()`. Every field has a default, so a
//! config file only needs to name what it overrides.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReductionConfig {
    /// When a reduction leaves the main record alive, subordinate
    /// replicas with no copy of the entity learn of it (as a redacted
    /// copy of the reduced main record). When the main record is
    /// removed, nothing is ever synthesized.
    pub learn_unknown: bool,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self { learn_unknown: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelingConfig {
    /// Size of the training roll: per-worker conditions are drawn from
    /// `[0, roll_sides)`.
    pub roll_sides: u32,
}

impl Default for LevelingConfig {
    fn default() -> Self {
        Self { roll_sides: 100 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub reduction: ReductionConfig,
    pub leveling:  LevelingConfig,
}

impl EngineConfig {
    /// Load from a JSON file.
    /// In tests, use EngineConfig::default_test().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        if config.leveling.roll_sides == 0 {
            anyhow::bail!("{path}: leveling.roll_sides must be > 0");
        }
        Ok(config)
    }

    pub fn default_test() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "reduction": { "learn_unknown": false } }"#).unwrap();
        assert!(!config.reduction.learn_unknown);
        assert_eq!(config.leveling.roll_sides, 100);
    }
}
