use crate::core::Side;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_PATH: &str = "othello_config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OthelloConfig {
    pub version: String,
    pub search: SearchConfig,
    pub play: PlayConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub default_depth: usize,
    pub min_depth: usize,
    pub max_depth: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    pub human_side: Side,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub file: String,
    /// `tracing_subscriber` filter directive; `RUST_LOG` wins when set.
    pub level: String,
}

impl OthelloConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: OthelloConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| Self::default())
    }
}

impl SearchConfig {
    /// Keeps a requested depth inside the configured bounds, never below 1.
    pub fn clamp_depth(&self, depth: usize) -> usize {
        let min = self.min_depth.max(1);
        let max = self.max_depth.max(min);
        depth.clamp(min, max)
    }

    pub fn initial_depth(&self) -> usize {
        self.clamp_depth(self.default_depth)
    }
}

impl Default for OthelloConfig {
    fn default() -> Self {
        OthelloConfig {
            version: "1.0".to_string(),
            search: SearchConfig::default(),
            play: PlayConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            default_depth: 3,
            min_depth: 1,
            max_depth: 6,
        }
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            human_side: Side::Black,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: "othello.log".to_string(),
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OthelloConfig::default();
        assert_eq!(config.search.initial_depth(), 3);
        assert_eq!(config.play.human_side, Side::Black);
        assert_eq!(config.log.file, "othello.log");
    }

    #[test]
    fn test_clamp_depth() {
        let search = SearchConfig::default();
        assert_eq!(search.clamp_depth(0), 1);
        assert_eq!(search.clamp_depth(4), 4);
        assert_eq!(search.clamp_depth(9), 6);

        let broken = SearchConfig {
            default_depth: 0,
            min_depth: 0,
            max_depth: 0,
        };
        assert_eq!(broken.initial_depth(), 1);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: OthelloConfig =
            serde_json::from_str(r#"{ "search": { "default_depth": 5 }, "play": { "human_side": "White" } }"#)
                .unwrap();
        assert_eq!(config.search.default_depth, 5);
        assert_eq!(config.search.max_depth, 6);
        assert_eq!(config.play.human_side, Side::White);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_missing_file_falls_back() {
        assert!(OthelloConfig::load_from("no/such/othello_config.json").is_err());
    }
}
