//! Persistent CLI configuration.

use std::path::{Path, PathBuf};

use bogey_core::config::StatsConfig;
use bogey_core::util::normalize_text_option;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.json";

pub const GOLFER_ENV: &str = "BOGEY_GOLFER";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default = "default_config_version")]
    pub version: u32,
    /// Golfer identity used when none is given on the command line
    #[serde(default)]
    pub golfer: Option<String>,
    #[serde(default)]
    pub stats: StatsConfig,
}

const fn default_config_version() -> u32 {
    1
}

pub fn default_config_path() -> Result<PathBuf, String> {
    dirs::config_dir()
        .map(|dir| dir.join("bogey").join(CONFIG_FILE_NAME))
        .ok_or_else(|| "Failed to resolve CLI config directory".to_string())
}

/// First non-empty of the flag, the environment and the config file
pub fn pick_golfer(
    explicit: Option<&str>,
    from_env: Option<String>,
    configured: Option<&str>,
) -> Option<String> {
    normalize_text_option(explicit.map(str::to_string))
        .or_else(|| normalize_text_option(from_env))
        .or_else(|| normalize_text_option(configured.map(str::to_string)))
}

impl CliConfig {
    pub fn load() -> Result<Self, String> {
        Self::load_from_path(&default_config_path()?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|error| format!("Failed to read config at {}: {}", path.display(), error))?;
        let mut config = serde_json::from_str::<Self>(&raw)
            .map_err(|error| format!("Failed to parse config at {}: {}", path.display(), error))?;
        config.normalize();
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf, String> {
        let path = default_config_path()?;
        self.save_to_path(&path)?;
        Ok(path)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    error
                )
            })?;
        }

        let mut normalized = self.clone();
        normalized.normalize();
        let serialized = serde_json::to_string_pretty(&normalized)
            .map_err(|error| format!("Failed to serialize config: {error}"))?;
        std::fs::write(path, serialized)
            .map_err(|error| format!("Failed to write config at {}: {}", path.display(), error))
    }

    /// Golfer from `--golfer`, then `BOGEY_GOLFER`, then the config file
    pub fn resolve_golfer(&self, explicit: Option<&str>) -> Option<String> {
        pick_golfer(
            explicit,
            std::env::var(GOLFER_ENV).ok(),
            self.golfer.as_deref(),
        )
    }

    fn normalize(&mut self) {
        self.golfer = normalize_text_option(self.golfer.take());
        self.stats = self.stats.normalized();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn pick_golfer_prefers_flag_then_env_then_config() {
        assert_eq!(
            pick_golfer(Some("flag"), Some("env".into()), Some("file")).as_deref(),
            Some("flag")
        );
        assert_eq!(
            pick_golfer(None, Some("env".into()), Some("file")).as_deref(),
            Some("env")
        );
        assert_eq!(
            pick_golfer(Some("  "), Some(String::new()), Some("file")).as_deref(),
            Some("file")
        );
        assert_eq!(pick_golfer(None, None, None), None);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let tmp = tempdir().unwrap();
        let config = CliConfig::load_from_path(&tmp.path().join("missing.json")).unwrap();
        assert_eq!(config.golfer, None);
        assert_eq!(config.stats, StatsConfig::default());
    }

    #[test]
    fn config_roundtrip_normalizes_values() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("bogey").join(CONFIG_FILE_NAME);

        let config = CliConfig {
            version: 1,
            golfer: Some("  alice ".to_string()),
            stats: StatsConfig {
                problem_window: 0,
                recent_rounds_default: 3,
                rounds_list_default: 20,
            },
        };
        config.save_to_path(&path).unwrap();

        let loaded = CliConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded.golfer.as_deref(), Some("alice"));
        assert_eq!(loaded.stats.problem_window, 10);
        assert_eq!(loaded.stats.recent_rounds_default, 3);
        assert_eq!(loaded.stats.rounds_list_default, 20);
    }

    #[test]
    fn partial_stats_section_uses_defaults() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{ "golfer": "bob", "stats": { "problem_window": 5 } }"#).unwrap();

        let loaded = CliConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded.version, 1);
        assert_eq!(loaded.stats.problem_window, 5);
        assert_eq!(loaded.stats.recent_rounds_default, 5);
    }

    #[test]
    fn unknown_stats_keys_are_rejected() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{ "stats": { "window": 5 } }"#).unwrap();

        assert!(CliConfig::load_from_path(&path).is_err());
    }
}
