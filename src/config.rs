use crate::error::{AssistError, AssistResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Files
    pub conversation_log_path: PathBuf,
    pub saved_text_path: PathBuf,

    // Simulated speech pacing
    pub recognition_ticks: u32,
    pub recognition_tick_ms: u64,
    pub speech_tick_ms: u64,
    pub chars_per_speech_tick: usize,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            conversation_log_path: PathBuf::from("speech_assistance_log.txt"),
            saved_text_path: PathBuf::from("saved_speech_text.txt"),
            recognition_ticks: 3,
            recognition_tick_ms: 1000,
            speech_tick_ms: 500,
            chars_per_speech_tick: 10,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location, or fall back to defaults
    pub fn load() -> AssistResult<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> AssistResult<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let parsed: AssistResult<Self> = std::fs::read_to_string(path)
            .map_err(AssistError::from)
            .and_then(|content| serde_json::from_str(&content).map_err(AssistError::from));
        match parsed {
            Ok(config) => Ok(config),
            Err(e) => {
                // Graceful degradation: log warning and use defaults
                tracing::warn!("⚠️ Config file unreadable or invalid, using defaults: {}", e);
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> AssistResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn recognition_tick(&self) -> Duration {
        Duration::from_millis(self.recognition_tick_ms)
    }

    pub fn speech_tick(&self) -> Duration {
        Duration::from_millis(self.speech_tick_ms)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("speech-assistant")
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(
            config.conversation_log_path,
            PathBuf::from("speech_assistance_log.txt")
        );
        assert_eq!(config.saved_text_path, PathBuf::from("saved_speech_text.txt"));
        assert_eq!(config.recognition_ticks, 3);
        assert_eq!(config.recognition_tick(), Duration::from_secs(1));
        assert_eq!(config.speech_tick(), Duration::from_millis(500));
        assert_eq!(config.chars_per_speech_tick, 10);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"speech_tick_ms": 0}"#).expect("Failed to deserialize");
        assert_eq!(config.speech_tick_ms, 0);
        assert_eq!(config.recognition_ticks, 3);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested/config.json");

        let mut config = Config::default();
        config.log_level = "debug".to_string();
        config.save_to(&path).expect("Failed to save");

        let restored = Config::load_from(&path).expect("Failed to load");
        assert_eq!(restored.log_level, "debug");
    }

    #[test]
    fn test_corrupt_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not valid json").unwrap();

        let config = Config::load_from(&path).expect("Corrupt config should not be fatal");
        assert_eq!(config.recognition_ticks, 3);
        assert!(!path.exists());
        assert!(dir.path().join("config.json.corrupt").exists());
    }

    #[test]
    fn test_undecodable_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, [0xff, 0xfe, b'{']).unwrap();

        let config = Config::load_from(&path).expect("Unreadable config should not be fatal");
        assert_eq!(config.chars_per_speech_tick, 10);
        assert!(dir.path().join("config.json.corrupt").exists());
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config.log_level, "warn");
    }
}
