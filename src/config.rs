//! Shared config utilities for loading/saving JSON config files,
//! plus the engine's own settings.

use crate::ai::classifier::Classifier;
use crate::ai::dialogue::{DialogueSelector, DEFAULT_INTENSE_THRESHOLD};
use crate::ai::idle_chatter::IdleChatterConfig;
use crate::ai::lexicon::Lexicon;
use crate::ai::sentiment::{AfinnScorer, DEFAULT_MAX_TOKENS};
use crate::ai::session::FloweySession;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV: &str = "FLOWEY_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to create config directory: {0}")]
    CreateDir(#[source] std::io::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write config file: {0}")]
    Write(#[source] std::io::Error),
}

/// Generic load for any Serde config type with a `Default` implementation.
/// Falls back to `T::default()` if the file is missing or unparsable.
pub fn load_json_config<T: DeserializeOwned + Default>(path: &Path, label: &str) -> T {
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<T>(&content) {
            Ok(config) => {
                tracing::info!("[{}] Loaded config from {}", label, path.display());
                config
            }
            Err(e) => {
                tracing::warn!(
                    "[{}] Failed to parse config {}: {} - using defaults",
                    label,
                    path.display(),
                    e
                );
                T::default()
            }
        },
        Err(_) => {
            tracing::info!(
                "[{}] No config file at {} - using defaults",
                label,
                path.display()
            );
            T::default()
        }
    }
}

/// Generic save for any Serde config type.
pub fn save_json_config<T: Serialize>(
    path: &Path,
    config: &T,
    label: &str,
) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(ConfigError::CreateDir)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json).map_err(ConfigError::Write)?;
    tracing::info!("[{}] Saved config to {}", label, path.display());
    Ok(())
}

/// `$FLOWEY_CONFIG`, else `<config dir>/flowey/config.json`.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("flowey")
        .join("config.json")
}

// ── Engine config ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloweyConfig {
    /// How long a jumpscare stays up and input is refused.
    #[serde(default = "default_jumpscare_hold_ms")]
    pub jumpscare_hold_ms: u64,
    /// Confidence above which the intense dialogue pool is used.
    #[serde(default = "default_intense_threshold")]
    pub intense_threshold: f32,
    /// React to the previous expression on the second and later messages.
    #[serde(default = "default_true")]
    pub follow_ups: bool,
    #[serde(default = "default_heartbeat_secs")]
    pub heartbeat_secs: u64,
    #[serde(default = "default_idle_min_secs")]
    pub idle_min_secs: u64,
    #[serde(default = "default_idle_cooldown_secs")]
    pub idle_cooldown_secs: u64,
    #[serde(default = "default_idle_chance")]
    pub idle_chance: f64,
    /// Inputs with more tokens than this are not scored.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
    /// Optional `{ "word": weight }` file merged over the built-in lexicon.
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
    /// Print the score breakdown under each reply.
    #[serde(default = "default_true")]
    pub show_debug: bool,
}

fn default_jumpscare_hold_ms() -> u64 {
    3000
}

fn default_intense_threshold() -> f32 {
    DEFAULT_INTENSE_THRESHOLD
}

fn default_true() -> bool {
    true
}

fn default_heartbeat_secs() -> u64 {
    5
}

fn default_idle_min_secs() -> u64 {
    20
}

fn default_idle_cooldown_secs() -> u64 {
    30
}

fn default_idle_chance() -> f64 {
    0.35
}

fn default_max_tokens() -> usize {
    DEFAULT_MAX_TOKENS
}

impl Default for FloweyConfig {
    fn default() -> Self {
        Self {
            jumpscare_hold_ms: default_jumpscare_hold_ms(),
            intense_threshold: default_intense_threshold(),
            follow_ups: true,
            heartbeat_secs: default_heartbeat_secs(),
            idle_min_secs: default_idle_min_secs(),
            idle_cooldown_secs: default_idle_cooldown_secs(),
            idle_chance: default_idle_chance(),
            max_tokens: default_max_tokens(),
            lexicon_path: None,
            show_debug: true,
        }
    }
}

impl FloweyConfig {
    pub fn load(path: &Path) -> Self {
        load_json_config(path, "Config")
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        save_json_config(path, self, "Config")
    }

    /// Built-in lexicon, with overrides when `lexicon_path` loads cleanly.
    pub fn lexicon(&self) -> Lexicon {
        match &self.lexicon_path {
            Some(path) => Lexicon::load_overrides(path).unwrap_or_else(|e| {
                tracing::warn!("[Config] {} - using built-in lexicon", e);
                Lexicon::default()
            }),
            None => Lexicon::default(),
        }
    }

    pub fn scorer(&self) -> AfinnScorer {
        AfinnScorer::new(self.lexicon()).with_max_tokens(self.max_tokens)
    }

    pub fn session(&self) -> FloweySession<AfinnScorer> {
        FloweySession::with_classifier(Classifier::new(self.scorer()))
            .selector(DialogueSelector::with_intense_threshold(
                self.intense_threshold,
            ))
            .follow_ups(self.follow_ups)
            .jumpscare_hold(Duration::from_millis(self.jumpscare_hold_ms))
    }

    pub fn idle_chatter(&self) -> IdleChatterConfig {
        IdleChatterConfig {
            min_idle_secs: self.idle_min_secs,
            cooldown: Duration::from_secs(self.idle_cooldown_secs),
            chance: self.idle_chance,
        }
    }

    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_secs(self.heartbeat_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::expression::Expression;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = FloweyConfig::load(&dir.path().join("absent.json"));
        assert_eq!(cfg, FloweyConfig::default());
        assert_eq!(cfg.jumpscare_hold_ms, 3000);
        assert_eq!(cfg.intense_threshold, 0.8);
    }

    #[test]
    fn unparsable_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(FloweyConfig::load(&path), FloweyConfig::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"jumpscare_hold_ms": 500, "follow_ups": false}"#).unwrap();
        let cfg = FloweyConfig::load(&path);
        assert_eq!(cfg.jumpscare_hold_ms, 500);
        assert!(!cfg.follow_ups);
        assert_eq!(cfg.heartbeat_secs, 5);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let cfg = FloweyConfig {
            idle_chance: 0.9,
            show_debug: false,
            ..FloweyConfig::default()
        };
        cfg.save(&path).unwrap();
        assert_eq!(FloweyConfig::load(&path), cfg);
    }

    #[test]
    fn lexicon_overrides_reach_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let lex_path = dir.path().join("lexicon.json");
        std::fs::write(&lex_path, r#"{"petal": 5}"#).unwrap();
        let cfg = FloweyConfig {
            lexicon_path: Some(lex_path),
            ..FloweyConfig::default()
        };
        let mut session = cfg.session().seeded(1);
        let reply = session.submit("petal").unwrap();
        assert_eq!(reply.verdict.expression, Expression::Happy);
    }

    #[test]
    fn bad_lexicon_path_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = FloweyConfig {
            lexicon_path: Some(dir.path().join("missing.json")),
            ..FloweyConfig::default()
        };
        assert_eq!(cfg.lexicon().weight("good"), Some(3));
    }

    #[test]
    fn heartbeat_interval_is_never_zero() {
        let cfg = FloweyConfig {
            heartbeat_secs: 0,
            ..FloweyConfig::default()
        };
        assert_eq!(cfg.heartbeat_interval(), Duration::from_secs(1));
    }
}
