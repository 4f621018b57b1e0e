use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

pub const DEFAULT_LANGUAGE: &str = "en_US";
pub const DEFAULT_TRIVIA_HINT_AFTER: u32 = 3;
pub const DEFAULT_TELEMETRY_CAPACITY: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogueConfig {
    /// Language code threaded through every recognizer call.
    pub language: String,
    /// Failed trivia attempts before the one-time hint is spoken. Must be
    /// at least 1; the counter is already 1 on the first miss.
    pub trivia_hint_after: u32,
    /// Fixed RNG seed for reply selection. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// TTS program to spawn. `None` prints replies to the console.
    pub speech_program: Option<String>,
    /// Telemetry events kept for inspection. Snapshot totals cover the
    /// whole session regardless.
    pub telemetry_capacity: usize,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            trivia_hint_after: DEFAULT_TRIVIA_HINT_AFTER,
            seed: None,
            speech_program: None,
            telemetry_capacity: DEFAULT_TELEMETRY_CAPACITY,
        }
    }
}

impl DialogueConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// `PARLEY_CONFIG` names a JSON file used as the base; the individual
    /// `PARLEY_*` variables override it.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("PARLEY_CONFIG") {
            Ok(path) => Self::from_json_file(path)?,
            Err(_) => Self::default(),
        };

        if let Ok(language) = std::env::var("PARLEY_LANGUAGE") {
            if !language.trim().is_empty() {
                config.language = language.trim().to_string();
            }
        }
        if let Ok(seed) = std::env::var("PARLEY_SEED") {
            let parsed = seed
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSeed(seed.clone()))?;
            config.seed = Some(parsed);
        }
        if let Ok(program) = std::env::var("PARLEY_TTS") {
            if !program.trim().is_empty() {
                config.speech_program = Some(program.trim().to_string());
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trivia_hint_after == 0 {
            return Err(ConfigError::ZeroHintThreshold);
        }
        Ok(())
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
