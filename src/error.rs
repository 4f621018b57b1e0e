use thiserror::Error;

use crate::kernel::phrases::Category;

/// Failures that end a dialogue session.
///
/// "Nothing heard" and "no intent matched" are not errors; the dispatcher
/// recovers from both locally and never surfaces them here.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("recognizer failed: {0:#}")]
    Recognizer(anyhow::Error),

    #[error("speech sink failed: {0:#}")]
    Speech(anyhow::Error),

    #[error("indicator failed: {0:#}")]
    Indicator(anyhow::Error),

    #[error("phrase bank has no replies for {0:?}")]
    MissingPhrases(Category),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid seed {0:?}")]
    InvalidSeed(String),

    #[error("trivia_hint_after must be at least 1")]
    ZeroHintThreshold,
}
