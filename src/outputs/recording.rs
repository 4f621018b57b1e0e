use anyhow::{anyhow, Result};
use std::sync::{Arc, Mutex};

use super::indicator::{Indicator, LightState};
use super::speech::SpeechSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    Said { text: String, lang: Option<String> },
    Light(LightState),
}

/// Ordered log shared by the recording sinks, so the relative order of
/// speech and light changes can be checked.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Arc<Mutex<Vec<Observation>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, observation: Observation) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(observation);
        }
    }

    pub fn entries(&self) -> Vec<Observation> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn spoken(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter_map(|o| match o {
                Observation::Said { text, .. } => Some(text),
                Observation::Light(_) => None,
            })
            .collect()
    }

    pub fn lights(&self) -> Vec<LightState> {
        self.entries()
            .into_iter()
            .filter_map(|o| match o {
                Observation::Light(state) => Some(state),
                Observation::Said { .. } => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordingSpeech {
    transcript: Transcript,
    fail: bool,
}

impl RecordingSpeech {
    pub fn new(transcript: Transcript) -> Self {
        Self {
            transcript,
            fail: false,
        }
    }

    /// A sink whose every call fails without recording anything.
    pub fn failing(transcript: Transcript) -> Self {
        Self {
            transcript,
            fail: true,
        }
    }
}

impl SpeechSink for RecordingSpeech {
    async fn say(&mut self, text: &str, lang: Option<&str>) -> Result<()> {
        if self.fail {
            return Err(anyhow!("speaker unavailable"));
        }
        self.transcript.push(Observation::Said {
            text: text.to_string(),
            lang: lang.map(str::to_string),
        });
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct RecordingIndicator {
    transcript: Transcript,
    fail: bool,
}

impl RecordingIndicator {
    pub fn new(transcript: Transcript) -> Self {
        Self {
            transcript,
            fail: false,
        }
    }

    pub fn failing(transcript: Transcript) -> Self {
        Self {
            transcript,
            fail: true,
        }
    }
}

impl Indicator for RecordingIndicator {
    async fn set_state(&mut self, state: LightState) -> Result<()> {
        if self.fail {
            return Err(anyhow!("led driver unavailable"));
        }
        self.transcript.push(Observation::Light(state));
        Ok(())
    }
}
