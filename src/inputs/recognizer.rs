use anyhow::{anyhow, Result};
use std::collections::VecDeque;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Speech-recognition client. `Ok(None)` means nothing was heard.
#[allow(async_fn_in_trait)]
pub trait Recognizer {
    async fn recognize(&mut self, language: &str, hints: &[String]) -> Result<Option<String>>;
}

/// Treats each stdin line as one recognized utterance. A blank line is
/// "nothing heard"; end of input is an error.
pub struct ConsoleRecognizer {
    lines: Lines<BufReader<Stdin>>,
}

impl ConsoleRecognizer {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for ConsoleRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Recognizer for ConsoleRecognizer {
    async fn recognize(&mut self, _language: &str, _hints: &[String]) -> Result<Option<String>> {
        match self.lines.next_line().await? {
            Some(line) if line.trim().is_empty() => Ok(None),
            Some(line) => Ok(Some(line)),
            None => Err(anyhow!("console input closed")),
        }
    }
}

/// Plays back a fixed list of recognition results and records the hints
/// passed on each call.
#[derive(Debug, Default)]
pub struct ScriptedRecognizer {
    script: VecDeque<Option<String>>,
    calls: Vec<(String, Vec<String>)>,
}

impl ScriptedRecognizer {
    pub fn new<I, S>(utterances: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            script: utterances.into_iter().map(|u| u.map(Into::into)).collect(),
            calls: Vec::new(),
        }
    }

    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(lines.into_iter().map(Some))
    }

    pub fn push(&mut self, utterance: Option<&str>) {
        self.script.push_back(utterance.map(str::to_string));
    }

    /// `(language, hints)` for every call so far.
    pub fn calls(&self) -> &[(String, Vec<String>)] {
        &self.calls
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Recognizer for ScriptedRecognizer {
    async fn recognize(&mut self, language: &str, hints: &[String]) -> Result<Option<String>> {
        self.calls.push((language.to_string(), hints.to_vec()));
        self.script
            .pop_front()
            .ok_or_else(|| anyhow!("recognition script exhausted"))
    }
}
