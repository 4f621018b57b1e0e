use anyhow::{anyhow, Context, Result};
use tracing::{debug, info};

/// Speech-synthesis sink. `say` resolves only once the line has been spoken.
#[allow(async_fn_in_trait)]
pub trait SpeechSink {
    /// `lang` of `None` means the ambient recognition language.
    async fn say(&mut self, text: &str, lang: Option<&str>) -> Result<()>;
}

/// Prints replies to stdout.
#[derive(Debug, Clone)]
pub struct ConsoleSpeech {
    default_lang: String,
}

impl ConsoleSpeech {
    pub fn new(default_lang: impl Into<String>) -> Self {
        Self {
            default_lang: default_lang.into(),
        }
    }
}

impl SpeechSink for ConsoleSpeech {
    async fn say(&mut self, text: &str, lang: Option<&str>) -> Result<()> {
        let lang = lang.unwrap_or(&self.default_lang);
        println!("[SAY {}] {}", lang, text);
        Ok(())
    }
}

/// Spawns a TTS program per line (`<program> -v <lang> -- <text>`) and waits
/// for it to exit. The `--` keeps a reply starting with `-` from being read as
/// an option.
#[derive(Debug, Clone)]
pub struct CommandSpeech {
    program: String,
    default_lang: String,
}

impl CommandSpeech {
    pub fn new(program: impl Into<String>, default_lang: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            default_lang: default_lang.into(),
        }
    }
}

impl SpeechSink for CommandSpeech {
    async fn say(&mut self, text: &str, lang: Option<&str>) -> Result<()> {
        let lang = lang.unwrap_or(&self.default_lang);
        // TTS voices use dashes: en_US -> en-US
        let voice = lang.replace('_', "-");
        info!("[AUDIO] Spawning '{}' ({}): '{}'", self.program, voice, text);

        let status = tokio::process::Command::new(&self.program)
            .arg("-v")
            .arg(&voice)
            .arg("--")
            .arg(text)
            .kill_on_drop(true)
            .status()
            .await
            .with_context(|| format!("failed to spawn '{}'", self.program))?;

        debug!("'{}' exited with {}", self.program, status);
        if !status.success() {
            return Err(anyhow!("'{}' exited with {}", self.program, status));
        }
        Ok(())
    }
}
