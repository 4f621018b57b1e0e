use std::collections::HashMap;

use super::context::{ContextFrame, ContextKind};

/// Recognition hints per context.
///
/// Queried on every turn with the whole active frame, so a provider may
/// refresh hints mid-context. The stock provider depends on the kind only.
#[derive(Debug, Clone, Default)]
pub struct HintProvider {
    hints: HashMap<ContextKind, Vec<String>>,
}

fn phrases(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl HintProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, context: ContextKind, hints: Vec<String>) {
        self.hints.insert(context, hints);
    }

    /// Stock hints. Only English sessions are biased; every other language
    /// recognizes unhinted.
    pub fn standard(language: &str) -> Self {
        let mut provider = Self::new();
        if !is_english(language) {
            return provider;
        }

        provider.set(
            ContextKind::Root,
            phrases(&[
                "turn on the light",
                "turn off the light",
                "blink the light",
                "repeat after me",
                "can you speak other languages",
                "how are you",
                "let's play trivia",
                "let's talk about music",
                "tell me a joke",
                "goodbye",
            ]),
        );
        provider.set(ContextKind::RepeatMode, phrases(&["i'm done", "i am done"]));
        provider.set(
            ContextKind::MoodCheck,
            phrases(&["i'm good", "not good", "i'm feeling sick"]),
        );
        provider.set(
            ContextKind::LanguageDemo,
            phrases(&["german", "spanish", "french", "italian"]),
        );
        // Never the answer itself.
        provider.set(
            ContextKind::TriviaGame,
            phrases(&["i give up", "tell me the answer"]),
        );
        provider.set(
            ContextKind::MusicChat,
            phrases(&["what other genres do you like", "who is your favorite composer"]),
        );
        provider.set(
            ContextKind::JokeTeller,
            phrases(&["tell me a knock knock joke", "how about a dad joke", "any"]),
        );
        provider
    }

    pub fn hints_for(&self, frame: &ContextFrame) -> Vec<String> {
        self.hints.get(&frame.kind).cloned().unwrap_or_default()
    }
}

fn is_english(language: &str) -> bool {
    let lower = language.to_ascii_lowercase();
    lower == "en" || lower.starts_with("en_") || lower.starts_with("en-")
}
