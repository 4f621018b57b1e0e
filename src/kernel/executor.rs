use rand::Rng;

use super::context::{ContextFrame, Transition};
use super::intent::types::{Effect, Intent};
use super::phrases::{Category, PhraseBank, Reply};
use crate::error::DispatchError;
use crate::outputs::indicator::LightState;

/// A concrete call on one of the external sinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    Speak { text: String, lang: Option<String> },
    SetLight(LightState),
}

impl SideEffect {
    fn speak(reply: &Reply) -> Self {
        SideEffect::Speak {
            text: reply.text.clone(),
            lang: reply.lang.clone(),
        }
    }
}

/// Everything a matched intent will do, resolved before any of it happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub intent: String,
    pub effects: Vec<SideEffect>,
    /// New attempt count for the active frame, if the intent counted one.
    pub attempts: Option<u32>,
    pub transition: Transition,
}

/// Projects a matched intent onto side effects. Draws randomness from the
/// phrase bank but holds no state of its own.
pub struct Executor {
    hint_after: u32,
}

impl Executor {
    /// A threshold of 0 is raised to 1: the first miss already counts 1.
    pub fn new(hint_after: u32) -> Self {
        Self {
            hint_after: hint_after.max(1),
        }
    }

    pub fn resolve<R: Rng + ?Sized>(
        &self,
        intent: &Intent,
        frame: &ContextFrame,
        utterance: &str,
        phrases: &PhraseBank,
        rng: &mut R,
    ) -> Result<Plan, DispatchError> {
        let mut effects = Vec::with_capacity(intent.effects.len());
        let mut attempts = None;

        for effect in &intent.effects {
            match effect {
                Effect::Say(category) => {
                    let reply = first(phrases, *category)?;
                    effects.push(SideEffect::speak(reply));
                }
                Effect::SayOneOf(category) => {
                    let reply = phrases
                        .get(*category)
                        .and_then(|set| set.choose(rng))
                        .ok_or(DispatchError::MissingPhrases(*category))?;
                    effects.push(SideEffect::speak(reply));
                }
                Effect::Light(state) => effects.push(SideEffect::SetLight(*state)),
                Effect::Echo { strip } => {
                    let echoed = strip_first(utterance, strip);
                    if !echoed.is_empty() {
                        effects.push(SideEffect::Speak {
                            text: echoed,
                            lang: None,
                        });
                    }
                }
                Effect::Attempt { hint, retry } => {
                    let count = attempts.unwrap_or(frame.attempts) + 1;
                    // Equality, not >=: the count only grows, so the hint
                    // fires on exactly one turn.
                    let category = if count == self.hint_after { *hint } else { *retry };
                    effects.push(SideEffect::speak(first(phrases, category)?));
                    attempts = Some(count);
                }
            }
        }

        Ok(Plan {
            intent: intent.name.clone(),
            effects,
            attempts,
            transition: intent.transition,
        })
    }
}

fn first(phrases: &PhraseBank, category: Category) -> Result<&Reply, DispatchError> {
    phrases
        .get(category)
        .and_then(|set| set.replies().first())
        .ok_or(DispatchError::MissingPhrases(category))
}

/// Removes the first occurrence of `phrase` and tidies the whitespace left
/// behind.
pub fn strip_first(utterance: &str, phrase: &str) -> String {
    let stripped = if phrase.is_empty() {
        utterance.to_string()
    } else {
        utterance.replacen(phrase, "", 1)
    };
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
