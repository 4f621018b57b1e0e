use serde::{Deserialize, Serialize};

use crate::kernel::context::Transition;
use crate::kernel::phrases::Category;
use crate::outputs::indicator::LightState;

/// Predicate over a normalized (lower-cased) utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    /// Substring containment.
    Phrase(String),
    AnyOf(Vec<Trigger>),
    AllOf(Vec<Trigger>),
    /// Catch-all, used as the last intent of a context.
    Always,
}

impl Trigger {
    pub fn phrase(text: &str) -> Self {
        Trigger::Phrase(text.to_lowercase())
    }

    pub fn any<'a>(phrases: impl IntoIterator<Item = &'a str>) -> Self {
        Trigger::AnyOf(phrases.into_iter().map(Trigger::phrase).collect())
    }

    pub fn all(triggers: impl IntoIterator<Item = Trigger>) -> Self {
        Trigger::AllOf(triggers.into_iter().collect())
    }

    pub fn matches(&self, utterance: &str) -> bool {
        match self {
            Trigger::Phrase(p) => utterance.contains(p.as_str()),
            Trigger::AnyOf(ts) => ts.iter().any(|t| t.matches(utterance)),
            Trigger::AllOf(ts) => ts.iter().all(|t| t.matches(utterance)),
            Trigger::Always => true,
        }
    }

    /// Every literal phrase in the predicate, in declaration order.
    pub fn phrases(&self) -> Vec<&str> {
        match self {
            Trigger::Phrase(p) => vec![p.as_str()],
            Trigger::AnyOf(ts) | Trigger::AllOf(ts) => ts.iter().flat_map(|t| t.phrases()).collect(),
            Trigger::Always => Vec::new(),
        }
    }
}

/// One observable step of an intent's response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Speak the first reply of a fixed category.
    Say(Category),
    /// Speak one reply drawn uniformly from the category.
    SayOneOf(Category),
    Light(LightState),
    /// Speak the utterance back with the first occurrence of `strip` removed.
    Echo { strip: String },
    /// Count a failed attempt. Speaks `hint` when the count reaches the
    /// configured threshold, `retry` otherwise.
    Attempt { hint: Category, retry: Category },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    pub trigger: Trigger,
    /// Applied in order, before the transition.
    pub effects: Vec<Effect>,
    pub transition: Transition,
}

impl Intent {
    pub fn new(name: &str, trigger: Trigger) -> Self {
        Self {
            name: name.to_string(),
            trigger,
            effects: Vec::new(),
            transition: Transition::Stay,
        }
    }

    pub fn say(mut self, category: Category) -> Self {
        self.effects.push(Effect::Say(category));
        self
    }

    pub fn say_one_of(mut self, category: Category) -> Self {
        self.effects.push(Effect::SayOneOf(category));
        self
    }

    pub fn light(mut self, state: LightState) -> Self {
        self.effects.push(Effect::Light(state));
        self
    }

    pub fn echo(mut self, strip: &str) -> Self {
        self.effects.push(Effect::Echo {
            strip: strip.to_lowercase(),
        });
        self
    }

    pub fn attempt(mut self, hint: Category, retry: Category) -> Self {
        self.effects.push(Effect::Attempt { hint, retry });
        self
    }

    pub fn then(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }
}
