use serde::{Deserialize, Serialize};
use tracing::warn;

/// Dialogue scope. Decides which intents are checked and which hints bias
/// recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContextKind {
    Root,
    RepeatMode,
    MoodCheck,
    LanguageDemo,
    TriviaGame,
    MusicChat,
    JokeTeller,
}

impl ContextKind {
    /// Whether an utterance that matches no intent counts as a failed attempt.
    pub fn counts_misses(&self) -> bool {
        matches!(self, ContextKind::TriviaGame)
    }
}

/// One entry of the context stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextFrame {
    pub kind: ContextKind,
    /// Only ever incremented.
    pub attempts: u32,
    /// Turns handled (matched or not) while this frame was on top.
    pub turns: u32,
}

impl ContextFrame {
    pub fn new(kind: ContextKind) -> Self {
        Self {
            kind,
            attempts: 0,
            turns: 0,
        }
    }
}

/// Where the dialogue goes after an intent's effects have run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    Stay,
    Enter(ContextKind),
    Replace(ContextKind),
    Return,
    End,
}

/// Stack of active dialogue scopes. Root sits at the bottom and is never
/// popped; the top frame is the single active context.
#[derive(Debug, Clone)]
pub struct ContextStack {
    frames: Vec<ContextFrame>,
    ended: bool,
}

impl Default for ContextStack {
    fn default() -> Self {
        Self {
            frames: vec![ContextFrame::new(ContextKind::Root)],
            ended: false,
        }
    }
}

impl ContextStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &ContextFrame {
        // frames is never empty: root cannot be popped
        &self.frames[self.frames.len() - 1]
    }

    pub fn current_mut(&mut self) -> &mut ContextFrame {
        let top = self.frames.len() - 1;
        &mut self.frames[top]
    }

    pub fn kind(&self) -> ContextKind {
        self.current().kind
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn frames(&self) -> &[ContextFrame] {
        &self.frames
    }

    /// Applies a transition. Returns the kind that is active afterwards.
    pub fn apply(&mut self, transition: Transition) -> ContextKind {
        match transition {
            Transition::Stay => {}
            Transition::Enter(kind) => self.frames.push(ContextFrame::new(kind)),
            Transition::Replace(kind) => {
                if self.frames.len() > 1 {
                    *self.current_mut() = ContextFrame::new(kind);
                } else {
                    // Replacing root would lose the bottom frame; nest instead.
                    self.frames.push(ContextFrame::new(kind));
                }
            }
            Transition::Return => {
                if self.frames.len() > 1 {
                    self.frames.pop();
                } else {
                    warn!("Ignoring return transition at root");
                }
            }
            Transition::End => self.ended = true,
        }
        self.kind()
    }
}
