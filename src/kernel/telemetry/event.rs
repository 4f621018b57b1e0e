use serde::{Deserialize, Serialize};

use crate::kernel::context::ContextKind;

// Allowed: context kinds, intent names, counts
// Forbidden: utterance text, reply text, hint phrases

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TelemetryEvent {
    NothingHeard {
        context: ContextKind,
    },

    NoMatch {
        context: ContextKind,
        /// Whether the miss was counted as a failed attempt.
        counted: bool,
    },

    IntentFired {
        context: ContextKind,
        intent: String,
    },

    ContextTransition {
        from: ContextKind,
        to: ContextKind,
        depth: usize,
    },

    SessionEnded {
        turns: u64,
    },
}
