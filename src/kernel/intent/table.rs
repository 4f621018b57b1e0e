use std::collections::HashMap;
use tracing::debug;

use super::types::Intent;
use crate::kernel::context::ContextKind;

/// Ordered intent bindings per context. Registration order is priority order.
#[derive(Debug, Clone, Default)]
pub struct IntentTable {
    tables: HashMap<ContextKind, Vec<Intent>>,
}

impl IntentTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, context: ContextKind, intent: Intent) -> &mut Self {
        self.tables.entry(context).or_default().push(intent);
        self
    }

    pub fn intents(&self, context: ContextKind) -> &[Intent] {
        self.tables.get(&context).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First intent of `context` whose trigger holds over `utterance`.
    /// `utterance` must already be lower-cased.
    pub fn match_intent(&self, context: ContextKind, utterance: &str) -> Option<&Intent> {
        let found = self
            .intents(context)
            .iter()
            .find(|intent| intent.trigger.matches(utterance));
        debug!(
            "Match in {:?}: {:?}",
            context,
            found.map(|i| i.name.as_str())
        );
        found
    }
}
