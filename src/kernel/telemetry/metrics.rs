use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::event::TelemetryEvent;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub turn_stats: TurnStats,
    pub intent_stats: IntentStats,
    pub context_stats: ContextStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnStats {
    pub total_turns: u64,
    pub nothing_heard: u64,
    pub unmatched: u64,
    pub counted_misses: u64,
    pub fired: u64,
    /// Share of turns in which an intent fired.
    pub match_ratio: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntentStats {
    /// Fires per intent name. BTreeMap keeps the JSON output stable.
    pub fires: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextStats {
    pub transitions: u64,
    pub entered: BTreeMap<String, u64>,
    pub max_depth: usize,
    pub session_ended: bool,
}

impl TelemetrySnapshot {
    /// Folds one event into the running totals.
    pub fn observe(&mut self, event: &TelemetryEvent) {
        match event {
            TelemetryEvent::NothingHeard { .. } => {
                self.turn_stats.total_turns += 1;
                self.turn_stats.nothing_heard += 1;
            }
            TelemetryEvent::NoMatch { counted, .. } => {
                self.turn_stats.total_turns += 1;
                self.turn_stats.unmatched += 1;
                if *counted {
                    self.turn_stats.counted_misses += 1;
                }
            }
            TelemetryEvent::IntentFired { intent, .. } => {
                self.turn_stats.total_turns += 1;
                self.turn_stats.fired += 1;
                *self.intent_stats.fires.entry(intent.clone()).or_insert(0) += 1;
            }
            TelemetryEvent::ContextTransition { to, depth, .. } => {
                self.context_stats.transitions += 1;
                *self.context_stats.entered.entry(format!("{:?}", to)).or_insert(0) += 1;
                self.context_stats.max_depth = self.context_stats.max_depth.max(*depth);
            }
            TelemetryEvent::SessionEnded { .. } => {
                self.context_stats.session_ended = true;
            }
        }

        if self.turn_stats.total_turns > 0 {
            self.turn_stats.match_ratio =
                self.turn_stats.fired as f64 / self.turn_stats.total_turns as f64;
        }
    }
}

pub fn compute_snapshot<'a>(events: impl IntoIterator<Item = &'a TelemetryEvent>) -> TelemetrySnapshot {
    let mut snap = TelemetrySnapshot::default();
    for event in events {
        snap.observe(event);
    }
    snap
}
