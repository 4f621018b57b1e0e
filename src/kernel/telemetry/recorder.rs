use std::collections::VecDeque;

use super::event::TelemetryEvent;
use super::metrics::TelemetrySnapshot;
use crate::config::DEFAULT_TELEMETRY_CAPACITY;

/// Session telemetry: a bounded window of recent events plus totals that
/// cover every event ever recorded.
#[derive(Debug)]
pub struct TelemetryRecorder {
    buffer: VecDeque<TelemetryEvent>,
    capacity: usize,
    totals: TelemetrySnapshot,
    dropped: u64,
}

impl Default for TelemetryRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryRecorder {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TELEMETRY_CAPACITY)
    }

    /// A capacity of 0 keeps no events; totals are still tracked.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
            totals: TelemetrySnapshot::default(),
            dropped: 0,
        }
    }

    pub fn record(&mut self, event: TelemetryEvent) {
        self.totals.observe(&event);

        if self.capacity == 0 {
            self.dropped += 1;
            return;
        }
        if self.buffer.len() >= self.capacity {
            self.buffer.pop_front();
            self.dropped += 1;
        }
        self.buffer.push_back(event);
    }

    /// The most recent events, oldest first.
    pub fn events(&self) -> &VecDeque<TelemetryEvent> {
        &self.buffer
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Events evicted from the window so far.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Session-wide totals, unaffected by eviction.
    pub fn snapshot(&self) -> TelemetrySnapshot {
        self.totals.clone()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.totals = TelemetrySnapshot::default();
        self.dropped = 0;
    }
}
