//! Dialogue telemetry.
//!
//! # SAFETY INVARIANT
//! Telemetry is a READ-ONLY side-effect layer.
//! It must **NEVER** be read inside dispatch logic (intent matching, hints, executor).
//!
//! # PRIVACY INVARIANT
//! Events must **NEVER** contain utterance text or spoken replies.
//! Only context kinds, intent names and counts are allowed.

pub mod event;
pub mod metrics;
pub mod recorder;
