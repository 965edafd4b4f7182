//! Session events and the observer seam.
//!
//! The loop reports everything the user should see through a
//! [`SessionObserver`]. Observers are infallible from the loop's point of
//! view: an output failure is theirs to log, never a reason to stop timing.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::types::{Phase, SessionOutcome};

// ============================================================================
// SessionEvent
// ============================================================================

/// Events emitted by a running session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A new phase began
    PhaseStarted {
        /// Phase that began
        phase: Phase,
        /// Display label of the phase
        label: String,
        /// Full length of the phase in seconds
        duration_seconds: u64,
        /// 1-based number of the current focus interval
        cycle: u32,
    },
    /// One unpaused tick elapsed
    Tick {
        /// Running phase
        phase: Phase,
        /// Display label of the phase
        label: String,
        /// Whole seconds left, truncated
        remaining_seconds: u64,
        /// 1-based number of the current focus interval
        cycle: u32,
    },
    /// The running phase was paused
    Paused {
        /// Whole seconds left when paused
        remaining_seconds: u64,
    },
    /// The paused phase resumed
    Resumed {
        /// Whole seconds left on resume
        remaining_seconds: u64,
    },
    /// The user skipped the rest of a phase
    Skipped {
        /// Phase that was cut short
        phase: Phase,
    },
    /// The session ended
    Finished {
        /// How it ended
        outcome: SessionOutcome,
        /// Number of full cycles completed
        completed_cycles: u32,
    },
}

// ============================================================================
// SessionObserver
// ============================================================================

/// Receives session events as they happen.
pub trait SessionObserver {
    /// Handles one event. Called from inside the session loop.
    fn on_event(&mut self, event: &SessionEvent);
}

impl SessionObserver for mpsc::UnboundedSender<SessionEvent> {
    fn on_event(&mut self, event: &SessionEvent) {
        if self.send(event.clone()).is_err() {
            tracing::debug!("event receiver dropped, discarding {:?}", event);
        }
    }
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl SessionObserver for NullObserver {
    fn on_event(&mut self, _event: &SessionEvent) {}
}

/// Observer that keeps every event, for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    events: Vec<SessionEvent>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events in order.
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Phases in the order they started.
    pub fn phase_sequence(&self) -> Vec<Phase> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SessionEvent::PhaseStarted { phase, .. } => Some(*phase),
                _ => None,
            })
            .collect()
    }

    /// Number of tick events seen.
    pub fn tick_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SessionEvent::Tick { .. }))
            .count()
    }

    /// The most recent event, if any.
    pub fn last(&self) -> Option<&SessionEvent> {
        self.events.last()
    }

    /// Drops every recorded event.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl SessionObserver for RecordingObserver {
    fn on_event(&mut self, event: &SessionEvent) {
        self.events.push(event.clone());
    }
}
