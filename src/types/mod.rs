//! Core data types for the Pomodoro session.
//!
//! This module defines the data structures used for:
//! - Session phases and their labels
//! - Session configuration with validation
//! - Commands fed into the running session
//! - Terminal outcomes of a session

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Number of focus intervals in one session; the last one is followed by a long break.
pub const CYCLES_PER_SESSION: u32 = 4;

/// Label shown while a short break is running.
pub const SHORT_BREAK_LABEL: &str = "short break";

/// Label shown while a long break is running.
pub const LONG_BREAK_LABEL: &str = "long break";

// ============================================================================
// Phase
// ============================================================================

/// Represents the currently active interval of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Focus interval (labelled with the session name)
    #[default]
    Focus,
    /// Short break after a focus interval
    ShortBreak,
    /// Long break after every fourth focus interval
    LongBreak,
}

impl Phase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Focus => "focus",
            Phase::ShortBreak => "short_break",
            Phase::LongBreak => "long_break",
        }
    }

    /// Returns true for both kinds of break.
    pub fn is_break(&self) -> bool {
        matches!(self, Phase::ShortBreak | Phase::LongBreak)
    }

    /// Returns the display label, using `name` for focus intervals.
    pub fn label<'a>(&self, name: &'a str) -> &'a str {
        match self {
            Phase::Focus => name,
            Phase::ShortBreak => SHORT_BREAK_LABEL,
            Phase::LongBreak => LONG_BREAK_LABEL,
        }
    }
}

// ============================================================================
// SessionConfig
// ============================================================================

/// Configuration for a Pomodoro session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Label for focus intervals
    pub name: String,
    /// Focus duration in minutes
    pub focus_minutes: u32,
    /// Short break duration in minutes
    pub short_break_minutes: u32,
    /// Long break duration in minutes
    pub long_break_minutes: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            name: "focus".to_string(),
            focus_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
        }
    }
}

impl SessionConfig {
    /// Creates a configuration from the four CLI-level values.
    pub fn new(
        name: impl Into<String>,
        focus_minutes: u32,
        short_break_minutes: u32,
        long_break_minutes: u32,
    ) -> Self {
        Self {
            name: name.into(),
            focus_minutes,
            short_break_minutes,
            long_break_minutes,
        }
    }

    /// Sets the focus interval name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the focus duration.
    pub fn with_focus_minutes(mut self, minutes: u32) -> Self {
        self.focus_minutes = minutes;
        self
    }

    /// Sets the short break duration.
    pub fn with_short_break_minutes(mut self, minutes: u32) -> Self {
        self.short_break_minutes = minutes;
        self
    }

    /// Sets the long break duration.
    pub fn with_long_break_minutes(mut self, minutes: u32) -> Self {
        self.long_break_minutes = minutes;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("session name must not be empty".to_string());
        }
        if self.focus_minutes == 0 {
            return Err("focus duration must be at least 1 minute".to_string());
        }
        if self.short_break_minutes == 0 {
            return Err("short break duration must be at least 1 minute".to_string());
        }
        if self.long_break_minutes == 0 {
            return Err("long break duration must be at least 1 minute".to_string());
        }
        Ok(())
    }

    /// Returns the length of `phase` as a [`Duration`].
    pub fn duration_of(&self, phase: Phase) -> Duration {
        let minutes = match phase {
            Phase::Focus => self.focus_minutes,
            Phase::ShortBreak => self.short_break_minutes,
            Phase::LongBreak => self.long_break_minutes,
        };
        Duration::from_secs(u64::from(minutes) * 60)
    }
}

// ============================================================================
// SessionCommand
// ============================================================================

/// Asynchronous user commands delivered to a running session.
///
/// All commands travel over a single ordered channel, so commands that
/// arrive within the same tick window are handled in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionCommand {
    /// End the session immediately
    Quit,
    /// Pause a running phase, or resume a paused one
    TogglePause,
    /// End the current phase now and move on
    Skip,
}

// ============================================================================
// SessionOutcome
// ============================================================================

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOutcome {
    /// Every interval ran to the end
    Completed,
    /// The user quit early
    Cancelled,
}

impl SessionOutcome {
    /// Returns the string representation of the outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionOutcome::Completed => "completed",
            SessionOutcome::Cancelled => "cancelled",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
