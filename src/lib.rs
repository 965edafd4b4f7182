//! Pomodoro Session Library
//!
//! This library provides the core functionality for the terminal Pomodoro
//! timer. It includes:
//! - The session state machine and its event loop
//! - Injectable clocks so sessions can be simulated instantly
//! - CLI command parsing, keyboard input and display utilities
//! - Type definitions for configuration, phases and commands

pub mod cli;
pub mod session;
pub mod types;

// Re-export commonly used types for convenience
pub use session::{
    Clock, Flow, ManualClock, RecordingObserver, Session, SessionError, SessionEvent,
    SessionHandle, SessionObserver, SystemClock,
};
pub use types::{Phase, SessionCommand, SessionConfig, SessionOutcome, CYCLES_PER_SESSION};
