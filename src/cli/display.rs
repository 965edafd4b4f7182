//! Display utilities for the Pomodoro session CLI.
//!
//! This module provides formatted output for:
//! - Remaining time on every unpaused tick
//! - Phase changes, pause/resume and skips
//! - The final session summary
//! - Error messages

use std::io::{self, Write};
use std::time::Duration;

use crate::cli::commands::OutputFormat;
use crate::session::{SessionEvent, SessionObserver};
use crate::types::{Phase, SessionOutcome, CYCLES_PER_SESSION};

/// Terminal bell, rung when a new phase begins.
const BELL: &str = "\x07";

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("error: {}", message);
    }

    /// Formats a duration Go-style, truncated to whole seconds.
    ///
    /// `90.9s` becomes `1m30s`; hours appear only when needed.
    pub fn format_remaining(remaining: Duration) -> String {
        Self::format_seconds(remaining.as_secs())
    }

    /// Formats whole seconds as `1h2m3s`, `2m3s` or `3s`.
    pub fn format_seconds(total_seconds: u64) -> String {
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h{}m{}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m{}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Renders one event as a human-readable line.
    pub fn render_text(event: &SessionEvent) -> String {
        match event {
            SessionEvent::PhaseStarted {
                label,
                duration_seconds,
                cycle,
                ..
            } => format!(
                "* starting {} ({}) [{}/{}]",
                label,
                Self::format_seconds(*duration_seconds),
                cycle,
                CYCLES_PER_SESSION
            ),
            SessionEvent::Tick {
                label,
                remaining_seconds,
                ..
            } => format!(
                "{} left of {}",
                Self::format_seconds(*remaining_seconds),
                label
            ),
            SessionEvent::Paused { remaining_seconds } => format!(
                "|| paused ({} left)",
                Self::format_seconds(*remaining_seconds)
            ),
            SessionEvent::Resumed { remaining_seconds } => format!(
                "> resumed ({} left)",
                Self::format_seconds(*remaining_seconds)
            ),
            SessionEvent::Skipped { phase } => {
                let what = match phase {
                    Phase::Focus => "focus interval",
                    Phase::ShortBreak => "short break",
                    Phase::LongBreak => "long break",
                };
                format!(">> skipped the rest of this {}", what)
            }
            SessionEvent::Finished {
                outcome,
                completed_cycles,
            } => match outcome {
                SessionOutcome::Completed => format!(
                    "[] session complete: {} of {} cycles done",
                    completed_cycles, CYCLES_PER_SESSION
                ),
                SessionOutcome::Cancelled => format!(
                    "[] session stopped: {} of {} cycles done",
                    completed_cycles, CYCLES_PER_SESSION
                ),
            },
        }
    }
}

// ============================================================================
// TerminalDisplay
// ============================================================================

/// Session observer writing one line per event to a terminal.
///
/// In raw keyboard mode the terminal does not translate `\n`, so lines
/// end with `\r\n` instead.
pub struct TerminalDisplay<W: Write = io::Stdout> {
    out: W,
    format: OutputFormat,
    raw: bool,
    phases_started: u32,
}

impl TerminalDisplay<io::Stdout> {
    /// Creates a display writing to stdout.
    pub fn stdout(format: OutputFormat, raw: bool) -> Self {
        Self::with_writer(io::stdout(), format, raw)
    }
}

impl<W: Write> TerminalDisplay<W> {
    /// Creates a display writing to `out`.
    pub fn with_writer(out: W, format: OutputFormat, raw: bool) -> Self {
        Self {
            out,
            format,
            raw,
            phases_started: 0,
        }
    }

    /// Prints the keyboard controls (text mode only).
    pub fn show_controls(&mut self) {
        if self.format == OutputFormat::Text {
            self.write_line("controls: [p]ause/resume  [s]kip  [q]uit", false);
        }
    }

    /// Consumes the display, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&self, event: &SessionEvent) -> Option<String> {
        match self.format {
            OutputFormat::Text => Some(Display::render_text(event)),
            OutputFormat::Json => match serde_json::to_string(event) {
                Ok(json) => Some(json),
                Err(e) => {
                    tracing::warn!("failed to serialize {:?}: {}", event, e);
                    None
                }
            },
        }
    }

    fn write_line(&mut self, line: &str, bell: bool) {
        let eol = if self.raw { "\r\n" } else { "\n" };
        let bell = if bell { BELL } else { "" };
        let result = write!(self.out, "{}{}{}", bell, line, eol).and_then(|()| self.out.flush());
        if let Err(e) = result {
            tracing::warn!("failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> SessionObserver for TerminalDisplay<W> {
    fn on_event(&mut self, event: &SessionEvent) {
        let bell = match event {
            SessionEvent::PhaseStarted { .. } => {
                self.phases_started += 1;
                self.format == OutputFormat::Text && self.phases_started > 1
            }
            SessionEvent::Finished {
                outcome: SessionOutcome::Completed,
                ..
            } => self.format == OutputFormat::Text,
            _ => false,
        };

        if let Some(line) = self.render(event) {
            self.write_line(&line, bell);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
