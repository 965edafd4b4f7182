//! Session state machine and event loop.
//!
//! This module provides the core timer functionality:
//! - Phase transitions (Focus → Short/Long Break → Focus)
//! - Pause/resume that freezes the remaining duration
//! - Skip as a forced expiry
//! - A single-threaded loop multiplexing commands and clock ticks

use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};
use tracing::{debug, info, trace};

use super::clock::Clock;
use super::error::SessionError;
use super::event::{SessionEvent, SessionObserver};
use super::policy;
use crate::types::{Phase, SessionCommand, SessionConfig, SessionOutcome, CYCLES_PER_SESSION};

// ============================================================================
// Flow
// ============================================================================

/// What the loop should do after handling one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep waiting for the next event
    Continue,
    /// The session is over
    Finished(SessionOutcome),
}

// ============================================================================
// Session
// ============================================================================

/// A single Pomodoro session: four focus intervals with their breaks.
///
/// The session is driven either by [`Session::start`], which runs the whole
/// loop, or step by step through [`Session::begin`],
/// [`Session::handle_command`] and [`Session::handle_tick`].
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    phase: Phase,
    current_end: Option<Instant>,
    cycle_count: u32,
    is_running: bool,
    /// Remaining time frozen at pause; `Some` while paused
    paused_remaining: Option<Duration>,
    outcome: Option<SessionOutcome>,
}

impl Session {
    /// Creates a session from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidConfiguration`] for a blank name or a
    /// zero duration.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        config
            .validate()
            .map_err(SessionError::InvalidConfiguration)?;

        debug!(
            "created session '{}' ({}m/{}m/{}m)",
            config.name,
            config.focus_minutes,
            config.short_break_minutes,
            config.long_break_minutes
        );

        Ok(Self {
            config,
            phase: Phase::Focus,
            current_end: None,
            cycle_count: 0,
            is_running: false,
            paused_remaining: None,
            outcome: None,
        })
    }

    /// Creates a session from the four CLI-level values.
    pub fn create(
        name: impl Into<String>,
        focus_minutes: u32,
        short_break_minutes: u32,
        long_break_minutes: u32,
    ) -> Result<Self, SessionError> {
        Self::new(SessionConfig::new(
            name,
            focus_minutes,
            short_break_minutes,
            long_break_minutes,
        ))
    }

    /// Runs the session until it completes or a quit command arrives.
    ///
    /// Commands are always served before a pending tick, so several
    /// commands arriving in one tick window are applied in order.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyStarted`] if this session already ran.
    pub async fn start<C, O>(
        &mut self,
        clock: &mut C,
        mut commands: mpsc::UnboundedReceiver<SessionCommand>,
        observer: &mut O,
    ) -> Result<SessionOutcome, SessionError>
    where
        C: Clock,
        O: SessionObserver,
    {
        self.begin(clock.now(), observer)?;

        let mut commands_open = true;
        loop {
            let flow = tokio::select! {
                biased;
                command = commands.recv(), if commands_open => match command {
                    Some(command) => self.handle_command(command, clock.now(), observer),
                    None => {
                        debug!("command channel closed, running to completion");
                        commands_open = false;
                        Flow::Continue
                    }
                },
                _ = clock.tick() => self.handle_tick(clock.now(), observer),
            };

            if let Flow::Finished(outcome) = flow {
                return Ok(outcome);
            }
        }
    }

    /// Starts the first focus interval at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyStarted`] if called twice.
    pub fn begin<O: SessionObserver>(
        &mut self,
        now: Instant,
        observer: &mut O,
    ) -> Result<(), SessionError> {
        if self.is_running || self.outcome.is_some() {
            return Err(SessionError::AlreadyStarted);
        }

        self.is_running = true;
        self.enter_phase(Phase::Focus, now, observer);
        Ok(())
    }

    /// Applies one user command.
    pub fn handle_command<O: SessionObserver>(
        &mut self,
        command: SessionCommand,
        now: Instant,
        observer: &mut O,
    ) -> Flow {
        if let Some(outcome) = self.outcome {
            return Flow::Finished(outcome);
        }
        if !self.is_running {
            debug!("ignoring {:?} before start", command);
            return Flow::Continue;
        }

        debug!("command: {:?}", command);
        match command {
            SessionCommand::Quit => self.finish(SessionOutcome::Cancelled, observer),
            SessionCommand::TogglePause => {
                self.toggle_pause(now, observer);
                Flow::Continue
            }
            SessionCommand::Skip => {
                self.paused_remaining = None;
                observer.on_event(&SessionEvent::Skipped { phase: self.phase });
                self.expire(now, observer)
            }
        }
    }

    /// Handles one clock tick: report remaining time, then check expiry.
    ///
    /// Ticks while paused do nothing.
    pub fn handle_tick<O: SessionObserver>(&mut self, now: Instant, observer: &mut O) -> Flow {
        if let Some(outcome) = self.outcome {
            return Flow::Finished(outcome);
        }
        if !self.is_running || self.is_paused() {
            return Flow::Continue;
        }

        let remaining = self.remaining(now);
        trace!("tick: {}s left of {}", remaining.as_secs(), self.current_phase_label());
        observer.on_event(&SessionEvent::Tick {
            phase: self.phase,
            label: self.current_phase_label().to_string(),
            remaining_seconds: remaining.as_secs(),
            cycle: self.focus_number(),
        });

        match self.current_end {
            Some(end) if now >= end => self.expire(now, observer),
            _ => Flow::Continue,
        }
    }

    /// Ends the current phase, either naturally or by skip.
    fn expire<O: SessionObserver>(&mut self, now: Instant, observer: &mut O) -> Flow {
        let expiring = self.phase;
        if expiring.is_break() {
            self.cycle_count += 1;
        }

        if !policy::should_continue(expiring, self.cycle_count) {
            return self.finish(SessionOutcome::Completed, observer);
        }

        let next = policy::next_phase(expiring, self.cycle_count);
        self.enter_phase(next, now, observer);
        Flow::Continue
    }

    fn enter_phase<O: SessionObserver>(&mut self, phase: Phase, now: Instant, observer: &mut O) {
        let duration = self.config.duration_of(phase);
        self.phase = phase;
        self.current_end = Some(now + duration);

        info!(
            "starting {} ({}m, cycle {})",
            self.current_phase_label(),
            duration.as_secs() / 60,
            self.focus_number()
        );
        observer.on_event(&SessionEvent::PhaseStarted {
            phase,
            label: self.current_phase_label().to_string(),
            duration_seconds: duration.as_secs(),
            cycle: self.focus_number(),
        });
    }

    fn toggle_pause<O: SessionObserver>(&mut self, now: Instant, observer: &mut O) {
        match self.paused_remaining.take() {
            Some(remaining) => {
                self.current_end = Some(now + remaining);
                info!("resumed with {}s left", remaining.as_secs());
                observer.on_event(&SessionEvent::Resumed {
                    remaining_seconds: remaining.as_secs(),
                });
            }
            None => {
                let remaining = self.remaining(now);
                self.paused_remaining = Some(remaining);
                info!("paused with {}s left", remaining.as_secs());
                observer.on_event(&SessionEvent::Paused {
                    remaining_seconds: remaining.as_secs(),
                });
            }
        }
    }

    fn finish<O: SessionObserver>(&mut self, outcome: SessionOutcome, observer: &mut O) -> Flow {
        self.is_running = false;
        self.paused_remaining = None;
        self.outcome = Some(outcome);

        info!(
            "session {} after {} cycle(s)",
            outcome.as_str(),
            self.cycle_count
        );
        observer.on_event(&SessionEvent::Finished {
            outcome,
            completed_cycles: self.cycle_count,
        });
        Flow::Finished(outcome)
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Name used as the focus interval label.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// The configuration this session was built from.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The currently active phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Label of the active phase: the session name, "short break" or "long break".
    pub fn current_phase_label(&self) -> &str {
        self.phase.label(&self.config.name)
    }

    /// Instant at which the current phase ends; `None` before start.
    ///
    /// While paused this still holds the value from before the pause.
    pub fn current_end(&self) -> Option<Instant> {
        self.current_end
    }

    /// Number of completed focus-plus-break cycles.
    pub fn cycle_count(&self) -> u32 {
        self.cycle_count
    }

    /// 1-based number of the current (or most recent) focus interval.
    pub fn focus_number(&self) -> u32 {
        (self.cycle_count + 1).min(CYCLES_PER_SESSION)
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn is_paused(&self) -> bool {
        self.paused_remaining.is_some()
    }

    pub fn is_break(&self) -> bool {
        self.phase.is_break()
    }

    /// How the session ended, once it has.
    pub fn outcome(&self) -> Option<SessionOutcome> {
        self.outcome
    }

    /// Time left in the current phase as seen at `now`.
    ///
    /// While paused this is the frozen remainder.
    pub fn remaining(&self, now: Instant) -> Duration {
        if let Some(remaining) = self.paused_remaining {
            return remaining;
        }
        self.current_end
            .map(|end| end.saturating_duration_since(now))
            .unwrap_or_else(|| self.config.duration_of(self.phase))
    }
}

// ============================================================================
// Tests
// ============================================================================
