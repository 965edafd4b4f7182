//! Keyboard and signal input for a running session.
//!
//! Keys are read on a dedicated thread with crossterm and forwarded as
//! [`SessionCommand`]s; the session loop stays the only writer of state.
//! Ctrl-C outside raw mode arrives as a signal and is forwarded as quit.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::session::SessionHandle;
use crate::types::SessionCommand;

/// How often the reader thread checks whether it should stop.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Maps a key press to a session command.
///
/// - `p` / space: pause or resume
/// - `s` / `n`: skip to the next phase
/// - `q` / Esc / Ctrl-C: quit
pub fn command_for_key(key: &KeyEvent) -> Option<SessionCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(SessionCommand::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => {
            Some(SessionCommand::TogglePause)
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('n') | KeyCode::Char('N') => {
            Some(SessionCommand::Skip)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(SessionCommand::Quit),
        _ => None,
    }
}

// ============================================================================
// RawModeGuard
// ============================================================================

/// Keeps the terminal in raw mode until dropped.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// Switches the terminal into raw mode.
    pub fn enable() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw terminal mode")?;
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            tracing::warn!("failed to restore terminal mode: {}", e);
        }
    }
}

// ============================================================================
// KeyboardInput
// ============================================================================

/// Background reader turning key presses into session commands.
///
/// The reader stops when dropped, when the session goes away, or when
/// reading from the terminal fails.
#[derive(Debug)]
pub struct KeyboardInput {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl KeyboardInput {
    /// Spawns the reader thread.
    pub fn spawn(handle: SessionHandle) -> io::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let thread = thread::Builder::new()
            .name("keyboard-input".to_string())
            .spawn(move || read_keys(&handle, &stop_flag))?;

        Ok(Self {
            stop,
            thread: Some(thread),
        })
    }
}

impl Drop for KeyboardInput {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::warn!("keyboard reader thread panicked");
            }
        }
    }
}

fn read_keys(handle: &SessionHandle, stop: &AtomicBool) {
    while !stop.load(Ordering::Relaxed) {
        match event::poll(POLL_INTERVAL) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => {
                tracing::warn!("keyboard poll failed: {}", e);
                return;
            }
        }

        let key = match event::read() {
            Ok(Event::Key(key)) => key,
            Ok(_) => continue,
            Err(e) => {
                tracing::warn!("keyboard read failed: {}", e);
                return;
            }
        };

        if let Some(command) = command_for_key(&key) {
            tracing::debug!("key {:?} -> {:?}", key.code, command);
            if handle.send(command).is_err() {
                return;
            }
        }
    }
}

/// Forwards Ctrl-C signals to the session as quit requests.
///
/// The returned task should be aborted once the session has ended.
pub fn forward_ctrl_c(handle: SessionHandle) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::debug!("received Ctrl-C");
                let _ = handle.request_quit();
            }
            Err(e) => tracing::warn!("failed to listen for Ctrl-C: {}", e),
        }
    })
}

// ============================================================================
// Tests
// ============================================================================
