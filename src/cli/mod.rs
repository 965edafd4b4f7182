//! CLI module for the Pomodoro session timer.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `display`: Output formatting and the terminal observer
//! - `input`: Keyboard and Ctrl-C handling

pub mod commands;
pub mod display;
pub mod input;

pub use commands::{Cli, Commands, OutputFormat, StartArgs};
pub use display::{Display, TerminalDisplay};
pub use input::{command_for_key, forward_ctrl_c, KeyboardInput, RawModeGuard};
