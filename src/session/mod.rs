//! Session module for the Pomodoro timer.
//!
//! This module contains the core session functionality:
//! - `timer`: Session state machine and the event loop
//! - `policy`: Phase transition and continuation rules
//! - `clock`: Injectable time sources
//! - `event`: Events reported to observers
//! - `handle`: Command channel used by input sources
//! - `error`: Session error types

pub mod clock;
pub mod error;
pub mod event;
pub mod handle;
pub mod policy;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock, TICK_PERIOD};
pub use error::SessionError;
pub use event::{NullObserver, RecordingObserver, SessionEvent, SessionObserver};
pub use handle::SessionHandle;
pub use timer::{Flow, Session};
