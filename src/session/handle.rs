//! Sending side of the session command channel.

use tokio::sync::mpsc;

use super::error::SessionError;
use crate::types::SessionCommand;

/// Cloneable handle used by input sources to control a running session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: mpsc::UnboundedSender<SessionCommand>,
}

impl SessionHandle {
    /// Creates a handle together with the receiver the session loop reads.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<SessionCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Sends a command to the session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::CommandChannelClosed`] once the session has
    /// dropped its receiver.
    pub fn send(&self, command: SessionCommand) -> Result<(), SessionError> {
        self.tx
            .send(command)
            .map_err(|_| SessionError::CommandChannelClosed)
    }

    /// Asks the session to stop immediately.
    pub fn request_quit(&self) -> Result<(), SessionError> {
        self.send(SessionCommand::Quit)
    }

    /// Asks the session to pause, or resume if paused.
    pub fn request_pause_toggle(&self) -> Result<(), SessionError> {
        self.send(SessionCommand::TogglePause)
    }

    /// Asks the session to end the current phase now.
    pub fn request_skip(&self) -> Result<(), SessionError> {
        self.send(SessionCommand::Skip)
    }

    /// Returns true once the session is gone.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_arrive_in_order() {
        let (handle, mut rx) = SessionHandle::channel();

        handle.request_pause_toggle().unwrap();
        handle.request_skip().unwrap();
        handle.request_quit().unwrap();

        assert_eq!(rx.try_recv().unwrap(), SessionCommand::TogglePause);
        assert_eq!(rx.try_recv().unwrap(), SessionCommand::Skip);
        assert_eq!(rx.try_recv().unwrap(), SessionCommand::Quit);
    }

    #[test]
    fn test_send_after_receiver_dropped() {
        let (handle, rx) = SessionHandle::channel();
        drop(rx);

        assert!(handle.is_closed());
        assert_eq!(
            handle.request_quit().unwrap_err(),
            SessionError::CommandChannelClosed
        );
    }
}
