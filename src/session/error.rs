//! Session error types.
//!
//! The running loop itself has no fallible operations; errors only come
//! from bad configuration, misuse of the session lifecycle, or sending
//! commands to a session that has already ended.

use thiserror::Error;

/// Errors that can occur while creating or driving a session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The configuration was rejected at construction time.
    #[error("invalid session configuration: {0}")]
    InvalidConfiguration(String),

    /// `start` was called on a session that already ran.
    #[error("session has already been started")]
    AlreadyStarted,

    /// The session is no longer receiving commands.
    #[error("session is no longer accepting commands")]
    CommandChannelClosed,
}

impl SessionError {
    /// Returns true if this error was raised while building the session.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }

    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration(_) => {
                "use a non-empty name and durations of at least 1 minute"
            }
            Self::AlreadyStarted => "create a new session for every run",
            Self::CommandChannelClosed => "the session has finished; nothing to control",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SessionError::InvalidConfiguration("focus duration must be at least 1 minute".into());
        assert_eq!(
            err.to_string(),
            "invalid session configuration: focus duration must be at least 1 minute"
        );
        assert_eq!(
            SessionError::AlreadyStarted.to_string(),
            "session has already been started"
        );
    }

    #[test]
    fn test_is_configuration_error() {
        assert!(SessionError::InvalidConfiguration(String::new()).is_configuration_error());
        assert!(!SessionError::AlreadyStarted.is_configuration_error());
        assert!(!SessionError::CommandChannelClosed.is_configuration_error());
    }

    #[test]
    fn test_suggestion_not_empty() {
        for err in [
            SessionError::InvalidConfiguration("x".into()),
            SessionError::AlreadyStarted,
            SessionError::CommandChannelClosed,
        ] {
            assert!(!err.suggestion().is_empty());
        }
    }
}
