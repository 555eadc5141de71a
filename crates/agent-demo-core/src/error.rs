//! Error types for the agent demo.

use thiserror::Error;

/// A shared error type for the demo library.
///
/// Only two situations can stop the narrated sequence: the user interrupting
/// it, or the output sink refusing to accept more text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DemoError {
    /// The user interrupted the demo (Ctrl-C)
    #[error("Demo interrupted by user")]
    Interrupted,

    /// Writing to the output sink failed
    #[error("IO error: {message}")]
    Io { message: String },
}

impl DemoError {
    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Check if this error is a user-initiated interrupt
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted)
    }
}

impl From<std::io::Error> for DemoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

/// A type alias for `Result<T, DemoError>`.
pub type Result<T> = std::result::Result<T, DemoError>;
