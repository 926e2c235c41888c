//! Application-level command failure.

use thiserror::Error;

/// Failure raised by an invoked operation itself.
///
/// The dispatcher never wraps or rewords these: a `CommandError` coming
/// out of a handler reaches the caller verbatim, so callers see the real
/// fault rather than a dispatch artifact. Resolution failures use a
/// separate error type in the dispatch crate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CommandError {
    message: String,
}

impl CommandError {
    /// Create a command failure with a message.
    pub fn new(message: impl Into<String>) -> Self {
        CommandError {
            message: message.into(),
        }
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
