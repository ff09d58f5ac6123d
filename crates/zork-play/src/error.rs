//! Error types for play and editor sessions.

use thiserror::Error;

/// Result type for session operations.
pub type PlayResult<T> = Result<T, PlayError>;

/// Errors that can occur while playing or editing a story.
#[derive(Debug, Error)]
pub enum PlayError {
    /// The input did not match any command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A command was missing or had malformed arguments.
    #[error("usage: {0}")]
    Usage(&'static str),

    /// The game has already ended.
    #[error("the game is over, type 'restart' to play again")]
    GameOver,

    /// Story tree error.
    #[error("{0}")]
    Story(#[from] zork_core::StoryError),
}
