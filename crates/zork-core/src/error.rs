use std::path::PathBuf;

use crate::position::Position;

/// Alias for `Result<T, StoryError>`.
pub type StoryResult<T> = Result<T, StoryError>;

/// The coarse failure categories a caller can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An argument was empty, malformed, or out of range.
    InvalidArgument,
    /// A navigation or removal target does not exist.
    NodeNotFound,
    /// The target node has no room for another child.
    TreeFull,
    /// A serialized line could not be understood.
    Format,
    /// A file could not be opened or created.
    NotFound,
}

/// Errors that can occur when building, navigating, or persisting a story tree.
#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    /// A required text field was empty.
    #[error("{0} must not be empty")]
    EmptyText(&'static str),

    /// A text field contains characters the flat-file format cannot carry.
    #[error("{field} {reason}")]
    InvalidText {
        /// Which field was rejected (`option` or `message`).
        field: &'static str,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A child selector was not one of `1`, `2`, `3`.
    #[error("invalid child selector \"{0}\" (expected 1, 2 or 3)")]
    InvalidSelector(String),

    /// A position string is not of the form `1(-k)*` with `k` in `1..=3`.
    #[error("invalid position \"{0}\"")]
    InvalidPosition(String),

    /// The addressed node does not exist.
    #[error("no node at position {0}")]
    NodeNotFound(Position),

    /// All three child slots of the node are occupied.
    #[error("node {0} already has three children")]
    TreeFull(Position),

    /// The named child slot is already occupied.
    #[error("position {0} is already occupied")]
    SlotOccupied(Position),

    /// A serialized line does not follow `position | option | message`.
    #[error("line {line}: {reason}")]
    Format {
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// A non-format error raised while applying a serialized line.
    #[error("line {line}: {source}")]
    AtLine {
        /// One-based line number.
        line: usize,
        /// The underlying error.
        source: Box<StoryError>,
    },

    /// Reading or writing a story file failed.
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        /// The file that was being read or written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl StoryError {
    /// Classify this error into one of the caller-facing kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyText(_)
            | Self::InvalidText { .. }
            | Self::InvalidSelector(_)
            | Self::InvalidPosition(_) => ErrorKind::InvalidArgument,
            Self::NodeNotFound(_) => ErrorKind::NodeNotFound,
            Self::TreeFull(_) | Self::SlotOccupied(_) => ErrorKind::TreeFull,
            Self::Format { .. } => ErrorKind::Format,
            Self::AtLine { source, .. } => source.kind(),
            Self::Io { .. } => ErrorKind::NotFound,
        }
    }

    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            Self::Format { .. } | Self::AtLine { .. } => self,
            other => Self::AtLine {
                line,
                source: Box::new(other),
            },
        }
    }
}
