//! Core story tree for Zork: nodes, positions, cursor navigation, and the
//! flat-file format.
//!
//! A story is a tree where every node has at most three children. Play walks
//! from the root toward leaves that end in a win or a loss. The tree is built
//! and edited through a cursor, and round-trips through a line-oriented text
//! format (see [`format`]).
//!
//! This crate never logs or prints; every failure is returned as a
//! [`StoryError`].

/// Error types used throughout the crate.
pub mod error;
/// Parsing and serializing the flat-file story format.
pub mod format;
/// Story nodes and terminal markers.
pub mod node;
/// Position encoding of root-to-node paths.
pub mod position;
/// Game state derived from the cursor.
pub mod state;
/// Outcome counts and win probability.
pub mod stats;
/// The story tree and its cursor operations.
pub mod tree;

/// Re-export error types.
pub use error::{ErrorKind, StoryError, StoryResult};
/// Re-export node types.
pub use node::{LOSE_MARKER, StoryNode, WIN_MARKER};
/// Re-export position types.
pub use position::{Position, Slot};
/// Re-export the game state.
pub use state::GameState;
/// Re-export subtree statistics.
pub use stats::SubtreeStats;
/// Re-export the tree.
pub use tree::StoryTree;
