//! Play and editor sessions for Zork story trees.
//!
//! Both sessions take one line of user input at a time and return the text
//! to show, so they can sit behind a terminal loop, a test, or any other
//! front end.

pub mod config;
pub mod editor;
pub mod error;
pub mod play;

pub use config::PlayConfig;
pub use editor::EditorSession;
pub use error::{PlayError, PlayResult};
pub use play::PlaySession;
