//! The flat-file story format.
//!
//! One line per node, `position | option | message`, written in pre-order
//! (node, left, middle, right) so that every parent line precedes its
//! children. Reading is a single forward pass with no lookahead.
//!
//! ```text
//! 1 | root | Hello, welcome to the story!
//! 1-1 | Open the door | You enter a dark room.
//! 1-1-1 | Flee | YOU LOSE
//! 1-1-2 | Explore | YOU WIN
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{StoryError, StoryResult};
use crate::node::FIELD_DELIMITER;
use crate::position::Position;
use crate::tree::StoryTree;

impl StoryTree {
    /// Build a tree from its serialized text.
    ///
    /// The whole source is applied or nothing is: the first bad line aborts
    /// the parse. The cursor is left at the root.
    pub fn parse(source: &str) -> StoryResult<Self> {
        let mut tree = StoryTree::new();
        for (index, line) in source.lines().enumerate() {
            let line_no = index + 1;
            tree.apply_line(line, line_no)
                .map_err(|e| e.at_line(line_no))?;
        }
        tree.reset_cursor();
        Ok(tree)
    }

    /// Read and parse a story file.
    pub fn load(path: impl AsRef<Path>) -> StoryResult<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| StoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }

    /// Serialize the whole tree, one line per node, newline-joined.
    pub fn serialize(&self) -> String {
        self.iter()
            .map(|node| {
                format!(
                    "{} {FIELD_DELIMITER} {} {FIELD_DELIMITER} {}",
                    node.position(),
                    node.option(),
                    node.message()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Reset the cursor to the root and write the tree to `path` in one go.
    pub fn save(&mut self, path: impl AsRef<Path>) -> StoryResult<()> {
        self.reset_cursor();
        let path = path.as_ref();
        fs::write(path, self.serialize()).map_err(|source| StoryError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_line(&mut self, line: &str, line_no: usize) -> StoryResult<()> {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();
        let &[position, option, message] = fields.as_slice() else {
            return Err(StoryError::Format {
                line: line_no,
                reason: format!(
                    "expected 3 fields separated by '{FIELD_DELIMITER}', found {}",
                    fields.len()
                ),
            });
        };

        // A single-character position is the root marker.
        if position.chars().count() == 1 {
            let root = self.root_mut();
            root.set_option(option)?;
            root.set_message(message)?;
            root.reset_position(Position::root());
            return Ok(());
        }

        let field = position;
        let position: Position = field.parse()?;
        // The last character must be the new child's selector.
        let (Some(parent), Some(slot)) = (position.parent(), position.last_slot()) else {
            return Err(StoryError::InvalidPosition(field.to_string()));
        };
        if field.chars().count() != 2 * position.depth() + 1 {
            return Err(StoryError::InvalidPosition(field.to_string()));
        }
        self.select(parent)?;
        self.insert_child(slot, option, message)?;
        Ok(())
    }
}

impl FromStr for StoryTree {
    type Err = StoryError;

    fn from_str(s: &str) -> StoryResult<Self> {
        Self::parse(s)
    }
}
