//! The story tree and its cursor.

use crate::error::{StoryError, StoryResult};
use crate::node::{Iter, StoryNode, validate_text};
use crate::position::{Position, Slot};
use crate::state::GameState;
use crate::stats::SubtreeStats;

/// Option text of the placeholder root.
pub const DEFAULT_ROOT_OPTION: &str = "root";

/// Message text of the placeholder root.
pub const DEFAULT_ROOT_MESSAGE: &str = "Hello, welcome to Zork!";

/// A three-way branching story with a cursor marking the current node.
///
/// The tree owns every node. The cursor is a [`Position`] path from the
/// root, so moving to the parent is a matter of dropping the last step.
#[derive(Debug, Clone)]
pub struct StoryTree {
    root: StoryNode,
    cursor: Position,
    state: GameState,
}

impl Default for StoryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl StoryTree {
    /// A tree holding only the placeholder root.
    pub fn new() -> Self {
        Self {
            root: StoryNode::new(
                Position::root(),
                DEFAULT_ROOT_OPTION.to_string(),
                DEFAULT_ROOT_MESSAGE.to_string(),
            ),
            cursor: Position::root(),
            state: GameState::NotOver,
        }
    }

    // -----------------------------------------------------------------------
    // Reading
    // -----------------------------------------------------------------------

    /// The root node.
    pub fn root(&self) -> &StoryNode {
        &self.root
    }

    /// The node under the cursor.
    pub fn cursor(&self) -> &StoryNode {
        self.root
            .descendant(self.cursor.slots())
            .unwrap_or(&self.root)
    }

    /// Position of the node under the cursor.
    pub fn cursor_position(&self) -> &Position {
        &self.cursor
    }

    /// Option text of the node under the cursor.
    pub fn cursor_option(&self) -> &str {
        self.cursor().option()
    }

    /// Message text of the node under the cursor.
    pub fn cursor_message(&self) -> &str {
        self.cursor().message()
    }

    /// The cursor's children with their slots, left to right.
    pub fn cursor_options(&self) -> impl Iterator<Item = (Slot, &StoryNode)> {
        self.cursor().children()
    }

    /// Number of occupied slots at the cursor.
    pub fn child_count(&self) -> usize {
        self.cursor().child_count()
    }

    /// Game state as of the last cursor move.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The node at `position`, if it exists.
    pub fn node_at(&self, position: &Position) -> Option<&StoryNode> {
        self.root.descendant(position.slots())
    }

    /// Every node in pre-order.
    pub fn iter(&self) -> Iter<'_> {
        self.root.iter()
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Outcome counts for the cursor's subtree.
    pub fn cursor_stats(&self) -> SubtreeStats {
        SubtreeStats::of(self.cursor())
    }

    /// Percentage of nodes in the cursor's subtree that are winning leaves.
    pub fn win_probability(&self) -> f64 {
        self.cursor_stats().win_probability()
    }

    // -----------------------------------------------------------------------
    // Cursor movement
    // -----------------------------------------------------------------------

    /// Move the cursor back to the root.
    pub fn reset_cursor(&mut self) {
        self.move_cursor(Position::root());
    }

    /// Move the cursor to one of its children.
    ///
    /// Only the first character of `selector` is read.
    pub fn select_child(&mut self, selector: &str) -> StoryResult<()> {
        let slot = Slot::parse(selector)?;
        let target = self.cursor.child(slot);
        if self.cursor().child(slot).is_none() {
            return Err(StoryError::NodeNotFound(target));
        }
        self.move_cursor(target);
        Ok(())
    }

    /// Move the cursor to the node named by a full position string such as `1-2-1`.
    pub fn select_child_from_root(&mut self, position: &str) -> StoryResult<()> {
        self.select(position.parse()?)
    }

    /// Move the cursor to `position`.
    pub fn select(&mut self, position: Position) -> StoryResult<()> {
        if self.node_at(&position).is_none() {
            return Err(StoryError::NodeNotFound(position));
        }
        self.move_cursor(position);
        Ok(())
    }

    /// Move the cursor to its parent. Does nothing at the root.
    pub fn return_to_parent(&mut self) {
        if self.cursor.pop().is_some() {
            self.state = GameState::at(self.cursor());
        }
    }

    fn move_cursor(&mut self, position: Position) {
        self.cursor = position;
        self.state = GameState::at(self.cursor());
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Replace the option text of the node under the cursor.
    pub fn set_cursor_option(&mut self, option: &str) -> StoryResult<()> {
        self.cursor_mut()?.set_option(option)
    }

    /// Replace the message text of the node under the cursor.
    pub fn set_cursor_message(&mut self, message: &str) -> StoryResult<()> {
        self.cursor_mut()?.set_message(message)
    }

    /// Add a child in the cursor's first free slot (left, then middle, then right).
    ///
    /// Returns the new child's position. The cursor does not move.
    pub fn add_child(&mut self, option: &str, message: &str) -> StoryResult<Position> {
        let slot = self
            .cursor()
            .first_free_slot()
            .ok_or_else(|| StoryError::TreeFull(self.cursor.clone()))?;
        self.insert_child(slot, option, message)
    }

    /// Add a child in the slot named by the first character of `selector`.
    ///
    /// Unlike [`add_child`](Self::add_child) this may leave earlier slots
    /// empty. Returns the new child's position.
    pub fn add_child_at(
        &mut self,
        selector: &str,
        option: &str,
        message: &str,
    ) -> StoryResult<Position> {
        self.ensure_room()?;
        let slot = Slot::parse(selector)?;
        self.insert_child(slot, option, message)
    }

    /// A full cursor node is reported before any argument is looked at.
    pub(crate) fn insert_child(
        &mut self,
        slot: Slot,
        option: &str,
        message: &str,
    ) -> StoryResult<Position> {
        self.ensure_room()?;
        let option = validate_text("option", option)?;
        let message = validate_text("message", message)?;

        let position = self.cursor.child(slot);
        let cursor = self.cursor_mut()?;
        if cursor.child(slot).is_some() {
            return Err(StoryError::SlotOccupied(position));
        }

        cursor.insert(slot, StoryNode::new(position.clone(), option, message));
        Ok(position)
    }

    fn ensure_room(&self) -> StoryResult<()> {
        if self.cursor().is_full() {
            return Err(StoryError::TreeFull(self.cursor.clone()));
        }
        Ok(())
    }

    /// Detach and return the subtree in one of the cursor's slots.
    ///
    /// The cursor does not move.
    pub fn remove_child(&mut self, selector: &str) -> StoryResult<StoryNode> {
        let slot = Slot::parse(selector)?;
        let target = self.cursor.child(slot);
        self.cursor_mut()?
            .take(slot)
            .ok_or(StoryError::NodeNotFound(target))
    }

    pub(crate) fn root_mut(&mut self) -> &mut StoryNode {
        &mut self.root
    }

    fn cursor_mut(&mut self) -> StoryResult<&mut StoryNode> {
        self.root
            .descendant_mut(self.cursor.slots())
            .ok_or_else(|| StoryError::NodeNotFound(self.cursor.clone()))
    }
}
