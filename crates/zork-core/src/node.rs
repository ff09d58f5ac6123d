use serde::{Serialize, Serializer};

use crate::error::{StoryError, StoryResult};
use crate::position::{Position, Slot};

/// Substring that marks a leaf as a winning ending.
pub const WIN_MARKER: &str = "YOU WIN";

/// Substring that marks a leaf as a losing ending.
pub const LOSE_MARKER: &str = "YOU LOSE";

/// Delimiter between fields of a serialized line.
pub(crate) const FIELD_DELIMITER: char = '|';

type Children = [Option<Box<StoryNode>>; 3];

/// A single story unit with up to three owned children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryNode {
    position: Position,
    option: String,
    message: String,
    #[serde(serialize_with = "present_children")]
    children: Children,
}

impl StoryNode {
    pub(crate) fn new(position: Position, option: String, message: String) -> Self {
        Self {
            position,
            option,
            message,
            children: Default::default(),
        }
    }

    /// Where this node sits in its tree.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The label of the choice that leads into this node.
    pub fn option(&self) -> &str {
        &self.option
    }

    /// The narrative text shown when the node is reached.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn set_option(&mut self, option: &str) -> StoryResult<()> {
        self.option = validate_text("option", option)?;
        Ok(())
    }

    pub(crate) fn set_message(&mut self, message: &str) -> StoryResult<()> {
        self.message = validate_text("message", message)?;
        Ok(())
    }

    pub(crate) fn reset_position(&mut self, position: Position) {
        self.position = position;
    }

    /// The child in the given slot, if any.
    pub fn child(&self, slot: Slot) -> Option<&StoryNode> {
        self.children[slot.index()].as_deref()
    }

    /// Occupied slots and their children, left to right.
    pub fn children(&self) -> impl Iterator<Item = (Slot, &StoryNode)> {
        Slot::ALL
            .into_iter()
            .filter_map(|slot| self.child(slot).map(|child| (slot, child)))
    }

    /// Number of occupied slots.
    pub fn child_count(&self) -> usize {
        self.children.iter().flatten().count()
    }

    /// True when no slot is occupied.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// True when all three slots are occupied.
    pub fn is_full(&self) -> bool {
        self.children.iter().all(Option::is_some)
    }

    /// The first empty slot in left, middle, right order.
    pub fn first_free_slot(&self) -> Option<Slot> {
        Slot::ALL
            .into_iter()
            .find(|slot| self.children[slot.index()].is_none())
    }

    /// A leaf whose message contains [`WIN_MARKER`].
    pub fn is_winning(&self) -> bool {
        self.is_leaf() && self.message.contains(WIN_MARKER)
    }

    /// A leaf whose message contains [`LOSE_MARKER`].
    pub fn is_losing(&self) -> bool {
        self.is_leaf() && self.message.contains(LOSE_MARKER)
    }

    /// Follow `slots` downward from this node.
    pub fn descendant(&self, slots: &[Slot]) -> Option<&StoryNode> {
        match slots.split_first() {
            None => Some(self),
            Some((slot, rest)) => self.child(*slot)?.descendant(rest),
        }
    }

    pub(crate) fn descendant_mut(&mut self, slots: &[Slot]) -> Option<&mut StoryNode> {
        match slots.split_first() {
            None => Some(self),
            Some((slot, rest)) => self.children[slot.index()]
                .as_deref_mut()?
                .descendant_mut(rest),
        }
    }

    pub(crate) fn insert(&mut self, slot: Slot, child: StoryNode) {
        self.children[slot.index()] = Some(Box::new(child));
    }

    pub(crate) fn take(&mut self, slot: Slot) -> Option<StoryNode> {
        self.children[slot.index()].take().map(|child| *child)
    }

    /// Pre-order traversal of this subtree: node, then left, middle, right.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }
}

/// Pre-order iterator over a subtree. See [`StoryNode::iter`].
pub struct Iter<'a> {
    stack: Vec<&'a StoryNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a StoryNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().filter_map(|c| c.as_deref()));
        Some(node)
    }
}

/// Check that text can be stored in a node and survive a save/load cycle.
///
/// Returns the trimmed text.
pub(crate) fn validate_text(field: &'static str, text: &str) -> StoryResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(StoryError::EmptyText(field));
    }
    if trimmed.contains(FIELD_DELIMITER) {
        return Err(StoryError::InvalidText {
            field,
            reason: "must not contain '|'",
        });
    }
    if trimmed.contains(['\n', '\r']) {
        return Err(StoryError::InvalidText {
            field,
            reason: "must fit on one line",
        });
    }
    Ok(trimmed.to_string())
}

fn present_children<S: Serializer>(children: &Children, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(children.iter().flatten())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(message: &str) -> StoryNode {
        StoryNode::new(Position::root(), "opt".into(), message.into())
    }

    #[test]
    fn exact_win_message_is_winning() {
        let node = leaf("YOU WIN");
        assert!(node.is_winning());
        assert!(!node.is_losing());
    }

    #[test]
    fn lose_marker_matches_as_substring() {
        let node = leaf("nothing here, YOU LOSE now");
        assert!(node.is_losing());
        assert!(!node.is_winning());
    }

    #[test]
    fn unmarked_leaf_is_a_dead_end() {
        let node = leaf("The corridor ends.");
        assert!(node.is_leaf());
        assert!(!node.is_winning());
        assert!(!node.is_losing());
    }

    #[test]
    fn inner_node_is_never_terminal() {
        let mut node = leaf("YOU WIN and YOU LOSE");
        node.insert(
            Slot::Left,
            StoryNode::new(Position::root().child(Slot::Left), "a".into(), "b".into()),
        );
        assert!(!node.is_winning());
        assert!(!node.is_losing());
    }

    #[test]
    fn first_free_slot_fills_in_order() {
        let mut node = leaf("root");
        assert_eq!(node.first_free_slot(), Some(Slot::Left));
        node.insert(Slot::Left, leaf("a"));
        assert_eq!(node.first_free_slot(), Some(Slot::Middle));
        node.insert(Slot::Right, leaf("c"));
        assert_eq!(node.first_free_slot(), Some(Slot::Middle));
        node.insert(Slot::Middle, leaf("b"));
        assert_eq!(node.first_free_slot(), None);
        assert!(node.is_full());
        assert_eq!(node.child_count(), 3);
    }

    #[test]
    fn iter_is_pre_order() {
        let root_pos = Position::root();
        let mut root = StoryNode::new(root_pos.clone(), "r".into(), "r".into());
        let mut left = StoryNode::new(root_pos.child(Slot::Left), "l".into(), "l".into());
        left.insert(
            Slot::Middle,
            StoryNode::new(
                root_pos.child(Slot::Left).child(Slot::Middle),
                "lm".into(),
                "lm".into(),
            ),
        );
        root.insert(Slot::Left, left);
        root.insert(
            Slot::Right,
            StoryNode::new(root_pos.child(Slot::Right), "rr".into(), "rr".into()),
        );

        let order: Vec<_> = root.iter().map(|n| n.option()).collect();
        assert_eq!(order, ["r", "l", "lm", "rr"]);
    }

    #[test]
    fn text_validation() {
        assert_eq!(validate_text("option", "  Open  ").unwrap(), "Open");
        assert!(matches!(
            validate_text("option", "   "),
            Err(StoryError::EmptyText("option"))
        ));
        assert!(validate_text("message", "a | b").is_err());
        assert!(validate_text("message", "two\nlines").is_err());
    }
}
