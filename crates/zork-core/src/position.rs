//! Textual coordinates of nodes in the story tree.
//!
//! The root is written `1`; every step down appends `-k`, where `k` is the
//! child slot (`1` left, `2` middle, `3` right). The middle child of the
//! root's left child is therefore `1-1-2`.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{StoryError, StoryResult};

/// Marker written for the root node.
pub const ROOT_MARKER: char = '1';

/// Separator written between path steps. Decoding skips it unread.
pub const SEPARATOR: char = '-';

/// One of the three child slots of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    /// Selector `1`.
    Left,
    /// Selector `2`.
    Middle,
    /// Selector `3`.
    Right,
}

impl Slot {
    /// All slots in fill order.
    pub const ALL: [Slot; 3] = [Slot::Left, Slot::Middle, Slot::Right];

    /// Zero-based index into a node's child array.
    pub fn index(self) -> usize {
        match self {
            Slot::Left => 0,
            Slot::Middle => 1,
            Slot::Right => 2,
        }
    }

    /// The selector character used in positions and user input.
    pub fn selector(self) -> char {
        match self {
            Slot::Left => '1',
            Slot::Middle => '2',
            Slot::Right => '3',
        }
    }

    /// Map a selector character to a slot.
    pub fn from_selector(c: char) -> Option<Slot> {
        match c {
            '1' => Some(Slot::Left),
            '2' => Some(Slot::Middle),
            '3' => Some(Slot::Right),
            _ => None,
        }
    }

    /// Parse a relative child selector.
    ///
    /// Only the first character counts; anything after it is ignored, so
    /// `"2"` and `"2nd"` both name the middle slot.
    pub fn parse(input: &str) -> StoryResult<Slot> {
        input
            .chars()
            .next()
            .and_then(Slot::from_selector)
            .ok_or_else(|| StoryError::InvalidSelector(input.to_string()))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.selector())
    }
}

/// A root-to-node path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Position(Vec<Slot>);

impl Position {
    /// The root position, `1`.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a position from the slots taken below the root.
    pub fn from_slots(slots: impl IntoIterator<Item = Slot>) -> Self {
        Self(slots.into_iter().collect())
    }

    /// The slots taken below the root, outermost first.
    pub fn slots(&self) -> &[Slot] {
        &self.0
    }

    /// Number of steps below the root.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Whether this is the root position.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The position of the given child of this node.
    pub fn child(&self, slot: Slot) -> Position {
        let mut slots = self.0.clone();
        slots.push(slot);
        Self(slots)
    }

    /// The parent position, or `None` for the root.
    pub fn parent(&self) -> Option<Position> {
        let (_, init) = self.0.split_last()?;
        Some(Self(init.to_vec()))
    }

    /// The slot this node occupies in its parent, or `None` for the root.
    pub fn last_slot(&self) -> Option<Slot> {
        self.0.last().copied()
    }

    pub(crate) fn pop(&mut self) -> Option<Slot> {
        self.0.pop()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ROOT_MARKER}")?;
        for slot in &self.0 {
            write!(f, "{SEPARATOR}{slot}")?;
        }
        Ok(())
    }
}

impl FromStr for Position {
    type Err = StoryError;

    /// Decode a position: a leading `1`, then every second character is a
    /// selector. The characters between selectors are not inspected.
    fn from_str(s: &str) -> StoryResult<Self> {
        let invalid = || StoryError::InvalidPosition(s.to_string());
        let rest = s.strip_prefix(ROOT_MARKER).ok_or_else(invalid)?;

        rest.chars()
            .skip(1)
            .step_by(2)
            .map(|c| Slot::from_selector(c).ok_or_else(invalid))
            .collect::<StoryResult<Vec<_>>>()
            .map(Self)
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
