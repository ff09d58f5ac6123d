use std::fmt;

use serde::Serialize;

use crate::node::StoryNode;

/// Whether the game has ended at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    /// The cursor is not on a terminal node.
    #[default]
    NotOver,
    /// The cursor is on a winning leaf.
    Win,
    /// The cursor is on a losing leaf.
    Lose,
}

impl GameState {
    /// The state implied by the cursor resting on `node`.
    pub fn at(node: &StoryNode) -> Self {
        if node.is_losing() {
            GameState::Lose
        } else if node.is_winning() {
            GameState::Win
        } else {
            GameState::NotOver
        }
    }

    /// True for [`GameState::Win`] and [`GameState::Lose`].
    pub fn is_over(self) -> bool {
        self != GameState::NotOver
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::NotOver => write!(f, "in progress"),
            GameState::Win => write!(f, "won"),
            GameState::Lose => write!(f, "lost"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    fn leaf(message: &str) -> StoryNode {
        StoryNode::new(Position::root(), "o".into(), message.into())
    }

    #[test]
    fn derives_from_leaf_markers() {
        assert_eq!(GameState::at(&leaf("YOU WIN")), GameState::Win);
        assert_eq!(GameState::at(&leaf("you fall. YOU LOSE")), GameState::Lose);
        assert_eq!(GameState::at(&leaf("quiet")), GameState::NotOver);
    }

    #[test]
    fn lose_takes_precedence_when_both_markers_present() {
        assert_eq!(GameState::at(&leaf("YOU WIN or YOU LOSE")), GameState::Lose);
    }

    #[test]
    fn over_flag() {
        assert!(!GameState::NotOver.is_over());
        assert!(GameState::Win.is_over());
        assert!(GameState::Lose.is_over());
    }
}
