//! Playing through a story.
//!
//! `PlaySession` starts at the root, shows the current message and the
//! numbered choices below it, and follows the player's selections until a
//! leaf is reached.

use tracing::{debug, info};
use zork_core::{GameState, StoryTree};

use crate::config::PlayConfig;
use crate::error::{PlayError, PlayResult};

/// Closing line printed when a game ends.
pub const FAREWELL: &str = "Thanks for playing.";

/// An interactive play-through of a story tree.
pub struct PlaySession {
    tree: StoryTree,
    config: PlayConfig,
    finished: bool,
}

impl PlaySession {
    /// Start a play-through at the root of `tree`.
    pub fn new(mut tree: StoryTree, config: PlayConfig) -> Self {
        tree.reset_cursor();
        Self {
            tree,
            config,
            finished: false,
        }
    }

    /// The tree being played.
    pub fn tree(&self) -> &StoryTree {
        &self.tree
    }

    /// Give the tree back.
    pub fn into_tree(self) -> StoryTree {
        self.tree
    }

    /// Whether the player has reached a leaf.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Outcome at the cursor.
    pub fn state(&self) -> GameState {
        self.tree.state()
    }

    /// Opening text: the root's option as a title, then its scene.
    pub fn intro(&self) -> String {
        format!("{}\n\n{}", self.tree.cursor_option(), self.scene())
    }

    /// Process a line of player input and return the response.
    pub fn process(&mut self, input: &str) -> PlayResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        debug!(input = trimmed, "play command");
        match trimmed.to_lowercase().as_str() {
            "c" | "chance" => Ok(format!(
                "Probability of a win at this point: {}",
                self.config.format_probability(self.tree.win_probability())
            )),
            "look" | "l" => Ok(self.scene()),
            "restart" => {
                self.tree.reset_cursor();
                self.finished = false;
                Ok(self.intro())
            }
            "help" | "h" | "?" => Ok(HELP.to_string()),
            "quit" | "q" => Ok(FAREWELL.to_string()),
            _ => self.choose(trimmed),
        }
    }

    fn choose(&mut self, selector: &str) -> PlayResult<String> {
        if self.finished {
            return Err(PlayError::GameOver);
        }
        self.tree.select_child(selector)?;
        debug!(position = %self.tree.cursor_position(), "moved cursor");

        let scene = self.scene();
        if !self.tree.cursor().is_leaf() {
            return Ok(scene);
        }

        self.finished = true;
        let state = self.tree.state();
        info!(position = %self.tree.cursor_position(), %state, "game over");
        let ending = match state {
            GameState::Win | GameState::Lose => scene,
            GameState::NotOver => format!("{scene}\n\nThe story ends here."),
        };
        Ok(format!("{ending}\n\n{FAREWELL}"))
    }

    /// The cursor's message followed by its numbered choices.
    fn scene(&self) -> String {
        let mut out = self.tree.cursor_message().to_string();
        for (slot, child) in self.tree.cursor_options() {
            out.push_str(&format!("\n  {slot}) {}", child.option()));
        }
        out
    }
}

const HELP: &str = "\
Play Commands:
  1, 2, 3     Make a choice
  c           Show the probability of a win from here
  look        Show the current scene again
  restart     Start over from the beginning
  quit        Stop playing";
