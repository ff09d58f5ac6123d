//! Editing a story through the cursor.
//!
//! Commands follow the single-letter menu of the classic editor
//! (`v s o m a p d r q`) and also accept full words.

use tracing::debug;
use zork_core::StoryTree;

use crate::config::PlayConfig;
use crate::error::{PlayError, PlayResult};

/// An interactive editing session over a story tree.
pub struct EditorSession {
    tree: StoryTree,
    config: PlayConfig,
    dirty: bool,
}

impl EditorSession {
    /// Start editing `tree` with the cursor at the root.
    pub fn new(mut tree: StoryTree, config: PlayConfig) -> Self {
        tree.reset_cursor();
        Self {
            tree,
            config,
            dirty: false,
        }
    }

    /// The tree being edited.
    pub fn tree(&self) -> &StoryTree {
        &self.tree
    }

    /// Give the tree back.
    pub fn into_tree(self) -> StoryTree {
        self.tree
    }

    /// Whether any edit has been made since the session started.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The session configuration.
    pub fn config(&self) -> &PlayConfig {
        &self.config
    }

    /// Process a line of editor input and return the response.
    pub fn process(&mut self, input: &str) -> PlayResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let (cmd, rest) = match trimmed.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (trimmed, ""),
        };
        debug!(command = cmd, "editor command");

        match cmd.to_lowercase().as_str() {
            "v" | "view" => Ok(self.do_view()),
            "s" | "select" => self.do_select(rest),
            "g" | "goto" => self.do_goto(rest),
            "o" | "option" => self.do_set_option(rest),
            "m" | "message" => self.do_set_message(rest),
            "a" | "add" => self.do_add(rest),
            "i" | "insert" => self.do_insert(rest),
            "p" | "parent" => {
                self.tree.return_to_parent();
                Ok(self.cursor_line())
            }
            "d" | "delete" => self.do_delete(rest),
            "r" | "root" => {
                self.tree.reset_cursor();
                Ok(self.cursor_line())
            }
            "c" | "children" => Ok(self.do_children()),
            "stats" => Ok(self.do_stats()),
            "h" | "help" => Ok(HELP.to_string()),
            "q" | "quit" => Ok("Exiting editor.".to_string()),
            _ => Err(PlayError::UnknownCommand(trimmed.to_string())),
        }
    }

    fn cursor_line(&self) -> String {
        format!("Cursor at {}.", self.tree.cursor_position())
    }

    fn do_view(&self) -> String {
        format!(
            "Position: {}\nOption: {}\nMessage: {}",
            self.tree.cursor_position(),
            self.tree.cursor_option(),
            self.tree.cursor_message()
        )
    }

    fn do_select(&mut self, rest: &str) -> PlayResult<String> {
        if rest.is_empty() {
            return Err(PlayError::Usage("select <1|2|3>"));
        }
        self.tree.select_child(rest)?;
        Ok(self.cursor_line())
    }

    fn do_goto(&mut self, rest: &str) -> PlayResult<String> {
        if rest.is_empty() {
            return Err(PlayError::Usage("goto <position>"));
        }
        self.tree.select_child_from_root(rest)?;
        Ok(self.cursor_line())
    }

    fn do_set_option(&mut self, rest: &str) -> PlayResult<String> {
        if rest.is_empty() {
            return Err(PlayError::Usage("option <text>"));
        }
        self.tree.set_cursor_option(rest)?;
        self.dirty = true;
        Ok("Option set.".to_string())
    }

    fn do_set_message(&mut self, rest: &str) -> PlayResult<String> {
        if rest.is_empty() {
            return Err(PlayError::Usage("message <text>"));
        }
        self.tree.set_cursor_message(rest)?;
        self.dirty = true;
        Ok("Message set.".to_string())
    }

    fn do_add(&mut self, rest: &str) -> PlayResult<String> {
        let (option, message) =
            split_child_text(rest).ok_or(PlayError::Usage("add <option> | <message>"))?;
        let position = self.tree.add_child(option, message)?;
        self.dirty = true;
        Ok(format!("Child added at {position}."))
    }

    fn do_insert(&mut self, rest: &str) -> PlayResult<String> {
        const USAGE: &str = "insert <1|2|3> <option> | <message>";
        let (selector, text) = rest.split_once(' ').ok_or(PlayError::Usage(USAGE))?;
        let (option, message) = split_child_text(text).ok_or(PlayError::Usage(USAGE))?;
        let position = self.tree.add_child_at(selector, option, message)?;
        self.dirty = true;
        Ok(format!("Child added at {position}."))
    }

    fn do_delete(&mut self, rest: &str) -> PlayResult<String> {
        if rest.is_empty() {
            return Err(PlayError::Usage("delete <1|2|3>"));
        }
        let removed = self.tree.remove_child(rest)?;
        self.dirty = true;
        let count = removed.iter().count();
        Ok(format!(
            "Subtree at {} deleted ({count} node{}).",
            removed.position(),
            if count == 1 { "" } else { "s" }
        ))
    }

    fn do_children(&self) -> String {
        if self.tree.child_count() == 0 {
            return "The node has no children.".to_string();
        }
        self.tree
            .cursor_options()
            .map(|(slot, child)| {
                if self.config.show_positions {
                    format!("  {slot}) {} [{}]", child.option(), child.position())
                } else {
                    format!("  {slot}) {}", child.option())
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn do_stats(&self) -> String {
        let stats = self.tree.cursor_stats();
        format!(
            "Nodes: {}\nLeaves: {} ({} win, {} lose, {} dead end)\nWin probability: {}",
            stats.nodes,
            stats.leaves,
            stats.winning,
            stats.losing,
            stats.dead_ends,
            self.config.format_probability(stats.win_probability())
        )
    }
}

/// Split `option | message`.
fn split_child_text(text: &str) -> Option<(&str, &str)> {
    let (option, message) = text.split_once('|')?;
    Some((option.trim(), message.trim()))
}

const HELP: &str = "\
Editor Commands:
  v, view                        Show the cursor's position, option and message
  s, select <1|2|3>              Move to a child of the cursor
  g, goto <position>             Move to any node, e.g. goto 1-2-1
  o, option <text>               Set the cursor's option
  m, message <text>              Set the cursor's message
  a, add <option> | <message>    Add a child in the next free slot
  i, insert <n> <opt> | <msg>    Add a child in slot n
  p, parent                      Move to the cursor's parent
  d, delete <1|2|3>              Delete a child and its subtree
  r, root                        Move to the root
  c, children                    List the cursor's children
  stats                          Outcome counts below the cursor
  q, quit                        Leave the editor";
