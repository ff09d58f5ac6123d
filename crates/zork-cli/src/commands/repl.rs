use std::io::{self, BufRead, Write};

use colored::Colorize;
use zork_play::{EditorSession, PlayError, PlaySession};

/// A line-at-a-time session driven from stdin.
pub(super) trait Repl {
    fn prompt(&self) -> String;

    fn process(&mut self, input: &str) -> Result<String, PlayError>;

    /// Whether the loop should end after `input` was handled successfully.
    fn done(&self, input: &str) -> bool;
}

impl Repl for PlaySession {
    fn prompt(&self) -> String {
        format!("{} ", "Please make a choice:".bold())
    }

    fn process(&mut self, input: &str) -> Result<String, PlayError> {
        PlaySession::process(self, input)
    }

    fn done(&self, input: &str) -> bool {
        is_quit(input) || self.is_finished()
    }
}

impl Repl for EditorSession {
    fn prompt(&self) -> String {
        format!("[{}] > ", self.tree().cursor_position())
    }

    fn process(&mut self, input: &str) -> Result<String, PlayError> {
        EditorSession::process(self, input)
    }

    // The editor ignores anything after the command word.
    fn done(&self, input: &str) -> bool {
        input.split_whitespace().next().is_some_and(is_quit)
    }
}

fn is_quit(word: &str) -> bool {
    word.eq_ignore_ascii_case("quit") || word.eq_ignore_ascii_case("q")
}

/// Feed stdin to `session` until EOF or until it is done.
pub(super) fn run(session: &mut impl Repl) -> Result<(), String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("{}", session.prompt());
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        if reader.read_line(&mut line).map_err(|e| e.to_string())? == 0 {
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) if !output.is_empty() => println!("{output}\n"),
            Ok(_) => {}
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
        if session.done(input) {
            break;
        }
    }

    Ok(())
}
