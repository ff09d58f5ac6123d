use std::path::Path;

use colored::Colorize;
use tracing::info;

use zork_play::{EditorSession, PlayConfig};

pub fn run(file: &Path, save_on_quit: bool) -> Result<(), String> {
    let tree = super::load(file)?;
    let config = PlayConfig::default().with_save_on_quit(save_on_quit);
    let mut session = EditorSession::new(tree, config);

    println!("  {} {}", "Editing".bold(), file.display());
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    super::repl::run(&mut session)?;

    if !session.config().save_on_quit {
        if session.is_dirty() {
            println!("  Changes discarded.");
        }
        return Ok(());
    }

    let dirty = session.is_dirty();
    let mut tree = session.into_tree();
    super::save(&mut tree, file)?;
    info!(file = %file.display(), dirty, "editor saved story");
    println!("  Saved to {}", file.display());

    Ok(())
}
