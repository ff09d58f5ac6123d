pub mod check;
pub mod edit;
pub mod export;
pub mod new;
pub mod play;
mod repl;
pub mod show;
pub mod stats;

use std::path::Path;

use tracing::debug;
use zork_core::StoryTree;

/// Load a story file, turning failures into a printable message.
fn load(file: &Path) -> Result<StoryTree, String> {
    let tree = StoryTree::load(file).map_err(|e| format!("failed to load {}: {e}", file.display()))?;
    debug!(file = %file.display(), nodes = tree.node_count(), "loaded story");
    Ok(tree)
}

/// Save a story file, turning failures into a printable message.
fn save(tree: &mut StoryTree, file: &Path) -> Result<(), String> {
    tree.save(file)
        .map_err(|e| format!("failed to save {}: {e}", file.display()))?;
    debug!(file = %file.display(), nodes = tree.node_count(), "saved story");
    Ok(())
}
