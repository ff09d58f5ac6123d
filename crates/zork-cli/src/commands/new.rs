use std::path::Path;

use zork_core::StoryTree;

pub fn run(file: &Path) -> Result<(), String> {
    if file.exists() {
        return Err(format!("{} already exists", file.display()));
    }

    let mut tree = StoryTree::new();
    super::save(&mut tree, file)?;

    println!("  Created story '{}'", file.display());
    println!("  Edit it with: zork edit {}", file.display());

    Ok(())
}
