use std::path::Path;

use colored::Colorize;

pub fn run(file: &Path) -> Result<(), String> {
    let tree = super::load(file)?;
    let stats = zork_core::SubtreeStats::of(tree.root());

    println!("  {} for '{}'.", "All checks passed".green(), file.display());
    println!(
        "  {} nodes, {} leaves ({} win, {} lose, {} dead end{})",
        stats.nodes,
        stats.leaves,
        stats.winning,
        stats.losing,
        stats.dead_ends,
        if stats.dead_ends == 1 { "" } else { "s" },
    );

    if stats.winning == 0 {
        println!("  {} no leaf contains \"{}\"", "warning:".yellow(), zork_core::WIN_MARKER);
    }

    Ok(())
}
