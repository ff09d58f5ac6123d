use std::path::Path;

pub fn run(file: &Path, from: &str, precision: usize) -> Result<(), String> {
    let mut tree = super::load(file)?;
    tree.select_child_from_root(from)
        .map_err(|e| format!("cannot measure from {from}: {e}"))?;

    let stats = tree.cursor_stats();
    println!("  From {} ({})", tree.cursor_position(), tree.cursor_option());
    println!(
        "  {} nodes, {} winning, {} losing",
        stats.nodes, stats.winning, stats.losing
    );
    println!(
        "  Probability of a win: {:.*}%",
        precision.min(6),
        stats.win_probability()
    );

    Ok(())
}
