use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(file: &Path) -> Result<(), String> {
    let tree = super::load(file)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Position", "Option", "Message", "Ending"]);

    for node in tree.iter() {
        let ending = if node.is_losing() {
            "lose"
        } else if node.is_winning() {
            "win"
        } else if node.is_leaf() {
            "dead end"
        } else {
            ""
        };
        table.add_row(vec![
            node.position().to_string(),
            node.option().to_string(),
            node.message().to_string(),
            ending.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} nodes", tree.node_count());

    Ok(())
}
