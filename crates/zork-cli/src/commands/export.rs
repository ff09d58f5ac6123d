use std::path::Path;

use zork_core::{StoryTree, SubtreeStats};

pub fn run(file: &Path, format: &str, output: Option<&Path>) -> Result<(), String> {
    let tree = super::load(file)?;

    let content = match format {
        "json" => export_json(&tree)?,
        "markdown" | "md" => export_markdown(&tree),
        _ => {
            return Err(format!(
                "unsupported format: \"{format}\". Use: json, markdown"
            ));
        }
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}

fn export_json(tree: &StoryTree) -> Result<String, String> {
    let export = serde_json::json!({
        "stats": SubtreeStats::of(tree.root()),
        "root": tree.root(),
    });

    serde_json::to_string_pretty(&export)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|e| format!("JSON serialization error: {e}"))
}

fn export_markdown(tree: &StoryTree) -> String {
    let root = tree.root();
    let mut out = format!("# {}\n\n{}\n\n", root.option(), root.message());

    for node in tree.iter().skip(1) {
        let indent = "  ".repeat(node.position().depth() - 1);
        let ending = if node.is_losing() {
            " *(lose)*"
        } else if node.is_winning() {
            " *(win)*"
        } else {
            ""
        };
        out.push_str(&format!(
            "{indent}- **{}** `{}`: {}{ending}\n",
            node.option(),
            node.position(),
            node.message()
        ));
    }

    out
}
