use std::path::Path;

use zork_play::{PlayConfig, PlaySession};

pub fn run(file: &Path, precision: usize) -> Result<(), String> {
    let tree = super::load(file)?;
    let config = PlayConfig::default().with_precision(precision);
    let mut session = PlaySession::new(tree, config);

    println!("  Type 1, 2 or 3 to choose, 'c' for your chances, 'quit' to exit.\n");
    println!("{}\n", session.intro());
    super::repl::run(&mut session)
}
