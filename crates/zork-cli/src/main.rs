//! CLI frontend for playing and editing Zork story trees.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "zork",
    about = "Zork: play and edit three-way branching stories",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new story file holding only a root node
    New {
        /// Story file to create
        file: PathBuf,
    },

    /// Parse a story file and report its shape
    Check {
        /// Story file
        file: PathBuf,
    },

    /// List every node of a story
    Show {
        /// Story file
        file: PathBuf,
    },

    /// Show the win probability from a node
    Stats {
        /// Story file
        file: PathBuf,

        /// Position to measure from (default: the root)
        #[arg(short, long, default_value = "1")]
        from: String,

        /// Decimal places in the probability
        #[arg(short, long, default_value = "2")]
        precision: usize,
    },

    /// Export a story to a different format
    Export {
        /// Story file
        file: PathBuf,

        /// Output format: json, markdown
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Play through a story
    Play {
        /// Story file
        file: PathBuf,

        /// Decimal places in the win probability
        #[arg(short, long, default_value = "2")]
        precision: usize,
    },

    /// Edit a story interactively
    Edit {
        /// Story file
        file: PathBuf,

        /// Do not write changes back when quitting
        #[arg(long)]
        no_save: bool,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::New { file } => commands::new::run(&file),
        Commands::Check { file } => commands::check::run(&file),
        Commands::Show { file } => commands::show::run(&file),
        Commands::Stats {
            file,
            from,
            precision,
        } => commands::stats::run(&file, &from, precision),
        Commands::Export {
            file,
            format,
            output,
        } => commands::export::run(&file, &format, output.as_deref()),
        Commands::Play { file, precision } => commands::play::run(&file, precision),
        Commands::Edit { file, no_save } => commands::edit::run(&file, !no_save),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
