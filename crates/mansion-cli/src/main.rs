//! CLI frontend for the Mansion visual-novel engine.

mod commands;
mod terminal;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use mansion_core::DEFAULT_MANIFEST;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mansion",
    about = "Mansion: play and check branching visual novels",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a story in the terminal
    Play {
        /// Story manifest
        #[arg(short, long, default_value = DEFAULT_MANIFEST)]
        manifest: PathBuf,

        /// Starting luck (0-100), overriding the manifest
        #[arg(long)]
        luck: Option<i32>,

        /// Show each choice's luck change
        #[arg(long)]
        reveal_deltas: bool,
    },

    /// Load a story and report broken links, dead ends, and unreachable scenes
    Check {
        /// Story manifest
        #[arg(short, long, default_value = DEFAULT_MANIFEST)]
        manifest: PathBuf,
    },

    /// List the scenes of a story
    List {
        /// Story manifest
        #[arg(short, long, default_value = DEFAULT_MANIFEST)]
        manifest: PathBuf,
    },

    /// Create a new story directory with a template manifest and scenes
    Init {
        /// Name of the story directory to create
        name: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            manifest,
            luck,
            reveal_deltas,
        } => commands::play::run(&manifest, luck, reveal_deltas),
        Commands::Check { manifest } => commands::check::run(&manifest),
        Commands::List { manifest } => commands::list::run(&manifest),
        Commands::Init { name } => commands::init::run(&name),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
