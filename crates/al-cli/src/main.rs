//! CLI frontend for the Adventure Lite interactive fiction engine.

mod commands;
mod markup;
mod terminal;

use std::path::PathBuf;
use std::process;

use al_story::DEFAULT_STORIES_DIR;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "adventure",
    about = "Adventure Lite: play branching text adventures written in YAML",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine activity to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the stories found in the stories directory
    List {
        /// Directory containing one subdirectory per story
        #[arg(short, long, default_value = DEFAULT_STORIES_DIR)]
        dir: PathBuf,
    },

    /// Load and validate a story without playing it
    Check {
        /// Story name (its directory name)
        name: String,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        /// Directory containing one subdirectory per story
        #[arg(short, long, default_value = DEFAULT_STORIES_DIR)]
        dir: PathBuf,
    },

    /// Play a story (asks which one if no name is given)
    Play {
        /// Story name (its directory name)
        name: Option<String>,

        /// Do not clear the screen between scenes
        #[arg(long)]
        no_clear: bool,

        /// Directory containing one subdirectory per story
        #[arg(short, long, default_value = DEFAULT_STORIES_DIR)]
        dir: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "error" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::List { dir } => commands::list::run(&dir),
        Commands::Check { name, json, dir } => commands::check::run(&dir, &name, json),
        Commands::Play {
            name,
            no_clear,
            dir,
        } => commands::play::run(&dir, name.as_deref(), !no_clear),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
